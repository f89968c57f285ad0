//! Python bindings for spectral subtraction

use pyo3::prelude::*;
use numpy::{PyArray1, PyReadonlyArray1};
use crate::spectrum::SpectralSubtraction;
use crate::spectrum::subtraction::DEFAULT_NOISE_ESTIMATION_SECS;
use super::value_error;

/// Spectral subtraction denoiser exposed to Python
#[pyclass(name = "SpectralSubtraction")]
pub struct PySpectralSubtraction {
    denoiser: SpectralSubtraction,
}

#[pymethods]
impl PySpectralSubtraction {
    /// Create a denoiser
    ///
    /// Args:
    ///     transform_size: FFT size (power of 2)
    ///     hop_size: Frame advance (1..=transform_size)
    ///     reduction_factor: Share of the noise power to remove (0-1)
    #[new]
    #[pyo3(signature = (transform_size=2048, hop_size=512, reduction_factor=0.5))]
    fn new(transform_size: usize, hop_size: usize, reduction_factor: f32) -> PyResult<Self> {
        let denoiser = SpectralSubtraction::new(transform_size, hop_size, reduction_factor)
            .map_err(value_error)?;
        Ok(Self { denoiser })
    }

    /// Estimate the noise power spectrum from the start of a signal
    ///
    /// Args:
    ///     samples: float32 numpy array
    ///     duration_sec: Leading duration to analyse (default: 0.5)
    ///
    /// Returns:
    ///     transform_size/2 + 1 power values
    #[pyo3(signature = (samples, duration_sec=DEFAULT_NOISE_ESTIMATION_SECS))]
    fn estimate_noise_profile<'py>(
        &self,
        py: Python<'py>,
        samples: PyReadonlyArray1<f32>,
        duration_sec: f32,
    ) -> PyResult<&'py PyArray1<f32>> {
        let profile = self
            .denoiser
            .estimate_noise_profile_for(samples.as_slice()?, duration_sec)
            .map_err(value_error)?;
        Ok(PyArray1::from_vec(py, profile))
    }

    /// Remove stationary noise
    ///
    /// Args:
    ///     samples: float32 numpy array
    ///     noise_profile: Optional noise power spectrum; estimated when omitted
    ///
    /// Raises:
    ///     ValueError: if the noise profile has the wrong length
    #[pyo3(signature = (samples, noise_profile=None))]
    fn process<'py>(
        &self,
        py: Python<'py>,
        samples: PyReadonlyArray1<f32>,
        noise_profile: Option<PyReadonlyArray1<f32>>,
    ) -> PyResult<&'py PyArray1<f32>> {
        let profile = match &noise_profile {
            Some(profile) => Some(profile.as_slice()?),
            None => None,
        };

        let output = self
            .denoiser
            .process(samples.as_slice()?, profile)
            .map_err(value_error)?;
        Ok(PyArray1::from_vec(py, output))
    }

    /// Number of noise-profile bins
    fn num_bins(&self) -> usize {
        self.denoiser.num_bins()
    }
}
