//! Python bindings for the band-pass filter

use pyo3::prelude::*;
use numpy::{PyArray1, PyReadonlyArray1};
use crate::filters::BandPassFilter;
use super::value_error;

/// Band-pass filter exposed to Python
#[pyclass(name = "BandPassFilter")]
pub struct PyBandPassFilter {
    filter: BandPassFilter,
}

#[pymethods]
impl PyBandPassFilter {
    /// Design a 65-tap band-pass filter
    ///
    /// Args:
    ///     sample_rate: Sample rate in Hz
    ///     low_cutoff: Lower cutoff frequency in Hz
    ///     high_cutoff: Upper cutoff frequency in Hz (below Nyquist)
    ///
    /// Raises:
    ///     ValueError: for invalid rates or cutoffs
    #[new]
    fn new(sample_rate: u32, low_cutoff: f32, high_cutoff: f32) -> PyResult<Self> {
        let filter = BandPassFilter::new(sample_rate, low_cutoff, high_cutoff).map_err(value_error)?;
        Ok(Self { filter })
    }

    /// Filter a signal
    ///
    /// Args:
    ///     samples: float32 numpy array
    ///
    /// Returns:
    ///     Filtered signal of the same length
    fn apply<'py>(
        &self,
        py: Python<'py>,
        samples: PyReadonlyArray1<f32>,
    ) -> PyResult<&'py PyArray1<f32>> {
        let output = self.filter.apply(samples.as_slice()?);
        Ok(PyArray1::from_vec(py, output))
    }

    /// Get filter coefficients
    fn get_coefficients<'py>(&self, py: Python<'py>) -> &'py PyArray1<f32> {
        PyArray1::from_slice(py, self.filter.coefficients())
    }
}
