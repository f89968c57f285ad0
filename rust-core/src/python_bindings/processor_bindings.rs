//! Python bindings for the cleaning chain

use pyo3::prelude::*;
use numpy::{PyArray1, PyReadonlyArray1};
use crate::audio::{AudioProcessor, process_interleaved};
use super::value_error;

/// Band-pass plus spectral subtraction, exposed to Python
#[pyclass(name = "AudioProcessor")]
pub struct PyAudioProcessor {
    processor: AudioProcessor,
}

#[pymethods]
impl PyAudioProcessor {
    /// Create the processing chain
    ///
    /// Args:
    ///     sample_rate: Sample rate in Hz
    ///     low_cutoff: Lower band-pass edge in Hz
    ///     high_cutoff: Upper band-pass edge in Hz
    ///     noise_reduction: Spectral subtraction factor (0-1)
    #[new]
    #[pyo3(signature = (sample_rate, low_cutoff=100.0, high_cutoff=8000.0, noise_reduction=0.5))]
    fn new(sample_rate: u32, low_cutoff: f32, high_cutoff: f32, noise_reduction: f32) -> PyResult<Self> {
        let processor = AudioProcessor::new(sample_rate, low_cutoff, high_cutoff, noise_reduction)
            .map_err(value_error)?;
        Ok(Self { processor })
    }

    /// Clean one channel
    fn process<'py>(
        &self,
        py: Python<'py>,
        samples: PyReadonlyArray1<f32>,
    ) -> PyResult<&'py PyArray1<f32>> {
        let input = samples.as_slice()?.to_vec();
        let output = py
            .allow_threads(|| self.processor.process(&input))
            .map_err(value_error)?;
        Ok(PyArray1::from_vec(py, output))
    }

    /// Clean interleaved multi-channel audio
    ///
    /// Args:
    ///     samples: Interleaved float32 numpy array
    ///     channels: Number of interleaved channels
    fn process_interleaved<'py>(
        &self,
        py: Python<'py>,
        samples: PyReadonlyArray1<f32>,
        channels: usize,
    ) -> PyResult<&'py PyArray1<f32>> {
        let input = samples.as_slice()?.to_vec();
        let output = py
            .allow_threads(|| process_interleaved(&self.processor, &input, channels))
            .map_err(value_error)?;
        Ok(PyArray1::from_vec(py, output))
    }

    /// Sample rate the chain was designed for
    fn sample_rate(&self) -> u32 {
        self.processor.sample_rate()
    }
}
