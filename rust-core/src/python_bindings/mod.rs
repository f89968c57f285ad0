//! PyO3 bindings for Python integration

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

mod filter_bindings;
mod spectrum_bindings;
mod processor_bindings;

/// Configuration and contract errors surface as `ValueError`
fn value_error<E: std::fmt::Display>(err: E) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python module definition
#[pymodule]
fn cleantrack(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<filter_bindings::PyBandPassFilter>()?;
    m.add_class::<spectrum_bindings::PySpectralSubtraction>()?;
    m.add_class::<processor_bindings::PyAudioProcessor>()?;

    Ok(())
}
