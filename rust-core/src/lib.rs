//! Cleantrack - audio cleaning core
//!
//! Band-pass filtering and spectral-subtraction denoising of decoded audio
//! tracks, with WAV I/O and optional Python bindings.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod error;
pub mod filters;
pub mod spectrum;
pub mod audio;
pub mod config;
pub mod pipeline;

#[cfg(feature = "python")]
pub mod python_bindings;

pub use error::{CleanerError, ConfigError, FftError, ProcessError};
pub use filters::{BandPassFilter, WindowType};
pub use spectrum::{SpectralSubtraction, SpectrumAnalyzer};
pub use audio::AudioProcessor;
pub use config::CleanerConfig;
pub use pipeline::{CleanReport, clean_file};
