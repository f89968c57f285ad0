//! Error types for the cleaning chain
//!
//! Construction problems are [`ConfigError`]s and are never recoverable inside a
//! component: callers rebuild with valid parameters. Processing itself is total
//! except for contract violations, reported as [`ProcessError`].

use thiserror::Error;

/// Invalid construction parameters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Sample rate must be positive (got {0} Hz)")]
    SampleRate(u32),

    #[error("Invalid cutoff frequencies: low {low} Hz, high {high} Hz")]
    Cutoffs { low: f32, high: f32 },

    #[error("High cutoff {high} Hz must be below the Nyquist frequency {nyquist} Hz")]
    AboveNyquist { high: f32, nyquist: f32 },

    #[error("Transform size must be a positive power of 2 (got {0})")]
    TransformSize(usize),

    #[error("Hop size must be positive and not greater than the transform size {size} (got {hop})")]
    HopSize { hop: usize, size: usize },

    #[error("Reduction factor must be between 0 and 1 (got {0})")]
    ReductionFactor(f32),
}

/// FFT kernel preconditions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FftError {
    #[error("FFT length must be a power of 2 (got {0})")]
    NotPowerOfTwo(usize),

    #[error("Reference FFT failed: {0}")]
    Backend(String),
}

/// Contract violations while processing a signal
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProcessError {
    #[error("Noise profile has {actual} bins, expected {expected}")]
    NoiseProfileLength { expected: usize, actual: usize },

    #[error(transparent)]
    Fft(#[from] FftError),
}

/// Errors from the file-level cleaning job
#[derive(Error, Debug)]
pub enum CleanerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Process(#[from] ProcessError),

    #[error(transparent)]
    Analysis(#[from] FftError),

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ConfigFile(#[from] toml::de::Error),

    #[error("Invalid channel layout: {0}")]
    ChannelLayout(String),

    #[error("Audio data is empty")]
    EmptyAudio,
}
