//! FFT kernel, STFT spectral subtraction and reference spectrum analysis

pub mod fft;
pub mod windowing;
pub mod subtraction;
pub mod analysis;

pub use fft::{fft_in_place, ifft_in_place};
pub use windowing::{apply_window, windowed_frame};
pub use subtraction::SpectralSubtraction;
pub use analysis::{AnalyzerConfig, BandEnergy, SpectrumAnalyzer};
