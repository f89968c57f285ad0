//! Two-stage cleaning chain: band-pass, then spectral subtraction
//!
//! The only entry point the rest of the system calls for a single channel.

use crate::error::{ConfigError, ProcessError};
use crate::filters::BandPassFilter;
use crate::spectrum::SpectralSubtraction;

/// FFT size of the denoising stage
pub const TRANSFORM_SIZE: usize = 2048;

/// Frame advance of the denoising stage
pub const HOP_SIZE: usize = TRANSFORM_SIZE / 4;

/// Mono audio cleaner
///
/// Immutable after construction, so one instance can serve several channels,
/// including from different threads.
#[derive(Debug, Clone)]
pub struct AudioProcessor {
    band_pass: BandPassFilter,
    spectral_subtraction: SpectralSubtraction,
}

impl AudioProcessor {
    /// Create the processing chain
    ///
    /// # Arguments
    /// * `sample_rate` - Sample rate in Hz
    /// * `low_cutoff` - Lower band-pass edge in Hz
    /// * `high_cutoff` - Upper band-pass edge in Hz
    /// * `noise_reduction` - Spectral subtraction factor (0-1)
    pub fn new(
        sample_rate: u32,
        low_cutoff: f32,
        high_cutoff: f32,
        noise_reduction: f32,
    ) -> Result<Self, ConfigError> {
        let band_pass = BandPassFilter::new(sample_rate, low_cutoff, high_cutoff)?;
        let spectral_subtraction = SpectralSubtraction::new(TRANSFORM_SIZE, HOP_SIZE, noise_reduction)?;

        Ok(Self {
            band_pass,
            spectral_subtraction,
        })
    }

    /// Clean one channel; the output has the input's length
    pub fn process(&self, input: &[f32]) -> Result<Vec<f32>, ProcessError> {
        let filtered = self.band_pass.apply(input);
        self.spectral_subtraction.process(&filtered, None)
    }

    pub fn band_pass(&self) -> &BandPassFilter {
        &self.band_pass
    }

    pub fn spectral_subtraction(&self) -> &SpectralSubtraction {
        &self.spectral_subtraction
    }

    pub fn sample_rate(&self) -> u32 {
        self.band_pass.sample_rate()
    }
}
