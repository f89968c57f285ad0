//! Linear-phase band-pass filter over whole sample sequences

use super::design::design_bandpass_fir;
use crate::error::ConfigError;

/// 65-tap windowed-sinc band-pass filter
///
/// Coefficients are designed once at construction and never change, so a single
/// instance can filter any number of independent sequences (and threads).
#[derive(Debug, Clone)]
pub struct BandPassFilter {
    sample_rate: u32,
    low_cutoff: f32,
    high_cutoff: f32,
    coefficients: Vec<f32>,
}

impl BandPassFilter {
    /// Design a band-pass filter
    ///
    /// # Arguments
    /// * `sample_rate` - Sample rate in Hz
    /// * `low_cutoff` - Lower cutoff frequency in Hz
    /// * `high_cutoff` - Upper cutoff frequency in Hz, below Nyquist
    pub fn new(sample_rate: u32, low_cutoff: f32, high_cutoff: f32) -> Result<Self, ConfigError> {
        if sample_rate == 0 {
            return Err(ConfigError::SampleRate(sample_rate));
        }

        // Negated comparisons also reject NaN
        if !(low_cutoff >= 0.0 && high_cutoff >= 0.0 && low_cutoff < high_cutoff) || !high_cutoff.is_finite() {
            return Err(ConfigError::Cutoffs {
                low: low_cutoff,
                high: high_cutoff,
            });
        }

        // Integer half rate: at odd rates the last half hertz is rejected too
        let nyquist = (sample_rate / 2) as f32;
        if high_cutoff >= nyquist {
            return Err(ConfigError::AboveNyquist {
                high: high_cutoff,
                nyquist,
            });
        }

        let coefficients = design_bandpass_fir(sample_rate, low_cutoff, high_cutoff);
        log::debug!(
            "Designed {}-tap band-pass {}-{} Hz at {} Hz",
            coefficients.len(),
            low_cutoff,
            high_cutoff,
            sample_rate
        );

        Ok(Self {
            sample_rate,
            low_cutoff,
            high_cutoff,
            coefficients,
        })
    }

    /// Filter a sequence by causal convolution
    ///
    /// Samples before the start of `input` are treated as zero; the output has the
    /// same length as the input.
    pub fn apply(&self, input: &[f32]) -> Vec<f32> {
        (0..input.len())
            .map(|i| {
                // y[i] = Σ h[j]·x[i-j] over the taps that reach back into the input
                let reach = (i + 1).min(self.coefficients.len());
                self.coefficients[..reach]
                    .iter()
                    .zip(input[..=i].iter().rev())
                    .map(|(&h, &x)| h * x)
                    .sum::<f32>()
            })
            .collect()
    }

    /// Filter coefficients h[n]
    pub fn coefficients(&self) -> &[f32] {
        &self.coefficients
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Band edges in Hz as (low, high)
    pub fn cutoffs(&self) -> (f32, f32) {
        (self.low_cutoff, self.high_cutoff)
    }
}
