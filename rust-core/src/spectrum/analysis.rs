//! Averaged power-spectrum analysis
//!
//! Independent of the cleaning chain's own FFT: uses realfft so reports and
//! tests measure the output with a reference transform.

use super::windowing::apply_window;
use crate::error::FftError;
use crate::filters::windows::WindowType;
use realfft::{RealFftPlanner, RealToComplex};
use std::sync::Arc;

/// Spectrum analyzer configuration
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// FFT size (number of samples, power of 2)
    pub fft_size: usize,

    /// Sample rate in Hz
    pub sample_rate: f32,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            fft_size: 8192,
            sample_rate: 44100.0,
        }
    }
}

/// Signal energy split around a pass band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandEnergy {
    pub below: f32,
    pub inside: f32,
    pub above: f32,
}

impl BandEnergy {
    pub fn total(&self) -> f32 {
        self.below + self.inside + self.above
    }

    /// Fraction of the energy outside the pass band (0 for silence)
    pub fn out_of_band_share(&self) -> f32 {
        let total = self.total();
        if total > 0.0 {
            (self.below + self.above) / total
        } else {
            0.0
        }
    }
}

/// Welch-style spectrum analyzer with a Hann window and half-overlapping frames
pub struct SpectrumAnalyzer {
    config: AnalyzerConfig,
    r2c: Arc<dyn RealToComplex<f32>>,
}

impl SpectrumAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Result<Self, FftError> {
        if config.fft_size < 2 || !config.fft_size.is_power_of_two() {
            return Err(FftError::NotPowerOfTwo(config.fft_size));
        }

        let mut planner = RealFftPlanner::<f32>::new();
        let r2c = planner.plan_fft_forward(config.fft_size);

        Ok(Self { config, r2c })
    }

    /// Mean power |X[k]|² per bin over half-overlapping windowed frames
    ///
    /// Signals shorter than the FFT size are analysed as one zero-padded frame.
    pub fn power_spectrum(&self, signal: &[f32]) -> Result<Vec<f32>, FftError> {
        let size = self.config.fft_size;
        let hop = size / 2;

        let mut power = vec![0.0f32; self.num_bins()];
        let mut output = self.r2c.make_output_vec();
        let mut frames = 0usize;
        let mut start = 0usize;

        loop {
            let end = (start + size).min(signal.len());
            let mut frame = signal[start.min(end)..end].to_vec();
            frame.resize(size, 0.0);
            let mut input = apply_window(&frame, WindowType::Hann);

            self.r2c
                .process(&mut input, &mut output)
                .map_err(|e| FftError::Backend(e.to_string()))?;

            for (acc, bin) in power.iter_mut().zip(output.iter()) {
                *acc += bin.norm_sqr();
            }
            frames += 1;

            start += hop;
            if start + size > signal.len() {
                break;
            }
        }

        for value in power.iter_mut() {
            *value /= frames as f32;
        }

        Ok(power)
    }

    /// Frequency in Hz of the strongest bin
    pub fn dominant_frequency(&self, signal: &[f32]) -> Result<f32, FftError> {
        let power = self.power_spectrum(signal)?;
        let peak_bin = power
            .iter()
            .enumerate()
            .fold((0usize, f32::MIN), |best, (i, &p)| if p > best.1 { (i, p) } else { best })
            .0;

        Ok(self.bin_to_hz(peak_bin))
    }

    /// Energy below, inside and above `[low_hz, high_hz]`
    pub fn band_energy(&self, signal: &[f32], low_hz: f32, high_hz: f32) -> Result<BandEnergy, FftError> {
        let power = self.power_spectrum(signal)?;
        let mut energy = BandEnergy { below: 0.0, inside: 0.0, above: 0.0 };

        for (bin, &p) in power.iter().enumerate() {
            let freq = self.bin_to_hz(bin);
            if freq < low_hz {
                energy.below += p;
            } else if freq > high_hz {
                energy.above += p;
            } else {
                energy.inside += p;
            }
        }

        Ok(energy)
    }

    /// Center frequency of each bin in Hz
    pub fn frequency_bins_hz(&self) -> Vec<f32> {
        (0..self.num_bins()).map(|bin| self.bin_to_hz(bin)).collect()
    }

    /// Number of frequency bins (fft_size/2 + 1)
    pub fn num_bins(&self) -> usize {
        self.config.fft_size / 2 + 1
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    fn bin_to_hz(&self, bin: usize) -> f32 {
        bin as f32 * self.config.sample_rate / self.config.fft_size as f32
    }
}
