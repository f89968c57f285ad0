//! STFT spectral subtraction with windowed overlap-add resynthesis
//!
//! Each frame is Hann-windowed, transformed, stripped of the scaled noise power
//! per bin (never below 1% of the observed power), transformed back and added
//! into the output through the same Hann window.

use super::fft::{fft_in_place, ifft_in_place};
use super::windowing::windowed_frame;
use crate::error::{ConfigError, FftError, ProcessError};
use crate::filters::windows::{WindowType, generate_window, overlap_add_gain};
use num_complex::Complex32;

/// Leading duration used for noise estimation when none is given
pub const DEFAULT_NOISE_ESTIMATION_SECS: f32 = 0.5;

/// Rate used to turn the estimation duration into a sample count.
/// Fixed at 44.1 kHz whatever the signal's actual rate.
pub const NOISE_ESTIMATION_RATE: f32 = 44100.0;

/// Lowest fraction of a bin's power that survives subtraction
pub const POWER_FLOOR: f32 = 0.01;

/// Stationary-noise remover
#[derive(Debug, Clone)]
pub struct SpectralSubtraction {
    transform_size: usize,
    hop_size: usize,
    reduction_factor: f32,

    /// Hann window of `transform_size`, used for analysis and synthesis
    window: Vec<f32>,
}

impl SpectralSubtraction {
    /// Create a spectral subtractor
    ///
    /// # Arguments
    /// * `transform_size` - FFT size, a positive power of two
    /// * `hop_size` - Frame advance, `1..=transform_size`
    /// * `reduction_factor` - Share of the noise power to remove, `0.0..=1.0`
    pub fn new(transform_size: usize, hop_size: usize, reduction_factor: f32) -> Result<Self, ConfigError> {
        if !transform_size.is_power_of_two() {
            return Err(ConfigError::TransformSize(transform_size));
        }

        if hop_size == 0 || hop_size > transform_size {
            return Err(ConfigError::HopSize {
                hop: hop_size,
                size: transform_size,
            });
        }

        if !(0.0..=1.0).contains(&reduction_factor) {
            return Err(ConfigError::ReductionFactor(reduction_factor));
        }

        Ok(Self {
            transform_size,
            hop_size,
            reduction_factor,
            window: Self::window_function(transform_size),
        })
    }

    /// Hann window w[i] = 0.5·(1 - cos(2πi/(size-1)))
    pub fn window_function(size: usize) -> Vec<f32> {
        generate_window(WindowType::Hann, size)
    }

    /// Windowed spectrum of `input[start..start + transform_size]`, zero-padded past the end
    pub fn forward_frame(&self, input: &[f32], start: usize) -> Result<Vec<Complex32>, FftError> {
        let mut buffer = windowed_frame(input, start, &self.window);
        fft_in_place(&mut buffer)?;
        Ok(buffer)
    }

    /// Real time-domain frame of a (Hermitian) spectrum
    pub fn inverse_frame(&self, mut spectrum: Vec<Complex32>) -> Result<Vec<f32>, FftError> {
        ifft_in_place(&mut spectrum)?;
        Ok(spectrum.into_iter().map(|c| c.re).collect())
    }

    /// Noise power per bin from the leading half second of `input`
    pub fn estimate_noise_profile(&self, input: &[f32]) -> Result<Vec<f32>, ProcessError> {
        self.estimate_noise_profile_for(input, DEFAULT_NOISE_ESTIMATION_SECS)
    }

    /// Mean power per non-negative bin over the frames that fit strictly inside
    /// the first `duration_secs` of `input`
    ///
    /// Returns an all-zero profile when no frame fits.
    pub fn estimate_noise_profile_for(&self, input: &[f32], duration_secs: f32) -> Result<Vec<f32>, ProcessError> {
        let samples = ((NOISE_ESTIMATION_RATE * duration_secs) as usize).min(input.len());
        let segment = &input[..samples];

        let mut profile = vec![0.0f32; self.num_bins()];
        let mut frames = 0usize;
        let mut start = 0usize;

        while start + self.transform_size < samples {
            let spectrum = self.forward_frame(segment, start)?;
            for (acc, bin) in profile.iter_mut().zip(spectrum.iter()) {
                *acc += bin.norm_sqr();
            }

            frames += 1;
            start += self.hop_size;
        }

        if frames == 0 {
            log::warn!(
                "No {}-sample frame fits in {} estimation samples; using a silent noise profile",
                self.transform_size,
                samples
            );
            return Ok(profile);
        }

        for value in profile.iter_mut() {
            *value /= frames as f32;
        }

        log::debug!("Estimated noise profile from {} frames", frames);
        Ok(profile)
    }

    /// Remove stationary noise from `input`
    ///
    /// When `noise_profile` is `None` one is estimated from the input itself.
    /// Output has the input's length; samples not covered by a full frame stay zero.
    ///
    /// # Errors
    /// `ProcessError::NoiseProfileLength` if the profile does not have
    /// `transform_size / 2 + 1` bins.
    pub fn process(&self, input: &[f32], noise_profile: Option<&[f32]>) -> Result<Vec<f32>, ProcessError> {
        let estimated;
        let profile = match noise_profile {
            Some(profile) => profile,
            None => {
                estimated = self.estimate_noise_profile(input)?;
                &estimated
            }
        };

        if profile.len() != self.num_bins() {
            return Err(ProcessError::NoiseProfileLength {
                expected: self.num_bins(),
                actual: profile.len(),
            });
        }

        let size = self.transform_size;
        let half = size / 2;
        let mut output = vec![0.0f32; input.len()];
        let mut frames = 0usize;
        let mut start = 0usize;

        while start + size <= input.len() {
            let mut spectrum = self.forward_frame(input, start)?;

            for i in 0..=half {
                let (magnitude, phase) = spectrum[i].to_polar();
                let power = magnitude * magnitude;
                let noise_power = profile[i] * self.reduction_factor;
                let result_power = (power - noise_power).max(POWER_FLOOR * power);

                spectrum[i] = Complex32::from_polar(result_power.sqrt(), phase);

                // Conjugate mirror keeps the inverse real
                if i > 0 && i < half {
                    spectrum[size - i] = spectrum[i].conj();
                }
            }

            let frame = self.inverse_frame(spectrum)?;
            for ((out, &sample), &w) in output[start..start + size]
                .iter_mut()
                .zip(frame.iter())
                .zip(self.window.iter())
            {
                *out += sample * w;
            }

            frames += 1;
            start += self.hop_size;
        }

        log::debug!("Spectral subtraction processed {} frames of {} samples", frames, size);
        Ok(output)
    }

    /// Steady-state amplitude gain of the analysis/synthesis window pair at this hop
    pub fn overlap_add_gain(&self) -> f32 {
        overlap_add_gain(&self.window, self.hop_size)
    }

    pub fn transform_size(&self) -> usize {
        self.transform_size
    }

    pub fn hop_size(&self) -> usize {
        self.hop_size
    }

    pub fn reduction_factor(&self) -> f32 {
        self.reduction_factor
    }

    /// Number of non-negative frequency bins (transform_size/2 + 1)
    pub fn num_bins(&self) -> usize {
        self.transform_size / 2 + 1
    }
}
