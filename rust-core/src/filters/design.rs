//! Band-pass FIR design using the windowing method

use super::windows::WindowType;
use std::f64::consts::PI;

/// Filter order of the band-pass kernel (taps = order + 1)
pub const FILTER_ORDER: usize = 64;

/// Number of taps in the band-pass kernel
pub const FILTER_TAPS: usize = FILTER_ORDER + 1;

/// Design a normalised band-pass FIR kernel
///
/// # Algorithm
/// 1. Ideal impulse response as the difference of two sinc low-passes
/// 2. Taper every off-center tap with a Hamming window over the filter order
/// 3. Divide by the coefficient sum so the DC-adjacent gain is unity
///
/// # Arguments
/// * `sample_rate` - Sample rate in Hz
/// * `low_cutoff` - Lower band edge in Hz
/// * `high_cutoff` - Upper band edge in Hz
///
/// # Returns
/// `FILTER_TAPS` coefficients h[n] for n = 0..=FILTER_ORDER
pub fn design_bandpass_fir(sample_rate: u32, low_cutoff: f32, high_cutoff: f32) -> Vec<f32> {
    let fs = sample_rate as f64;

    // Normalised to Nyquist (units of π rad/sample)
    let normalized_low = 2.0 * low_cutoff as f64 / fs;
    let normalized_high = 2.0 * high_cutoff as f64 / fs;

    let center = FILTER_ORDER / 2;
    let mut h = Vec::with_capacity(FILTER_TAPS);

    for i in 0..FILTER_TAPS {
        let tap = if i == center {
            // Limit of the sinc difference as n -> 0
            normalized_high - normalized_low
        } else {
            let n = i as f64 - center as f64;
            let ideal = ((PI * normalized_high * n).sin() - (PI * normalized_low * n).sin()) / (PI * n);
            ideal * WindowType::Hamming.weight(i, FILTER_TAPS)
        };

        h.push(tap as f32);
    }

    let sum: f32 = h.iter().sum();
    if sum != 0.0 {
        for coeff in h.iter_mut() {
            *coeff /= sum;
        }
    }

    h
}
