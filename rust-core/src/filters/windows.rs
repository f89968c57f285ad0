//! Window functions for FIR design and short-time spectral analysis

use std::f64::consts::PI;

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowType {
    /// Hann window: w[n] = 0.5 - 0.5*cos(2πn/(M-1))
    /// Analysis and synthesis window of the spectral subtractor
    Hann,

    /// Hamming window: w[n] = 0.54 - 0.46*cos(2πn/(M-1))
    /// Tapers the band-pass kernel, ~53 dB sidelobe attenuation
    Hamming,
}

impl WindowType {
    /// Evaluate the window at index `n` of a window with `length` points
    pub fn weight(&self, n: usize, length: usize) -> f64 {
        if length <= 1 {
            return 1.0;
        }

        let angle = 2.0 * PI * n as f64 / (length - 1) as f64;
        match self {
            WindowType::Hann => 0.5 * (1.0 - angle.cos()),
            WindowType::Hamming => 0.54 - 0.46 * angle.cos(),
        }
    }
}

/// Generate window coefficients
///
/// # Arguments
/// * `window_type` - Type of window function
/// * `length` - Number of samples (M)
///
/// # Returns
/// Vector of window coefficients w[n] for n = 0..M-1. A single-point window is `[1.0]`.
pub fn generate_window(window_type: WindowType, length: usize) -> Vec<f32> {
    (0..length)
        .map(|n| window_type.weight(n, length) as f32)
        .collect()
}

/// Steady-state gain of windowed overlap-add when `window` is applied twice
/// (analysis and synthesis) and frames advance by `hop` samples.
///
/// Averages Σ_k w[n + k·hop]² over one hop period. A Hann window at a quarter-size
/// hop gives ≈ 1.5.
pub fn overlap_add_gain(window: &[f32], hop: usize) -> f32 {
    if window.is_empty() || hop == 0 {
        return 0.0;
    }

    let period = hop.min(window.len());
    let mut total = 0.0f64;
    for n in 0..period {
        let mut sum = 0.0f64;
        let mut idx = n;
        while idx < window.len() {
            let w = window[idx] as f64;
            sum += w * w;
            idx += hop;
        }
        total += sum;
    }

    (total / period as f64) as f32
}
