//! Windowing of time-domain frames before an FFT

use crate::filters::windows::{WindowType, generate_window};
use num_complex::Complex32;

/// Apply a window of matching length to a signal
pub fn apply_window(signal: &[f32], window_type: WindowType) -> Vec<f32> {
    let window = generate_window(window_type, signal.len());

    signal
        .iter()
        .zip(window.iter())
        .map(|(&s, &w)| s * w)
        .collect()
}

/// Extract a windowed frame as a complex FFT buffer
///
/// # Arguments
/// * `signal` - Long signal
/// * `start` - Index of the first frame sample
/// * `window` - Window weights; the frame has the window's length
///
/// # Returns
/// `signal[start..start + window.len()]` multiplied by the window, zero-padded
/// where the frame runs past the end of the signal
pub fn windowed_frame(signal: &[f32], start: usize, window: &[f32]) -> Vec<Complex32> {
    window
        .iter()
        .enumerate()
        .map(|(i, &w)| {
            let sample = signal.get(start + i).copied().unwrap_or(0.0);
            Complex32::new(sample * w, 0.0)
        })
        .collect()
}
