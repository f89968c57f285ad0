//! FIR band-pass design and filtering

pub mod windows;
pub mod design;
pub mod bandpass;

pub use windows::{WindowType, generate_window, overlap_add_gain};
pub use design::{FILTER_ORDER, FILTER_TAPS, design_bandpass_fir};
pub use bandpass::BandPassFilter;
