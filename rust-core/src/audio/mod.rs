//! Cleaning chain, channel handling and WAV I/O

pub mod processor;
pub mod channels;
pub mod wav;

pub use processor::AudioProcessor;
pub use channels::{deinterleave, interleave, process_interleaved};
pub use wav::{DecodedAudio, read_wav, write_wav};
