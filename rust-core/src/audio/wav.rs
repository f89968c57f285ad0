//! WAV decoding and 32-bit float WAV output

use crate::error::CleanerError;
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::path::Path;

/// Interleaved samples with their stream parameters
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedAudio {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
    pub channels: u16,
}

impl DecodedAudio {
    /// Number of sample frames (samples per channel)
    pub fn frames(&self) -> usize {
        if self.channels == 0 {
            0
        } else {
            self.samples.len() / self.channels as usize
        }
    }
}

/// Read a WAV file as interleaved f32 samples
///
/// Integer PCM is scaled into [-1, 1) by its bit depth.
pub fn read_wav(path: &Path) -> Result<DecodedAudio, CleanerError> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();

    let samples = match spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            let scale = 1.0 / (1u64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 * scale))
                .collect::<Result<Vec<_>, _>>()?
        }
    };

    log::info!(
        "Read {} ({} Hz, {} channels, {} samples)",
        path.display(),
        spec.sample_rate,
        spec.channels,
        samples.len()
    );

    Ok(DecodedAudio {
        samples,
        sample_rate: spec.sample_rate,
        channels: spec.channels,
    })
}

/// Write interleaved samples as a 32-bit IEEE float WAV file
pub fn write_wav(path: &Path, samples: &[f32], sample_rate: u32, channels: u16) -> Result<(), CleanerError> {
    if samples.is_empty() {
        return Err(CleanerError::EmptyAudio);
    }

    let spec = WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    let mut writer = WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;

    log::info!("Wrote {} samples to {}", samples.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clean.wav");
        let samples: Vec<f32> = (0..1000).map(|i| (i as f32 * 0.01).sin() * 0.5).collect();

        write_wav(&path, &samples, 48000, 2).unwrap();
        let decoded = read_wav(&path).unwrap();

        assert_eq!(decoded.sample_rate, 48000);
        assert_eq!(decoded.channels, 2);
        assert_eq!(decoded.frames(), 500);
        assert_eq!(decoded.samples, samples);
    }

    #[test]
    fn test_reads_integer_pcm() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pcm16.wav");
        let spec = WavSpec {
            channels: 1,
            sample_rate: 44100,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };

        let mut writer = WavWriter::create(&path, spec).unwrap();
        for value in [0i16, 16384, -32768, 32767] {
            writer.write_sample(value).unwrap();
        }
        writer.finalize().unwrap();

        let decoded = read_wav(&path).unwrap();
        assert_eq!(decoded.samples.len(), 4);
        assert_eq!(decoded.samples[0], 0.0);
        assert!((decoded.samples[1] - 0.5).abs() < 1e-6);
        assert_eq!(decoded.samples[2], -1.0);
        assert!(decoded.samples[3] < 1.0 && decoded.samples[3] > 0.999);
    }

    #[test]
    fn test_rejects_empty_audio() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.wav");

        assert!(matches!(
            write_wav(&path, &[], 44100, 1),
            Err(CleanerError::EmptyAudio)
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(read_wav(Path::new("/nonexistent/input.wav")).is_err());
    }
}
