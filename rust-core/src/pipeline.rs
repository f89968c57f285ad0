//! File-level cleaning job: decode, clean every channel, encode, report

use crate::audio::{deinterleave, process_interleaved, read_wav, write_wav};
use crate::config::CleanerConfig;
use crate::error::CleanerError;
use crate::spectrum::{AnalyzerConfig, BandEnergy, SpectrumAnalyzer};
use std::path::Path;

/// Summary of one cleaning job, measured on the first channel
#[derive(Debug, Clone)]
pub struct CleanReport {
    pub sample_rate: u32,
    pub channels: u16,
    pub frames: usize,
    pub before: BandEnergy,
    pub after: BandEnergy,
}

/// Clean `input` into a 32-bit float WAV at `output`
pub fn clean_file(input: &Path, output: &Path, config: &CleanerConfig) -> Result<CleanReport, CleanerError> {
    let decoded = read_wav(input)?;
    if decoded.samples.is_empty() {
        return Err(CleanerError::EmptyAudio);
    }

    let processor = config.build_processor(decoded.sample_rate)?;
    let channels = decoded.channels as usize;
    let cleaned = process_interleaved(&processor, &decoded.samples, channels)?;

    write_wav(output, &cleaned, decoded.sample_rate, decoded.channels)?;

    let analyzer = SpectrumAnalyzer::new(AnalyzerConfig {
        sample_rate: decoded.sample_rate as f32,
        ..AnalyzerConfig::default()
    })?;
    let before = first_channel_energy(&analyzer, &decoded.samples, channels, config)?;
    let after = first_channel_energy(&analyzer, &cleaned, channels, config)?;

    Ok(CleanReport {
        sample_rate: decoded.sample_rate,
        channels: decoded.channels,
        frames: decoded.frames(),
        before,
        after,
    })
}

fn first_channel_energy(
    analyzer: &SpectrumAnalyzer,
    samples: &[f32],
    channels: usize,
    config: &CleanerConfig,
) -> Result<BandEnergy, CleanerError> {
    let split = deinterleave(samples, channels)?;
    let first = split.first().map(Vec::as_slice).unwrap_or(&[]);
    Ok(analyzer.band_energy(first, config.low_cutoff, config.high_cutoff)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::interleave;
    use std::f32::consts::PI;

    #[test]
    fn test_clean_stereo_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("noisy.wav");
        let output = dir.path().join("clean.wav");

        let len = 22050;
        let left: Vec<f32> = (0..len)
            .map(|n| {
                let t = n as f32 / 44100.0;
                0.6 * (2.0 * PI * 800.0 * t).sin() + 0.4 * (2.0 * PI * 15000.0 * t).sin()
            })
            .collect();
        let right: Vec<f32> = left.iter().map(|&x| -x).collect();
        write_wav(&input, &interleave(&[left, right]), 44100, 2).unwrap();

        let config = CleanerConfig { low_cutoff: 300.0, high_cutoff: 3000.0, noise_reduction: 0.5 };
        let report = clean_file(&input, &output, &config).unwrap();

        assert_eq!(report.sample_rate, 44100);
        assert_eq!(report.channels, 2);
        assert_eq!(report.frames, len);
        assert!(report.after.out_of_band_share() < report.before.out_of_band_share());

        let cleaned = read_wav(&output).unwrap();
        assert_eq!(cleaned.samples.len(), 2 * len);
        assert_eq!(cleaned.channels, 2);
    }

    #[test]
    fn test_invalid_config_for_rate() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("low_rate.wav");
        let output = dir.path().join("out.wav");
        write_wav(&input, &vec![0.1; 8000], 8000, 1).unwrap();

        // Default 8 kHz upper edge is above Nyquist at 8 kHz sampling
        let result = clean_file(&input, &output, &CleanerConfig::default());
        assert!(matches!(result, Err(CleanerError::Config(_))));
        assert!(!output.exists());
    }
}
