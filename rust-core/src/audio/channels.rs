//! Interleaved multi-channel handling around the mono processor

use super::processor::AudioProcessor;
use crate::error::CleanerError;
use ndarray::{Array2, ArrayView2};
use rayon::prelude::*;

/// Split interleaved samples into one sequence per channel
///
/// A trailing partial frame (fewer samples than channels) is dropped.
pub fn deinterleave(samples: &[f32], channels: usize) -> Result<Vec<Vec<f32>>, CleanerError> {
    if channels == 0 {
        return Err(CleanerError::ChannelLayout("channel count must be positive".into()));
    }

    let frames = samples.len() / channels;
    let remainder = samples.len() % channels;
    if remainder != 0 {
        log::warn!(
            "Dropping {} trailing samples that do not fill a {}-channel frame",
            remainder,
            channels
        );
    }

    let view = ArrayView2::from_shape((frames, channels), &samples[..frames * channels])
        .map_err(|e| CleanerError::ChannelLayout(e.to_string()))?;

    Ok(view.columns().into_iter().map(|column| column.to_vec()).collect())
}

/// Interleave per-channel sequences frame by frame
///
/// Channels shorter than the longest one are padded with silence.
pub fn interleave(channels: &[Vec<f32>]) -> Vec<f32> {
    let frames = channels.iter().map(Vec::len).max().unwrap_or(0);
    let mut interleaved = Array2::<f32>::zeros((frames, channels.len()));

    for (ch, data) in channels.iter().enumerate() {
        for (frame, &sample) in data.iter().enumerate() {
            interleaved[[frame, ch]] = sample;
        }
    }

    interleaved.into_raw_vec()
}

/// Clean interleaved audio channel by channel
///
/// Mono input goes straight through the processor; otherwise channels are
/// split, cleaned in parallel and interleaved again.
pub fn process_interleaved(
    processor: &AudioProcessor,
    samples: &[f32],
    channels: usize,
) -> Result<Vec<f32>, CleanerError> {
    if channels == 1 {
        return Ok(processor.process(samples)?);
    }

    let split = deinterleave(samples, channels)?;
    log::info!(
        "Cleaning {} channels of {} samples",
        split.len(),
        split.first().map_or(0, Vec::len)
    );

    let cleaned = split
        .par_iter()
        .map(|channel| processor.process(channel))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(interleave(&cleaned))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deinterleave_stereo() {
        let samples = [1.0, -1.0, 2.0, -2.0, 3.0, -3.0];
        let split = deinterleave(&samples, 2).unwrap();

        assert_eq!(split, vec![vec![1.0, 2.0, 3.0], vec![-1.0, -2.0, -3.0]]);
    }

    #[test]
    fn test_deinterleave_drops_partial_frame() {
        let samples = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let split = deinterleave(&samples, 3).unwrap();

        assert_eq!(split, vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]);
    }

    #[test]
    fn test_deinterleave_rejects_zero_channels() {
        assert!(matches!(
            deinterleave(&[1.0, 2.0], 0),
            Err(CleanerError::ChannelLayout(_))
        ));
    }

    #[test]
    fn test_interleave_pads_short_channels() {
        let channels = vec![vec![1.0, 2.0, 3.0], vec![10.0]];
        assert_eq!(interleave(&channels), vec![1.0, 10.0, 2.0, 0.0, 3.0, 0.0]);
    }

    #[test]
    fn test_split_and_join_are_inverse() {
        let samples: Vec<f32> = (0..600).map(|i| i as f32).collect();
        let joined = interleave(&deinterleave(&samples, 6).unwrap());
        assert_eq!(joined, samples);
    }

    #[test]
    fn test_channels_are_processed_independently() {
        let processor = AudioProcessor::new(44100, 100.0, 8000.0, 0.5).unwrap();

        let left: Vec<f32> = (0..8192).map(|n| (n as f32 * 0.05).sin()).collect();
        let right: Vec<f32> = (0..8192).map(|n| 0.3 * (n as f32 * 0.2).cos()).collect();
        let stereo = interleave(&[left.clone(), right.clone()]);

        let cleaned = process_interleaved(&processor, &stereo, 2).unwrap();
        assert_eq!(cleaned.len(), stereo.len());

        let split = deinterleave(&cleaned, 2).unwrap();
        assert_eq!(split[0], processor.process(&left).unwrap());
        assert_eq!(split[1], processor.process(&right).unwrap());
    }

    #[test]
    fn test_mono_passes_straight_through() {
        let processor = AudioProcessor::new(44100, 100.0, 8000.0, 0.5).unwrap();
        let mono: Vec<f32> = (0..4096).map(|n| (n as f32 * 0.01).sin()).collect();

        assert_eq!(
            process_interleaved(&processor, &mono, 1).unwrap(),
            processor.process(&mono).unwrap()
        );
    }
}
