//! Cleaning parameters, optionally loaded from a TOML file
//!
//! ```toml
//! low_cutoff = 100.0
//! high_cutoff = 8000.0
//! noise_reduction = 0.5
//! ```

use crate::audio::AudioProcessor;
use crate::error::{CleanerError, ConfigError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Band-pass edges and denoising strength for one cleaning job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanerConfig {
    /// Lower band-pass edge in Hz
    pub low_cutoff: f32,

    /// Upper band-pass edge in Hz
    pub high_cutoff: f32,

    /// Spectral subtraction factor (0-1)
    pub noise_reduction: f32,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            low_cutoff: 100.0,
            high_cutoff: 8000.0,
            noise_reduction: 0.5,
        }
    }
}

impl CleanerConfig {
    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(text: &str) -> Result<Self, CleanerError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a TOML config file
    pub fn load(path: &Path) -> Result<Self, CleanerError> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("Loaded {:?} from {}", config, path.display());
        Ok(config)
    }

    /// Build the cleaning chain for a stream at `sample_rate`
    pub fn build_processor(&self, sample_rate: u32) -> Result<AudioProcessor, ConfigError> {
        AudioProcessor::new(sample_rate, self.low_cutoff, self.high_cutoff, self.noise_reduction)
    }
}
