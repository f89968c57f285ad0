//! Command-line audio cleaner
//!
//! Removes out-of-band energy and stationary background noise from a WAV file.

use clap::Parser;
use cleantrack::{CleanerConfig, CleanerError, clean_file};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "cleantrack", version, about = "Removes background noise from an audio track")]
struct Args {
    /// Input WAV file
    input: PathBuf,

    /// Output WAV file (32-bit float)
    output: PathBuf,

    /// TOML file with low_cutoff, high_cutoff and noise_reduction
    #[arg(long)]
    config: Option<PathBuf>,

    /// Low cutoff frequency for the band-pass filter in Hz [default: 100]
    #[arg(long)]
    low_cutoff: Option<f32>,

    /// High cutoff frequency for the band-pass filter in Hz [default: 8000]
    #[arg(long)]
    high_cutoff: Option<f32>,

    /// Spectral subtraction noise reduction factor, 0-1 [default: 0.5]
    #[arg(long)]
    noise_reduction: Option<f32>,
}

impl Args {
    /// File settings first, then command-line overrides
    fn resolve_config(&self) -> Result<CleanerConfig, CleanerError> {
        let mut config = match &self.config {
            Some(path) => CleanerConfig::load(path)?,
            None => CleanerConfig::default(),
        };

        if let Some(low) = self.low_cutoff {
            config.low_cutoff = low;
        }
        if let Some(high) = self.high_cutoff {
            config.high_cutoff = high;
        }
        if let Some(reduction) = self.noise_reduction {
            config.noise_reduction = reduction;
        }

        Ok(config)
    }
}

fn run(args: &Args) -> Result<(), CleanerError> {
    let config = args.resolve_config()?;
    log::info!(
        "Cleaning with band {}-{} Hz, noise reduction {}",
        config.low_cutoff,
        config.high_cutoff,
        config.noise_reduction
    );

    let report = clean_file(&args.input, &args.output, &config)?;

    log::info!(
        "{} frames, {} channel(s) at {} Hz",
        report.frames,
        report.channels,
        report.sample_rate
    );
    log::info!(
        "Out-of-band energy share: {:.1}% -> {:.1}%",
        100.0 * report.before.out_of_band_share(),
        100.0 * report.after.out_of_band_share()
    );
    log::info!("Output saved to {}", args.output.display());

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
