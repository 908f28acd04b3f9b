//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;
use log::info;

use crate::params::{RecordingConfig, RenderConfig};
use crate::wave::DEFAULT_SEED;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "wavefield")]
#[command(about = "Interactive noise-driven wave field", long_about = None)]
pub struct Args {
    /// Noise seed (any finite number; same seed, same waves)
    #[arg(long, default_value_t = DEFAULT_SEED, allow_negative_numbers = true)]
    pub seed: f64,

    /// Window width (logical pixels)
    #[arg(long, value_name = "PX", default_value = "1280")]
    pub width: u32,

    /// Window height (logical pixels)
    #[arg(long, value_name = "PX", default_value = "720")]
    pub height: u32,

    /// Device pixel ratio override (default: from the window system, 1 when headless)
    #[arg(long, value_name = "RATIO")]
    pub pixel_ratio: Option<f64>,

    /// Render headless PNG frames instead of opening a window (duration in seconds)
    #[arg(long, value_name = "SECONDS")]
    pub record: Option<f32>,

    /// Frame rate for recordings
    #[arg(long, default_value = "60")]
    pub fps: u32,

    /// Output directory for recordings
    #[arg(long, value_name = "DIR", default_value = "recording")]
    pub output: PathBuf,

    /// Drive a scripted pointer across the field while recording
    #[arg(long)]
    pub sweep: bool,
}

impl Args {
    /// Rendering configuration with command-line overrides applied
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            window_width: self.width,
            window_height: self.height,
            pixel_ratio: self.pixel_ratio,
            ..Default::default()
        }
    }

    /// Create recording configuration if recording mode is enabled
    ///
    /// Creates the frame directory on disk.
    pub fn create_recording_config(&self) -> Result<Option<RecordingConfig>, String> {
        let Some(duration) = self.record else {
            return Ok(None);
        };

        let config = RecordingConfig {
            duration_secs: duration,
            output_dir: self.output.clone(),
            fps: self.fps,
        };
        config.validate()?;

        std::fs::create_dir_all(config.frames_dir()).map_err(|e| {
            format!(
                "Failed to create frames directory {}: {}",
                config.frames_dir().display(),
                e
            )
        })?;

        info!(
            "Recording {} frames to {}",
            config.total_frames(),
            config.frames_dir().display()
        );
        Ok(Some(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["wavefield"]);
        assert_eq!(args.seed, DEFAULT_SEED);
        assert_eq!((args.width, args.height), (1280, 720));
        assert!(args.record.is_none());
        assert!(args.create_recording_config().unwrap().is_none());
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "wavefield",
            "--seed",
            "-3.5",
            "--width",
            "800",
            "--pixel-ratio",
            "2",
            "--sweep",
        ]);
        assert_eq!(args.seed, -3.5);
        assert!(args.sweep);

        let config = args.render_config();
        assert_eq!(config.window_width, 800);
        assert_eq!(config.window_height, 720);
        assert_eq!(config.pixel_ratio, Some(2.0));
    }
}
