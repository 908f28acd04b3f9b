//! Rendering and recording configuration.

use std::path::PathBuf;

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Initial window width (logical pixels)
    pub window_width: u32,

    /// Initial window height (logical pixels)
    pub window_height: u32,

    /// Device pixel ratio override (None = ask the window system)
    /// Drawing surfaces are sized logical * ratio
    pub pixel_ratio: Option<f64>,

    /// Line width of a column with no hovered point (logical px)
    pub idle_line_width: f32,

    /// Opacity of a column with no hovered point (0..=1)
    pub idle_alpha: f32,

    /// Line width of a column with at least one hovered point (logical px)
    pub hover_line_width: f32,

    /// Opacity of a column with at least one hovered point (0..=1)
    pub hover_alpha: f32,

    /// Stroke colour at the top-left corner (sRGB)
    pub gradient_start_rgb: [u8; 3],

    /// Stroke colour at the bottom-right corner (sRGB)
    pub gradient_end_rgb: [u8; 3],

    /// Opacity baked into the gradient stops (0..=1)
    pub gradient_alpha: f32,

    /// Clear colour (sRGB)
    pub background_rgb: [u8; 3],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            pixel_ratio: None,
            idle_line_width: 1.2,
            idle_alpha: 0.5,
            hover_line_width: 1.4,
            hover_alpha: 0.8,
            gradient_start_rgb: [51, 65, 85],  // slate-700
            gradient_end_rgb: [71, 85, 105],   // slate-600
            gradient_alpha: 0.5,
            background_rgb: [248, 250, 252], // slate-50
        }
    }
}

impl RenderConfig {
    /// Physical surface size for a logical size and pixel ratio
    pub fn surface_size(logical: (f64, f64), pixel_ratio: f64) -> (u32, u32) {
        (
            (logical.0 * pixel_ratio).round().max(1.0) as u32,
            (logical.1 * pixel_ratio).round().max(1.0) as u32,
        )
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(format!(
                "window size must be non-zero, got {}x{}",
                self.window_width, self.window_height
            ));
        }
        if let Some(ratio) = self.pixel_ratio {
            if !(ratio > 0.0) || !ratio.is_finite() {
                return Err(format!("pixel ratio must be > 0, got {}", ratio));
            }
        }
        for alpha in [self.idle_alpha, self.hover_alpha, self.gradient_alpha] {
            if !(0.0..=1.0).contains(&alpha) {
                return Err(format!("alpha must be in 0..=1, got {}", alpha));
            }
        }
        Ok(())
    }
}

/// Headless recording configuration
#[derive(Debug, Clone)]
pub struct RecordingConfig {
    /// Duration to record (seconds)
    pub duration_secs: f32,

    /// Output directory for frames
    pub output_dir: PathBuf,

    /// Frame rate (FPS)
    pub fps: u32,
}

impl RecordingConfig {
    pub fn new(duration_secs: f32) -> Self {
        Self {
            duration_secs,
            output_dir: PathBuf::from("recording"),
            fps: 60,
        }
    }

    /// Total number of frames to capture
    pub fn total_frames(&self) -> usize {
        (self.duration_secs * self.fps as f32).ceil() as usize
    }

    /// Simulation time between frames (milliseconds)
    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / self.fps as f64
    }

    /// Frame directory path
    pub fn frames_dir(&self) -> PathBuf {
        self.output_dir.join("frames")
    }

    /// Path of a single frame PNG
    pub fn frame_path(&self, frame_num: usize) -> PathBuf {
        self.frames_dir().join(format!("frame_{:05}.png", frame_num))
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.fps == 0 {
            return Err("fps must be > 0".to_string());
        }
        if !(self.duration_secs > 0.0) {
            return Err(format!(
                "duration must be > 0, got {}",
                self.duration_secs
            ));
        }
        Ok(())
    }
}
