//! Headless recording: tick the field at a fixed frame rate and write PNGs.

use glam::DVec2;
use log::info;

use crate::params::{RecordingConfig, RenderConfig, WaveParams};
use crate::rendering::raster::Canvas;
use crate::rendering::trace_columns;
use crate::wave::WaveSimulation;

/// Scripted pointer path: a slow Lissajous loop across the viewport
pub fn sweep_position(time_ms: f64, viewport: (f64, f64)) -> DVec2 {
    let t = time_ms / 1000.0;
    DVec2::new(
        viewport.0 * (0.5 + 0.4 * (t * 0.9).sin()),
        viewport.1 * (0.5 + 0.35 * (t * 1.3).sin()),
    )
}

/// Render `recording.total_frames()` frames to disk
///
/// Returns the number of frames written.
pub fn record(
    seed: f64,
    params: WaveParams,
    render_config: &RenderConfig,
    recording: &RecordingConfig,
    sweep: bool,
) -> Result<usize, String> {
    params.validate()?;
    render_config.validate()?;
    recording.validate()?;

    let viewport = (
        render_config.window_width as f64,
        render_config.window_height as f64,
    );
    let pixel_ratio = render_config.pixel_ratio.unwrap_or(1.0);

    let mut simulation = WaveSimulation::with_params(seed, params);
    simulation.resize(viewport.0, viewport.1);

    let total = recording.total_frames();
    for frame in 0..total {
        let time_ms = frame as f64 * recording.frame_interval_ms();

        if sweep {
            let p = sweep_position(time_ms, viewport);
            simulation.on_pointer_move(p.x, p.y);
        }

        let paths = trace_columns(simulation.tick(time_ms));

        let mut canvas = Canvas::new(viewport, pixel_ratio);
        canvas.draw_paths(&paths, render_config);
        canvas.save(&recording.frame_path(frame))?;

        if (frame + 1) % recording.fps as usize == 0 {
            info!("Recorded {}/{} frames", frame + 1, total);
        }
    }

    Ok(total)
}
