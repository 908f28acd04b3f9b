//! Turning the lattice into stroked column paths.
//!
//! Drawing backends (`raster` for headless frames, `gpu` for the window)
//! consume `ColumnPath`s; neither touches simulation state.

pub mod gpu;
pub mod raster;

use glam::DVec2;

use crate::params::RenderConfig;
use crate::wave::{Lattice, LatticePoint};

/// One column of the lattice as a connected polyline
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnPath {
    /// Path vertices in draw order (logical px)
    pub points: Vec<DVec2>,
    /// Any point of the column is within pointer influence
    pub hovered: bool,
}

/// Trace every column of the lattice
pub fn trace_columns(lattice: &Lattice) -> Vec<ColumnPath> {
    lattice
        .columns()
        .filter(|column| !column.is_empty())
        .map(trace_column)
        .collect()
}

/// Trace one column
///
/// The path moves to the first point without spring displacement, then
/// visits every point in order. The last point is also drawn without spring
/// displacement so column ends stay anchored to the wave.
pub fn trace_column(column: &[LatticePoint]) -> ColumnPath {
    let last = column.len().saturating_sub(1);

    let mut points = Vec::with_capacity(column.len() + 1);
    if let Some(first) = column.first() {
        points.push(first.position(false));
    }
    points.extend(
        column
            .iter()
            .enumerate()
            .map(|(idx, point)| point.position(idx != last)),
    );

    ColumnPath {
        points,
        hovered: column.iter().any(|p| p.is_hovered),
    }
}

/// Stroke width and opacity of a column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStyle {
    pub width: f32,
    pub alpha: f32,
}

impl ColumnStyle {
    pub fn for_path(path: &ColumnPath, config: &RenderConfig) -> Self {
        if path.hovered {
            Self {
                width: config.hover_line_width,
                alpha: config.hover_alpha,
            }
        } else {
            Self {
                width: config.idle_line_width,
                alpha: config.idle_alpha,
            }
        }
    }
}

/// Linear colour gradient from the viewport's top-left to bottom-right corner
#[derive(Debug, Clone, Copy)]
pub struct DiagonalGradient {
    start: [f32; 3],
    end: [f32; 3],
    alpha: f32,
    diagonal: DVec2,
}

impl DiagonalGradient {
    pub fn new(config: &RenderConfig, viewport: (f64, f64)) -> Self {
        let unit = |rgb: [u8; 3]| rgb.map(|c| c as f32 / 255.0);
        Self {
            start: unit(config.gradient_start_rgb),
            end: unit(config.gradient_end_rgb),
            alpha: config.gradient_alpha,
            diagonal: DVec2::new(viewport.0, viewport.1),
        }
    }

    /// sRGB colour and alpha (0..=1) at a logical position
    pub fn color_at(&self, position: DVec2) -> [f32; 4] {
        let len_sq = self.diagonal.length_squared();
        let t = if len_sq > 0.0 {
            (position.dot(self.diagonal) / len_sq).clamp(0.0, 1.0) as f32
        } else {
            0.0
        };
        let mix = |a: f32, b: f32| a + (b - a) * t;
        [
            mix(self.start[0], self.end[0]),
            mix(self.start[1], self.end[1]),
            mix(self.start[2], self.end[2]),
            self.alpha,
        ]
    }
}

/// sRGB component (0..=1) to linear light
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
