//! CPU rasteriser for headless frames.
//!
//! Strokes column paths with anti-aliased round-capped segments into an
//! RGBA image sized logical * pixel ratio.

use std::path::Path;

use glam::DVec2;
use image::{Rgba, RgbaImage};

use super::{ColumnPath, ColumnStyle, DiagonalGradient};
use crate::params::RenderConfig;

/// Drawing surface in physical pixels addressed with logical coordinates
pub struct Canvas {
    image: RgbaImage,
    pixel_ratio: f64,
    viewport: (f64, f64),
}

impl Canvas {
    /// Create a canvas for a logical viewport at a device pixel ratio
    pub fn new(viewport: (f64, f64), pixel_ratio: f64) -> Self {
        let (width, height) = RenderConfig::surface_size(viewport, pixel_ratio);
        Self {
            image: RgbaImage::new(width, height),
            pixel_ratio,
            viewport,
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Fill the whole surface with an opaque colour
    pub fn clear(&mut self, rgb: [u8; 3]) {
        for pixel in self.image.pixels_mut() {
            *pixel = Rgba([rgb[0], rgb[1], rgb[2], 255]);
        }
    }

    /// Clear and stroke every column path
    pub fn draw_paths(&mut self, paths: &[ColumnPath], config: &RenderConfig) {
        self.clear(config.background_rgb);
        let gradient = DiagonalGradient::new(config, self.viewport);
        for path in paths {
            let style = ColumnStyle::for_path(path, config);
            self.stroke(path, style, &gradient);
        }
    }

    /// Stroke one path
    ///
    /// Coverage is accumulated per path (max over segments) and composited
    /// once, so overlapping segment joints are not darkened twice.
    pub fn stroke(&mut self, path: &ColumnPath, style: ColumnStyle, gradient: &DiagonalGradient) {
        if path.points.len() < 2 {
            return;
        }

        let ratio = self.pixel_ratio;
        let half_width = style.width as f64 * ratio / 2.0;
        let reach = half_width + 1.0;

        let device: Vec<DVec2> = path.points.iter().map(|p| *p * ratio).collect();

        // Bounding box of the stroke, clipped to the image
        let (min, max) = device.iter().fold(
            (DVec2::splat(f64::INFINITY), DVec2::splat(f64::NEG_INFINITY)),
            |(lo, hi), p| (lo.min(*p), hi.max(*p)),
        );
        let x0 = (min.x - reach).floor().max(0.0) as i64;
        let y0 = (min.y - reach).floor().max(0.0) as i64;
        let x1 = ((max.x + reach).ceil() as i64).min(self.image.width() as i64);
        let y1 = ((max.y + reach).ceil() as i64).min(self.image.height() as i64);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let box_w = (x1 - x0) as usize;
        let box_h = (y1 - y0) as usize;
        let mut coverage = vec![0.0f32; box_w * box_h];

        for segment in device.windows(2) {
            let (a, b) = (segment[0], segment[1]);
            let sx0 = ((a.x.min(b.x) - reach).floor() as i64).max(x0);
            let sy0 = ((a.y.min(b.y) - reach).floor() as i64).max(y0);
            let sx1 = ((a.x.max(b.x) + reach).ceil() as i64).min(x1);
            let sy1 = ((a.y.max(b.y) + reach).ceil() as i64).min(y1);

            for py in sy0..sy1 {
                for px in sx0..sx1 {
                    let centre = DVec2::new(px as f64 + 0.5, py as f64 + 0.5);
                    let d = distance_to_segment(centre, a, b);
                    let c = (half_width + 0.5 - d).clamp(0.0, 1.0) as f32;
                    if c > 0.0 {
                        let idx = (py - y0) as usize * box_w + (px - x0) as usize;
                        coverage[idx] = coverage[idx].max(c);
                    }
                }
            }
        }

        for row in 0..box_h {
            for col in 0..box_w {
                let c = coverage[row * box_w + col];
                if c <= 0.0 {
                    continue;
                }
                let px = x0 as u32 + col as u32;
                let py = y0 as u32 + row as u32;
                let logical = DVec2::new(px as f64 + 0.5, py as f64 + 0.5) / ratio;
                let color = gradient.color_at(logical);
                let alpha = color[3] * style.alpha * c;
                blend(self.image.get_pixel_mut(px, py), color, alpha);
            }
        }
    }

    /// Write the canvas as PNG
    pub fn save(&self, path: &Path) -> Result<(), String> {
        self.image
            .save(path)
            .map_err(|e| format!("Failed to save {}: {}", path.display(), e))
    }
}

/// Source-over blend of an sRGB colour onto an opaque pixel
fn blend(pixel: &mut Rgba<u8>, color: [f32; 4], alpha: f32) {
    for ch in 0..3 {
        let dst = pixel.0[ch] as f32 / 255.0;
        let out = color[ch] * alpha + dst * (1.0 - alpha);
        pixel.0[ch] = (out * 255.0).round().clamp(0.0, 255.0) as u8;
    }
}

fn distance_to_segment(p: DVec2, a: DVec2, b: DVec2) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertical_path(x: f64) -> ColumnPath {
        ColumnPath {
            points: vec![DVec2::new(x, 0.0), DVec2::new(x, 50.0), DVec2::new(x, 100.0)],
            hovered: false,
        }
    }

    #[test]
    fn test_canvas_scales_with_pixel_ratio() {
        let canvas = Canvas::new((100.0, 80.0), 2.0);
        assert_eq!(canvas.image().dimensions(), (200, 160));
    }

    #[test]
    fn test_stroke_darkens_only_near_line() {
        let config = RenderConfig::default();
        let mut canvas = Canvas::new((100.0, 100.0), 1.0);
        canvas.draw_paths(&[vertical_path(50.0)], &config);

        let bg = config.background_rgb;
        let on_line = canvas.image().get_pixel(50, 40);
        let far = canvas.image().get_pixel(10, 40);

        assert!(on_line.0[0] < bg[0]);
        assert_eq!(far.0, [bg[0], bg[1], bg[2], 255]);
    }

    #[test]
    fn test_hovered_path_is_darker() {
        let config = RenderConfig::default();

        let mut idle = Canvas::new((100.0, 100.0), 1.0);
        idle.draw_paths(&[vertical_path(50.0)], &config);

        let mut hovered_path = vertical_path(50.0);
        hovered_path.hovered = true;
        let mut hovered = Canvas::new((100.0, 100.0), 1.0);
        hovered.draw_paths(&[hovered_path], &config);

        let idle_px = idle.image().get_pixel(50, 40).0[0];
        let hovered_px = hovered.image().get_pixel(50, 40).0[0];
        assert!(hovered_px < idle_px);
    }

    #[test]
    fn test_offscreen_path_is_ignored() {
        let config = RenderConfig::default();
        let mut canvas = Canvas::new((100.0, 100.0), 1.0);
        canvas.draw_paths(&[vertical_path(-500.0)], &config);
        let bg = config.background_rgb;
        assert!(canvas
            .image()
            .pixels()
            .all(|p| p.0 == [bg[0], bg[1], bg[2], 255]));
    }

    #[test]
    fn test_distance_to_segment() {
        let a = DVec2::new(0.0, 0.0);
        let b = DVec2::new(10.0, 0.0);
        assert_eq!(distance_to_segment(DVec2::new(5.0, 3.0), a, b), 3.0);
        assert_eq!(distance_to_segment(DVec2::new(-4.0, 3.0), a, b), 5.0);
        assert_eq!(distance_to_segment(DVec2::new(1.0, 1.0), a, a), 2f64.sqrt());
    }
}
