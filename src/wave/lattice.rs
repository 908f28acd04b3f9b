//! Lattice points and grid construction from viewport size.

use glam::DVec2;

use crate::params::LatticeParams;

/// One node of the animated grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticePoint {
    /// Fixed anchor in logical coordinates
    pub base: DVec2,
    /// Wave displacement, recomputed every tick
    pub noise_offset: DVec2,
    /// Pointer-driven displacement, clamped per axis
    pub spring_offset: DVec2,
    pub spring_velocity: DVec2,
    /// Inside the pointer influence radius on the last tick
    pub is_hovered: bool,
}

impl LatticePoint {
    pub fn new(base: DVec2) -> Self {
        Self {
            base,
            noise_offset: DVec2::ZERO,
            spring_offset: DVec2::ZERO,
            spring_velocity: DVec2::ZERO,
            is_hovered: false,
        }
    }

    /// Rendered position, rounded to 0.1 px to avoid sub-pixel jitter
    pub fn position(&self, with_spring: bool) -> DVec2 {
        let mut p = self.base + self.noise_offset;
        if with_spring {
            p += self.spring_offset;
        }
        (p * 10.0).round() / 10.0
    }
}

/// Column-major grid of lattice points
///
/// Each column is one polyline; point order inside a column is render order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lattice {
    points: Vec<LatticePoint>,
    columns: usize,
    rows: usize,
    gap: DVec2,
}

impl Lattice {
    /// Lattice with no points (before the first resize)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Lay out a lattice covering a `width` x `height` viewport
    ///
    /// The covered area is padded past the viewport edges and centred on it.
    pub fn new(width: f64, height: f64, params: &LatticeParams) -> Self {
        let (x_gap, y_gap) = params.gaps(width);

        let covered_width = width + params.padding_x_px;
        let covered_height = height + params.padding_y_px;

        let x_intervals = (covered_width / x_gap).ceil() as usize;
        let y_intervals = (covered_height / y_gap).ceil() as usize;

        let x_start = (width - x_gap * x_intervals as f64) / 2.0;
        let y_start = (height - y_gap * y_intervals as f64) / 2.0;

        let columns = x_intervals + 1;
        let rows = y_intervals + 1;

        let mut points = Vec::with_capacity(columns * rows);
        for i in 0..columns {
            for j in 0..rows {
                points.push(LatticePoint::new(DVec2::new(
                    x_start + x_gap * i as f64,
                    y_start + y_gap * j as f64,
                )));
            }
        }

        Self {
            points,
            columns,
            rows,
            gap: DVec2::new(x_gap, y_gap),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of columns (polylines)
    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// Number of points per column
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Point spacing (x gap, y gap)
    pub fn gap(&self) -> DVec2 {
        self.gap
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[LatticePoint] {
        &self.points
    }

    pub(crate) fn points_mut(&mut self) -> &mut [LatticePoint] {
        &mut self.points
    }

    /// Points of one column in render order
    pub fn column(&self, index: usize) -> &[LatticePoint] {
        let start = index * self.rows;
        &self.points[start..start + self.rows]
    }

    /// Iterate columns in order
    pub fn columns(&self) -> impl Iterator<Item = &[LatticePoint]> {
        // chunks() rejects a zero size; an empty lattice has no points either way
        self.points.chunks(self.rows.max(1))
    }

    /// Index of the point whose base position is closest to `target`
    pub fn nearest(&self, target: DVec2) -> Option<usize> {
        self.points
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                a.base
                    .distance_squared(target)
                    .total_cmp(&b.base.distance_squared(target))
            })
            .map(|(idx, _)| idx)
    }
}
