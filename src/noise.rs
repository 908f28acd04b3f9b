//! Seeded 2D simplex noise for the wave field.
//!
//! The permutation table is derived entirely from the seed, so a given seed
//! produces the same field on every run of the same build.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Skew factor from square grid to triangular grid: (sqrt(3) - 1) / 2
const F2: f64 = 0.366_025_403_784_438_6;

/// Unskew factor from triangular grid back to square grid: (3 - sqrt(3)) / 6
const G2: f64 = 0.211_324_865_405_187_1;

/// Output normalisation so samples land in roughly [-1, 1]
const OUTPUT_SCALE: f64 = 70.0;

/// Corner falloff radius squared
const CORNER_RADIUS_SQ: f64 = 0.5;

/// Gradient directions (edge midpoints of a cube, only x/y used in 2D)
const GRAD3: [[f64; 3]; 12] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
];

/// Deterministic gradient-noise field
#[derive(Clone)]
pub struct NoiseField {
    seed: f64,
    /// 256-entry permutation repeated twice so `perm[i + perm[j]]` never wraps
    perm: [u8; 512],
}

impl NoiseField {
    /// Build a noise field from any finite seed
    pub fn new(seed: f64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed.to_bits());

        let mut table: Vec<u8> = (0..=255).collect();
        table.shuffle(&mut rng);

        let mut perm = [0u8; 512];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = table[i & 255];
        }

        Self { seed, perm }
    }

    /// Seed this field was built from
    pub fn seed(&self) -> f64 {
        self.seed
    }

    /// The first 256 entries of the permutation table
    pub fn permutation(&self) -> &[u8] {
        &self.perm[..256]
    }

    /// Sample 2D simplex noise at `(x, y)`
    ///
    /// Returns a value in approximately [-1, 1]. Pure and continuous.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        // Skew into the triangular grid and find the cell origin
        let s = (x + y) * F2;
        let i = (x + s).floor();
        let j = (y + s).floor();

        let t = (i + j) * G2;
        let x0 = x - (i - t);
        let y0 = y - (j - t);

        // Lower-right or upper-left triangle of the unit square
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - i1 as f64 + G2;
        let y1 = y0 - j1 as f64 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = (i as i64 & 255) as usize;
        let jj = (j as i64 & 255) as usize;

        let n0 = self.corner(self.gradient_index(ii, jj), x0, y0);
        let n1 = self.corner(self.gradient_index(ii + i1, jj + j1), x1, y1);
        let n2 = self.corner(self.gradient_index(ii + 1, jj + 1), x2, y2);

        OUTPUT_SCALE * (n0 + n1 + n2)
    }

    #[inline]
    fn gradient_index(&self, i: usize, j: usize) -> usize {
        self.perm[i + self.perm[j] as usize] as usize % 12
    }

    /// Contribution of one simplex corner at local offset `(dx, dy)`
    #[inline]
    fn corner(&self, gi: usize, dx: f64, dy: f64) -> f64 {
        let t = CORNER_RADIUS_SQ - dx * dx - dy * dy;
        if t < 0.0 {
            return 0.0;
        }
        let t2 = t * t;
        let g = &GRAD3[gi];
        t2 * t2 * (g[0] * dx + g[1] * dy)
    }
}

impl std::fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseField").field("seed", &self.seed).finish()
    }
}
