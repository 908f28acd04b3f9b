//! Lattice density and coverage parameters.

/// How densely the viewport is covered with lattice points
#[derive(Debug, Clone)]
pub struct LatticeParams {
    /// Viewport width at which spacing reaches its base value (logical px)
    pub reference_width_px: f64,

    /// Horizontal spacing at the reference width (px)
    pub base_x_gap_px: f64,

    /// Horizontal spacing never drops below this (px)
    pub min_x_gap_px: f64,

    /// Vertical spacing at the reference width (px)
    pub base_y_gap_px: f64,

    /// Vertical spacing never drops below this (px)
    pub min_y_gap_px: f64,

    /// Extra width covered beyond the viewport (px, split across both sides)
    /// Keeps edge columns populated while springs displace them
    pub padding_x_px: f64,

    /// Extra height covered beyond the viewport (px, split across both sides)
    pub padding_y_px: f64,
}

impl Default for LatticeParams {
    fn default() -> Self {
        Self {
            reference_width_px: 1920.0,
            base_x_gap_px: 15.0,
            min_x_gap_px: 10.0,
            base_y_gap_px: 40.0,
            min_y_gap_px: 32.0,
            padding_x_px: 200.0,
            padding_y_px: 30.0,
        }
    }
}

impl LatticeParams {
    /// Density factor in (0, 1]: narrower viewports get tighter spacing
    pub fn screen_factor(&self, width: f64) -> f64 {
        (width / self.reference_width_px).min(1.0)
    }

    /// Horizontal and vertical spacing for a viewport width
    pub fn gaps(&self, width: f64) -> (f64, f64) {
        let factor = self.screen_factor(width);
        (
            self.min_x_gap_px.max(self.base_x_gap_px * factor),
            self.min_y_gap_px.max(self.base_y_gap_px * factor),
        )
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.reference_width_px > 0.0) {
            return Err(format!(
                "reference width must be > 0, got {}",
                self.reference_width_px
            ));
        }
        if !(self.min_x_gap_px > 0.0) || !(self.min_y_gap_px > 0.0) {
            return Err(format!(
                "minimum gaps must be > 0, got ({}, {})",
                self.min_x_gap_px, self.min_y_gap_px
            ));
        }
        if self.padding_x_px < 0.0 || self.padding_y_px < 0.0 {
            return Err("padding must be >= 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gaps_at_reference_width() {
        let params = LatticeParams::default();
        assert_eq!(params.gaps(1920.0), (15.0, 40.0));
        assert_eq!(params.gaps(3840.0), (15.0, 40.0));
    }

    #[test]
    fn test_gaps_floor_on_small_screens() {
        let params = LatticeParams::default();
        assert_eq!(params.gaps(320.0), (10.0, 32.0));
    }

    #[test]
    fn test_zero_gap_rejected() {
        let params = LatticeParams {
            min_y_gap_px: 0.0,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }
}
