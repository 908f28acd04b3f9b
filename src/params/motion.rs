//! Noise motion, spring physics and pointer interaction parameters.
//!
//! Physics constants are per-frame quantities tuned for a ~60 Hz cadence.

/// Noise-driven wave motion applied to every point
#[derive(Debug, Clone)]
pub struct WaveMotion {
    /// Drift of the sampling position per millisecond (px/ms, x and y)
    pub time_drift: (f64, f64),

    /// Spatial frequency of the noise lookup (cycles per px, x and y)
    /// Lower y frequency stretches waves horizontally
    pub spatial_frequency: (f64, f64),

    /// Noise sample → angle multiplier (radians per unit noise)
    pub angle_scale: f64,

    /// Displacement amplitude (px, x and y)
    /// Horizontal is twice vertical for elongated wave motion
    pub amplitude: (f64, f64),
}

impl Default for WaveMotion {
    fn default() -> Self {
        Self {
            time_drift: (0.0125, 0.005),
            spatial_frequency: (0.002, 0.0015),
            angle_scale: 12.0,
            amplitude: (32.0, 16.0),
        }
    }
}

/// Spring-damper model for pointer-driven displacement
#[derive(Debug, Clone)]
pub struct SpringPhysics {
    /// Pointer impulse scale (dimensionless)
    /// Formula: dv = dir * falloff * radius * speed * this
    pub force_scale: f64,

    /// Restoring stiffness toward zero displacement (per frame)
    pub stiffness: f64,

    /// Velocity retained each frame (0..=1, 1 = frictionless)
    pub damping: f64,

    /// Velocity → displacement multiplier per frame
    pub step: f64,

    /// Displacement clamp on each axis (px, symmetric)
    pub max_offset_px: f64,
}

impl Default for SpringPhysics {
    fn default() -> Self {
        Self {
            force_scale: 0.0015,
            stiffness: 0.008,
            damping: 0.96,
            step: 3.0,
            max_offset_px: 200.0,
        }
    }
}

impl SpringPhysics {
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(format!("damping must be in 0..=1, got {}", self.damping));
        }
        if !(self.max_offset_px > 0.0) {
            return Err(format!(
                "offset clamp must be > 0, got {}",
                self.max_offset_px
            ));
        }
        if self.stiffness < 0.0 || self.step < 0.0 {
            return Err("stiffness and step must be >= 0".to_string());
        }
        Ok(())
    }
}

/// Pointer smoothing and influence parameters
#[derive(Debug, Clone)]
pub struct PointerParams {
    /// Low-pass factor for position and speed (0..=1 per frame)
    pub smoothing: f64,

    /// Smoothed speed ceiling (px per frame)
    pub max_speed: f64,

    /// Influence radius when the pointer is slow (px)
    pub min_radius_px: f64,

    /// Radius growth per unit smoothed speed
    /// Formula: radius = max(min_radius, speed * this)
    pub radius_per_speed: f64,

    /// Frequency of the cosine distance falloff (radians per px)
    pub falloff_frequency: f64,
}

impl Default for PointerParams {
    fn default() -> Self {
        Self {
            smoothing: 0.1,
            max_speed: 100.0,
            min_radius_px: 250.0,
            radius_per_speed: 3.0,
            falloff_frequency: 0.001,
        }
    }
}

impl PointerParams {
    /// Influence radius for a smoothed speed
    pub fn radius(&self, smoothed_speed: f64) -> f64 {
        self.min_radius_px.max(smoothed_speed * self.radius_per_speed)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.smoothing) {
            return Err(format!(
                "smoothing must be in 0..=1, got {}",
                self.smoothing
            ));
        }
        if !(self.min_radius_px > 0.0) {
            return Err(format!(
                "minimum radius must be > 0, got {}",
                self.min_radius_px
            ));
        }
        if self.max_speed < 0.0 {
            return Err("max speed must be >= 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_grows_with_speed() {
        let params = PointerParams::default();
        assert_eq!(params.radius(0.0), 250.0);
        assert_eq!(params.radius(50.0), 250.0);
        assert_eq!(params.radius(100.0), 300.0);
    }

    #[test]
    fn test_damping_out_of_range() {
        let physics = SpringPhysics {
            damping: -0.1,
            ..Default::default()
        };
        assert!(physics.validate().is_err());
    }
}
