//! Pointer tracking with exponential smoothing.

use glam::DVec2;

use crate::params::PointerParams;

/// Pointer position, speed and direction as seen by the lattice
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    raw: DVec2,
    previous: DVec2,
    smoothed: DVec2,
    speed: f64,
    smoothed_speed: f64,
    angle: f64,
    initialized: bool,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer or touch position (simulation-local coordinates)
    ///
    /// The first event snaps the smoothed position onto the pointer so the
    /// influence area does not glide in from the origin. The previous-frame
    /// position is left alone, so that first arrival registers as movement.
    pub fn on_move(&mut self, position: DVec2) {
        self.raw = position;
        if !self.initialized {
            self.smoothed = position;
            self.initialized = true;
        }
    }

    /// Advance smoothing by one frame
    pub fn advance(&mut self, params: &PointerParams) {
        let k = params.smoothing;
        self.smoothed += (self.raw - self.smoothed) * k;

        let delta = self.raw - self.previous;
        self.speed = delta.length();
        self.smoothed_speed += (self.speed - self.smoothed_speed) * k;
        self.smoothed_speed = self.smoothed_speed.min(params.max_speed);

        self.previous = self.raw;
        self.angle = delta.y.atan2(delta.x);
    }

    /// Whether any pointer event has been received
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn raw(&self) -> DVec2 {
        self.raw
    }

    pub fn previous(&self) -> DVec2 {
        self.previous
    }

    pub fn smoothed(&self) -> DVec2 {
        self.smoothed
    }

    /// Distance moved during the last frame (px)
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Low-passed speed, capped at `PointerParams::max_speed`
    pub fn smoothed_speed(&self) -> f64 {
        self.smoothed_speed
    }

    /// Direction of the last frame's raw movement (radians)
    pub fn angle(&self) -> f64 {
        self.angle
    }
}
