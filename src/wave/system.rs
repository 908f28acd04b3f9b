//! Wave simulation: lattice lifecycle, pointer events and per-frame update.

use std::sync::Arc;

use glam::DVec2;
use log::{debug, warn};

use super::lattice::{Lattice, LatticePoint};
use super::pointer::PointerState;
use crate::noise::NoiseField;
use crate::params::{PointerParams, SpringPhysics, WaveMotion, WaveParams};

/// Externally visible lifecycle of a simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationState {
    /// No viewport yet; ticks advance the pointer only
    Uninitialized,
    /// Lattice allocated for the current viewport
    Running,
}

/// Noise-driven wave field over a point lattice
///
/// Integration is fixed-step: every `tick` is one frame of spring physics
/// regardless of the time delta. `time` only moves the noise sampling
/// window, so dropped frames show up as a larger jump in wave phase.
pub struct WaveSimulation {
    noise: Arc<NoiseField>,
    params: WaveParams,
    lattice: Lattice,
    pointer: PointerState,
    viewport: Option<(f64, f64)>,
    frame: u64,
    last_time_ms: Option<f64>,
}

impl WaveSimulation {
    /// Create a simulation with default parameters
    pub fn new(seed: f64) -> Self {
        Self::with_params(seed, WaveParams::default())
    }

    /// Create a simulation with explicit parameters
    pub fn with_params(seed: f64, params: WaveParams) -> Self {
        Self::with_noise(Arc::new(NoiseField::new(seed)), params)
    }

    /// Create a simulation sharing an existing noise field
    pub fn with_noise(noise: Arc<NoiseField>, params: WaveParams) -> Self {
        Self {
            noise,
            params,
            lattice: Lattice::empty(),
            pointer: PointerState::new(),
            viewport: None,
            frame: 0,
            last_time_ms: None,
        }
    }

    pub fn state(&self) -> SimulationState {
        match self.viewport {
            Some(_) => SimulationState::Running,
            None => SimulationState::Uninitialized,
        }
    }

    /// Reallocate the lattice for a new viewport (logical units)
    ///
    /// Non-positive or non-finite sizes are ignored and the previous lattice
    /// is kept; hosts report zero sizes during reflow and minimise.
    pub fn resize(&mut self, width: f64, height: f64) {
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            debug!("Ignoring resize to {}x{}", width, height);
            return;
        }

        self.lattice = Lattice::new(width, height, &self.params.lattice);
        self.viewport = Some((width, height));

        debug!(
            "Lattice rebuilt for {}x{}: {} columns x {} rows",
            width,
            height,
            self.lattice.column_count(),
            self.lattice.row_count()
        );
    }

    /// Record a pointer or touch position in simulation-local coordinates
    ///
    /// Accepted in any state; the next tick after a resize picks it up.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.pointer.on_move(DVec2::new(x, y));
    }

    /// Advance one frame at `time_ms` and return the lattice to draw
    pub fn tick(&mut self, time_ms: f64) -> &Lattice {
        if let Some(last) = self.last_time_ms {
            if time_ms < last {
                warn!("Tick time went backwards: {} -> {}", last, time_ms);
            }
        }
        self.last_time_ms = Some(time_ms);
        self.frame += 1;

        self.pointer.advance(&self.params.pointer);

        let interaction = self
            .pointer
            .is_initialized()
            .then(|| Interaction::new(&self.pointer, &self.params.pointer));

        for point in self.lattice.points_mut() {
            apply_wave(point, time_ms, &self.noise, &self.params.motion);
            apply_spring(
                point,
                interaction.as_ref(),
                &self.params.spring,
                &self.params.pointer,
            );
        }

        &self.lattice
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn params(&self) -> &WaveParams {
        &self.params
    }

    pub fn noise(&self) -> &Arc<NoiseField> {
        &self.noise
    }

    /// Current viewport size, if any
    pub fn viewport(&self) -> Option<(f64, f64)> {
        self.viewport
    }

    /// Number of ticks since construction
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Influence radius the next tick would use
    pub fn influence_radius(&self) -> f64 {
        self.params.pointer.radius(self.pointer.smoothed_speed())
    }
}

/// Per-frame pointer snapshot shared by every point
struct Interaction {
    centre: DVec2,
    direction: DVec2,
    speed: f64,
    radius: f64,
}

impl Interaction {
    fn new(pointer: &PointerState, params: &PointerParams) -> Self {
        let speed = pointer.smoothed_speed();
        Self {
            centre: pointer.smoothed(),
            direction: DVec2::from_angle(pointer.angle()),
            speed,
            radius: params.radius(speed),
        }
    }
}

/// Set the noise displacement of a point for this frame
fn apply_wave(
    point: &mut LatticePoint,
    time_ms: f64,
    noise: &NoiseField,
    motion: &WaveMotion,
) {
    let sample = noise.sample(
        (point.base.x + time_ms * motion.time_drift.0) * motion.spatial_frequency.0,
        (point.base.y + time_ms * motion.time_drift.1) * motion.spatial_frequency.1,
    );
    let angle = sample * motion.angle_scale;
    point.noise_offset = DVec2::new(
        angle.cos() * motion.amplitude.0,
        angle.sin() * motion.amplitude.1,
    );
}

/// Apply pointer impulse, restoring force, damping and clamp
fn apply_spring(
    point: &mut LatticePoint,
    interaction: Option<&Interaction>,
    physics: &SpringPhysics,
    pointer: &PointerParams,
) {
    point.is_hovered = false;

    if let Some(hit) = interaction {
        let distance = point.base.distance(hit.centre);
        if distance < hit.radius {
            let falloff = 1.0 - distance / hit.radius;
            let force = (distance * pointer.falloff_frequency).cos() * falloff;
            point.spring_velocity +=
                hit.direction * (force * hit.radius * hit.speed * physics.force_scale);
            point.is_hovered = true;
        }
    }

    point.spring_velocity += -point.spring_offset * physics.stiffness;
    point.spring_velocity *= physics.damping;
    point.spring_offset += point.spring_velocity * physics.step;

    let limit = DVec2::splat(physics.max_offset_px);
    point.spring_offset = point.spring_offset.clamp(-limit, limit);
}
