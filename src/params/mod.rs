//! Parameter definitions with units and documented semantics.
//!
//! All tuning constants of the wave field live here:
//! - Units are logical pixels, frames, and milliseconds
//! - Defaults reproduce the reference look at ~60 Hz
//! - Each group can be validated before use

mod lattice;
mod motion;
mod render;

// Re-export all types
pub use lattice::LatticeParams;
pub use motion::{PointerParams, SpringPhysics, WaveMotion};
pub use render::{RecordingConfig, RenderConfig};

/// Complete parameter set for one wave simulation
#[derive(Debug, Clone, Default)]
pub struct WaveParams {
    pub lattice: LatticeParams,
    pub motion: WaveMotion,
    pub spring: SpringPhysics,
    pub pointer: PointerParams,
}

impl WaveParams {
    /// Validate every parameter group
    pub fn validate(&self) -> Result<(), String> {
        self.lattice
            .validate()
            .map_err(|e| format!("Invalid lattice params: {}", e))?;
        self.spring
            .validate()
            .map_err(|e| format!("Invalid spring physics: {}", e))?;
        self.pointer
            .validate()
            .map_err(|e| format!("Invalid pointer params: {}", e))?;
        Ok(())
    }
}
