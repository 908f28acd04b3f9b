//! Animated point lattice driven by noise motion and pointer springs.

mod lattice;
mod pointer;
mod shared;
mod system;

// Re-export public types
pub use lattice::{Lattice, LatticePoint};
pub use pointer::PointerState;
pub use shared::SharedWaveSimulation;
pub use system::{SimulationState, WaveSimulation};

/// Seed of the reference wave pattern
pub const DEFAULT_SEED: f64 = 0.42;
