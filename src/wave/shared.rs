//! Thread-safe handle around a wave simulation.
//!
//! Pointer events and frame ticks may arrive from different threads; a
//! single mutex serialises them so a tick never observes a half-applied
//! event or a lattice mid-replacement.

use std::sync::{Arc, Mutex, MutexGuard};

use super::lattice::Lattice;
use super::system::{SimulationState, WaveSimulation};

/// Cloneable, lock-protected wave simulation
#[derive(Clone)]
pub struct SharedWaveSimulation {
    inner: Arc<Mutex<WaveSimulation>>,
}

impl SharedWaveSimulation {
    pub fn new(simulation: WaveSimulation) -> Self {
        Self {
            inner: Arc::new(Mutex::new(simulation)),
        }
    }

    /// Lock the simulation; a panic in another holder does not poison the field
    fn lock(&self) -> MutexGuard<'_, WaveSimulation> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn resize(&self, width: f64, height: f64) {
        self.lock().resize(width, height);
    }

    pub fn on_pointer_move(&self, x: f64, y: f64) {
        self.lock().on_pointer_move(x, y);
    }

    /// Advance one frame and hand the lattice to `draw` while still locked
    pub fn tick<R>(&self, time_ms: f64, draw: impl FnOnce(&Lattice) -> R) -> R {
        let mut simulation = self.lock();
        draw(simulation.tick(time_ms))
    }

    pub fn state(&self) -> SimulationState {
        self.lock().state()
    }

    /// Run `f` with exclusive access to the simulation
    pub fn with<R>(&self, f: impl FnOnce(&mut WaveSimulation) -> R) -> R {
        f(&mut self.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_events_and_ticks_from_threads() {
        let shared = SharedWaveSimulation::new(WaveSimulation::new(0.42));
        shared.resize(400.0, 300.0);

        let events = shared.clone();
        let handle = thread::spawn(move || {
            for k in 0..200 {
                events.on_pointer_move((k * 7 % 400) as f64, (k * 3 % 300) as f64);
            }
        });

        let mut points = 0;
        for frame in 0..200 {
            points = shared.tick(frame as f64 * 16.0, |lattice| lattice.len());
        }
        handle.join().unwrap();

        assert!(points > 0);
        assert_eq!(shared.with(|sim| sim.frame()), 200);
        assert!(shared.with(|sim| sim.pointer().is_initialized()));
    }

    #[test]
    fn test_clones_share_state() {
        let a = SharedWaveSimulation::new(WaveSimulation::new(1.0));
        let b = a.clone();
        a.resize(200.0, 200.0);
        assert_eq!(b.state(), SimulationState::Running);
    }
}
