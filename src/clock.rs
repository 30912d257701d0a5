// clock.rs
// Timestamp sources for the per-particle sample series

use std::time::Instant;

/// Supplies the timestamp stamped onto each step's samples.
pub trait Clock: Send {
    /// `sim_time` is the simulated time after the step being sampled.
    fn now(&mut self, sim_time: f64) -> f64;
}

/// Stamps samples with simulated seconds. Deterministic.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimulationClock;

impl Clock for SimulationClock {
    fn now(&mut self, sim_time: f64) -> f64 {
        sim_time
    }
}

/// Stamps samples with monotonic wall-clock seconds since creation.
#[derive(Clone, Copy, Debug)]
pub struct WallClock {
    start: Instant,
}

impl WallClock {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for WallClock {
    fn now(&mut self, _sim_time: f64) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}
