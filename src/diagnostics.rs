// diagnostics.rs
// Whole-system summaries of the simulation state, used for logging and the
// headless runner's report.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::simulation::{forces, SimulationState};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    pub frame: usize,
    pub time: f64,
    pub particle_count: usize,
    pub positive_count: usize,
    /// Σ ½|v|² (unit mass)
    pub kinetic_energy: f32,
    pub potential_energy: f32,
    pub max_speed: f32,
    /// Particles whose position or velocity is no longer finite
    pub non_finite_count: usize,
}

impl Diagnostics {
    pub fn measure(state: &SimulationState) -> Self {
        let particles = state.particles();
        let kinetic_energy = particles.iter().map(|p| 0.5 * p.vel.mag_sq()).sum();
        let max_speed = particles.iter().map(|p| p.speed()).fold(0.0, f32::max);
        Self {
            frame: state.frame(),
            time: state.time(),
            particle_count: particles.len(),
            positive_count: particles.iter().filter(|p| p.charge > 0.0).count(),
            kinetic_energy,
            potential_energy: forces::potential_energy(
                state.central(),
                particles,
                state.config().coulomb_constant,
            ),
            max_speed,
            non_finite_count: particles.iter().filter(|p| !p.is_finite()).count(),
        }
    }

    pub fn total_energy(&self) -> f32 {
        self.kinetic_energy + self.potential_energy
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "frame {} t={:.3}s particles={} (+{} / -{}) KE={:.5} PE={:.5} E={:.5} vmax={:.5}",
            self.frame,
            self.time,
            self.particle_count,
            self.positive_count,
            self.particle_count - self.positive_count,
            self.kinetic_energy,
            self.potential_energy,
            self.total_energy(),
            self.max_speed,
        )
    }
}
