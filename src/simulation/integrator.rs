//! Explicit Euler integration of every particle, one fixed step at a time.

use crate::body::{CentralCharge, Particle};
use crate::config::{self, UpdateMode};
use crate::plotting::SampleSeries;
use crate::profile_scope;
use ultraviolet::Vec3;

use super::forces;

/// Advances particles by one timestep and appends a speed sample per
/// particle. Mass is 1, no damping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Integrator {
    pub coulomb_constant: f32,
    pub mode: UpdateMode,
}

impl Integrator {
    pub fn new(coulomb_constant: f32, mode: UpdateMode) -> Self {
        Self {
            coulomb_constant,
            mode,
        }
    }

    pub fn from_config(config: &config::SimConfig) -> Self {
        Self::new(config.coulomb_constant, config.update_mode)
    }

    /// One step over all particles. `series[i]` must belong to
    /// `particles[i]`; every series receives exactly one `(timestamp, |v|)`
    /// sample.
    pub fn step(
        &self,
        dt: f32,
        timestamp: f64,
        particles: &mut [Particle],
        central: &CentralCharge,
        series: &mut [SampleSeries],
    ) {
        profile_scope!("integrator_step");
        debug_assert_eq!(particles.len(), series.len());
        match self.mode {
            UpdateMode::Sequential => self.step_sequential(dt, particles, central),
            UpdateMode::Snapshot => self.step_snapshot(dt, particles, central),
        }
        for (p, s) in particles.iter().zip(series.iter_mut()) {
            s.append(timestamp, p.speed());
        }
    }

    fn step_sequential(&self, dt: f32, particles: &mut [Particle], central: &CentralCharge) {
        for i in 0..particles.len() {
            let current: &[Particle] = particles;
            let f = forces::force(&current[i], central, current, self.coulomb_constant);
            advance(&mut particles[i], f, dt);
        }
    }

    fn step_snapshot(&self, dt: f32, particles: &mut [Particle], central: &CentralCharge) {
        let forces = self.snapshot_forces(particles, central);
        for (p, f) in particles.iter_mut().zip(forces) {
            advance(p, f, dt);
        }
    }

    #[cfg(feature = "parallel")]
    fn snapshot_forces(&self, particles: &[Particle], central: &CentralCharge) -> Vec<Vec3> {
        use rayon::prelude::*;
        let k = self.coulomb_constant;
        particles
            .par_iter()
            .map(|p| forces::force(p, central, particles, k))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn snapshot_forces(&self, particles: &[Particle], central: &CentralCharge) -> Vec<Vec3> {
        let k = self.coulomb_constant;
        particles
            .iter()
            .map(|p| forces::force(p, central, particles, k))
            .collect()
    }
}

impl Default for Integrator {
    fn default() -> Self {
        Self::new(config::COULOMB_CONSTANT, UpdateMode::default())
    }
}

/// v += a·dt, then x += v·dt (acceleration = force, unit mass).
fn advance(p: &mut Particle, force: Vec3, dt: f32) {
    let acc = force / config::PARTICLE_MASS;
    p.vel += acc * dt;
    p.pos += p.vel * dt;
}
