// simulation/simulation.rs
// Contains the SimulationState struct: the particles, their sample series and
// the spawn/step/query API the host view drives.

use tracing::{debug, warn};
use ultraviolet::{Vec2, Vec3};

use crate::body::{random_charge, CentralCharge, Particle, ParticleId, ParticleSnapshot};
use crate::clock::{Clock, SimulationClock};
use crate::config::SimConfig;
use crate::diagnostics::Diagnostics;
use crate::picking::{Camera, Plane, Ray};
use crate::plotting::{random_hue, SampleSeries};
use crate::profile_scope;

use super::integrator::Integrator;

/// Whole simulation, owned by the host. `particles[i]` and `series[i]`
/// always belong together.
pub struct SimulationState {
    config: SimConfig,
    central: CentralCharge,
    particles: Vec<Particle>,
    series: Vec<SampleSeries>,
    integrator: Integrator,
    frame: usize,
    time: f64,
    last_timestamp: f64,
    rng: fastrand::Rng,
    clock: Box<dyn Clock>,
}

impl SimulationState {
    /// Seeds from `config.seed` when present, otherwise from entropy.
    pub fn new(config: SimConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_seed(config: SimConfig, seed: u64) -> Self {
        Self::with_rng(config, fastrand::Rng::with_seed(seed))
    }

    fn with_rng(config: SimConfig, rng: fastrand::Rng) -> Self {
        Self {
            central: CentralCharge::new(config.central_charge),
            integrator: Integrator::from_config(&config),
            config,
            particles: Vec::new(),
            series: Vec::new(),
            frame: 0,
            time: 0.0,
            last_timestamp: f64::NEG_INFINITY,
            rng,
            clock: Box::new(SimulationClock),
        }
    }

    /// Replace the timestamp source for samples.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Add a particle at rest. `charge` is reduced to its sign (±1).
    ///
    /// Returns `None` only when `max_particles` is configured and reached.
    pub fn spawn_particle(&mut self, position: Vec3, charge: f32) -> Option<ParticleId> {
        if let Some(max) = self.config.max_particles {
            if self.particles.len() >= max {
                warn!(max, "particle cap reached, spawn dropped");
                return None;
            }
        }
        let id = ParticleId(self.particles.len());
        let particle = Particle::new(id, position, charge);
        let hue = random_hue(&mut self.rng);
        debug!(%id, charge = particle.charge, x = position.x, y = position.y, z = position.z, "spawned particle");
        self.particles.push(particle);
        self.series.push(SampleSeries::new(id, hue, self.config.series_capacity));
        Some(id)
    }

    /// Spawn with a charge of +1 or -1 drawn from the state's rng.
    pub fn spawn_random_charge(&mut self, position: Vec3) -> Option<ParticleId> {
        let charge = random_charge(&mut self.rng);
        self.spawn_particle(position, charge)
    }

    /// Spawn where `ray` meets the ground plane. A ray that never meets it
    /// spawns nothing.
    pub fn spawn_from_ray(&mut self, ray: &Ray) -> Option<ParticleId> {
        match ray.intersect_plane(&Plane::ground()) {
            Some(hit) => self.spawn_random_charge(hit),
            None => {
                debug!("pointer ray misses the ground plane, spawn dropped");
                None
            }
        }
    }

    /// Spawn under a pointer given in normalized device coordinates.
    pub fn spawn_at_pointer(&mut self, ndc: Vec2, camera: &Camera) -> Option<ParticleId> {
        self.spawn_from_ray(&Ray::from_ndc(ndc, camera))
    }

    /// Advance every particle by `dt` and sample speeds at the clock's time.
    pub fn step(&mut self, dt: f32) {
        let sim_time = self.time + dt as f64;
        let timestamp = self.clock.now(sim_time);
        self.step_with_time(dt, timestamp);
    }

    /// Advance by `dt`, stamping this step's samples with `timestamp`.
    /// Timestamps earlier than the previous step's are raised to it so every
    /// series stays non-decreasing.
    pub fn step_with_time(&mut self, dt: f32, timestamp: f64) {
        profile_scope!("simulation_step");
        let timestamp = timestamp.max(self.last_timestamp);
        self.integrator.step(
            dt,
            timestamp,
            &mut self.particles,
            &self.central,
            &mut self.series,
        );
        self.last_timestamp = timestamp;
        self.time += dt as f64;
        self.frame += 1;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.get(id.index())
    }

    /// Owned copy of every particle for renderers.
    pub fn snapshot(&self) -> Vec<ParticleSnapshot> {
        self.particles.iter().map(Particle::snapshot).collect()
    }

    pub fn sample_series(&self, id: ParticleId) -> Option<&SampleSeries> {
        self.series.get(id.index())
    }

    pub fn all_series(&self) -> &[SampleSeries] {
        &self.series
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn central(&self) -> &CentralCharge {
        &self.central
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn integrator(&self) -> &Integrator {
        &self.integrator
    }

    /// Completed steps.
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Simulated seconds elapsed.
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn diagnostics(&self) -> Diagnostics {
        Diagnostics::measure(self)
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}
