// Centralized configuration for simulation parameters

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

// ====================
// Physics Parameters
// ====================
/// Coulomb constant in demo units.
pub const COULOMB_CONSTANT: f32 = 1.0;
/// Charge magnitude of the fixed charge at the origin.
pub const CENTRAL_CHARGE: f32 = 1.0;
/// Every particle has unit mass, so force and acceleration coincide.
pub const PARTICLE_MASS: f32 = 1.0;

// ====================
// Simulation Parameters
// ====================
/// Nominal per-frame timestep (seconds). Applied every frame regardless of
/// the real elapsed time.
pub const DEFAULT_DT: f32 = 0.016;
/// Frames run by the headless driver when none are requested.
pub const DEFAULT_FRAMES: usize = 600;

// ====================
// Spawn / Picking
// ====================
pub const CAMERA_FOV_Y_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_EYE: [f32; 3] = [5.0, 5.0, 5.0];

// ====================
// Field Lattice
// ====================
pub const FIELD_GRID_SIZE: i32 = 3;
pub const FIELD_GRID_SPACING: f32 = 1.0;
pub const FIELD_ARROW_LENGTH: f32 = 0.5;
pub const FIELD_ARROW_HEAD_LENGTH: f32 = 0.2;
pub const FIELD_ARROW_HEAD_WIDTH: f32 = 0.1;
/// Softening added to |p|² when scaling arrows, keeps arrows near the
/// centre finite.
pub const FIELD_ARROW_SOFTENING: f32 = 0.1;

/// How particles see each other's positions within a single step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum UpdateMode {
    /// Particles are updated in place, in spawn order. Particle i sees the
    /// already-advanced positions of particles 0..i within the same step.
    #[default]
    Sequential,
    /// Forces for every particle are computed from the pre-step state, then
    /// all updates are applied together.
    Snapshot,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub coulomb_constant: f32,
    pub central_charge: f32,
    /// Timestep used by the frame driver for each tick
    pub dt: f32,
    pub update_mode: UpdateMode,
    /// Hard cap on live particles. `None` keeps the unbounded behaviour.
    pub max_particles: Option<usize>,
    /// Number of newest samples kept per series. `None` keeps everything.
    pub series_capacity: Option<usize>,
    /// Seed for charge selection and chart hues. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            coulomb_constant: COULOMB_CONSTANT,
            central_charge: CENTRAL_CHARGE,
            dt: DEFAULT_DT,
            update_mode: UpdateMode::default(),
            max_particles: None,
            series_capacity: None,
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SimConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.coulomb_constant.is_finite() || self.coulomb_constant < 0.0 {
            return Err(Error::InvalidParam(format!(
                "coulomb_constant must be finite and >= 0, got {}",
                self.coulomb_constant
            )));
        }
        if !self.central_charge.is_finite() {
            return Err(Error::InvalidParam("central_charge must be finite".to_string()));
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(Error::InvalidParam(format!("dt must be > 0, got {}", self.dt)));
        }
        if self.max_particles == Some(0) {
            return Err(Error::InvalidParam("max_particles must be > 0".to_string()));
        }
        if self.series_capacity == Some(0) {
            return Err(Error::InvalidParam("series_capacity must be > 0".to_string()));
        }
        Ok(())
    }
}
