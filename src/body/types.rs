// body/types.rs
// Contains the Particle struct, its id and charge helpers

use serde::{Deserialize, Serialize};
use std::fmt;
use ultraviolet::Vec3;

/// Index of a particle in spawn order. Particles are never removed, so an
/// id stays valid for the whole session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParticleId(pub usize);

impl ParticleId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub id: ParticleId,
    pub pos: Vec3,
    pub vel: Vec3,
    /// Always +1.0 or -1.0
    pub charge: f32,
}

impl Particle {
    pub fn new(id: ParticleId, pos: Vec3, charge: f32) -> Self {
        Self {
            id,
            pos,
            vel: Vec3::zero(),
            charge: unit_charge(charge),
        }
    }

    pub fn speed(&self) -> f32 {
        self.vel.mag()
    }

    pub fn is_finite(&self) -> bool {
        let finite = |v: Vec3| v.x.is_finite() && v.y.is_finite() && v.z.is_finite();
        finite(self.pos) && finite(self.vel)
    }

    pub fn snapshot(&self) -> ParticleSnapshot {
        ParticleSnapshot {
            position: self.pos,
            velocity: self.vel,
            charge: self.charge,
        }
    }
}

/// Read-only view of a particle handed to renderers and exporters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticleSnapshot {
    pub position: Vec3,
    pub velocity: Vec3,
    pub charge: f32,
}

/// Collapse any charge onto ±1 by sign. Zero counts as positive.
pub fn unit_charge(charge: f32) -> f32 {
    if charge < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Pick +1 or -1 with equal probability.
pub fn random_charge(rng: &mut fastrand::Rng) -> f32 {
    if rng.bool() {
        1.0
    } else {
        -1.0
    }
}
