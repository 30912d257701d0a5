// body/central.rs
// The fixed charge sitting at the world origin

use serde::{Deserialize, Serialize};
use ultraviolet::Vec3;

use crate::config;

/// Fixed attractor/repeller at the origin. Built once per simulation and
/// never moved.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CentralCharge {
    position: Vec3,
    charge: f32,
}

impl CentralCharge {
    pub fn new(charge: f32) -> Self {
        Self {
            position: Vec3::zero(),
            charge,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn charge(&self) -> f32 {
        self.charge
    }
}

impl Default for CentralCharge {
    fn default() -> Self {
        Self::new(config::CENTRAL_CHARGE)
    }
}
