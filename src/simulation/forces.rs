//! Force calculation for the particle simulation.
//!
//! Net Coulomb force on one particle from the fixed central charge and every
//! other mobile particle. With unit mass the returned force is also the
//! acceleration.

use crate::body::{CentralCharge, Particle};
use ultraviolet::Vec3;

/// Net force on `target` from the central charge and every other particle in
/// `all` (`target` itself is skipped by id).
///
/// The central term is `+unit(to_center) * k * q * Q / d²`: positive charges
/// are pulled toward the centre, negative charges pushed out. Pairwise terms
/// use the usual Coulomb sign, so like charges repel. Any term whose squared
/// distance is exactly zero contributes nothing.
///
/// O(n) per call, O(n²) per step over all particles.
pub fn force(target: &Particle, central: &CentralCharge, all: &[Particle], k: f32) -> Vec3 {
    let mut total = central_force(target, central, k);
    for other in all {
        if other.id == target.id {
            continue;
        }
        total += pair_force(target, other, k);
    }
    total
}

/// Contribution of the fixed central charge alone.
pub fn central_force(target: &Particle, central: &CentralCharge, k: f32) -> Vec3 {
    let to_center = central.position() - target.pos;
    let dist_sq = to_center.mag_sq();
    if dist_sq > 0.0 {
        let f = k * target.charge * central.charge() / dist_sq;
        to_center.normalized() * f
    } else {
        Vec3::zero()
    }
}

/// Contribution of `other` on `target`.
pub fn pair_force(target: &Particle, other: &Particle, k: f32) -> Vec3 {
    let to_other = other.pos - target.pos;
    let dist_sq = to_other.mag_sq();
    if dist_sq > 0.0 {
        let f = -k * target.charge * other.charge / dist_sq;
        to_other.normalized() * f
    } else {
        Vec3::zero()
    }
}

/// Potential energy consistent with the force conventions above.
///
/// The central term is `-k q Q / r` (matching a pull toward the centre for
/// `qQ > 0`), each unordered pair adds `k q1 q2 / r`. Coincident points are
/// skipped.
pub fn potential_energy(central: &CentralCharge, all: &[Particle], k: f32) -> f32 {
    let mut energy = 0.0;
    for (i, p) in all.iter().enumerate() {
        let r = (central.position() - p.pos).mag();
        if r > 0.0 {
            energy -= k * p.charge * central.charge() / r;
        }
        for o in &all[i + 1..] {
            let r = (o.pos - p.pos).mag();
            if r > 0.0 {
                energy += k * p.charge * o.charge / r;
            }
        }
    }
    energy
}
