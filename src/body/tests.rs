use super::*;
use ultraviolet::Vec3;

#[test]
fn new_particle_starts_at_rest() {
    let p = Particle::new(ParticleId(3), Vec3::new(1.0, 0.0, 2.0), 1.0);
    assert_eq!(p.vel, Vec3::zero());
    assert_eq!(p.speed(), 0.0);
    assert_eq!(p.id.index(), 3);
    assert!(p.is_finite());
}

#[test]
fn charges_are_normalised_to_unit_sign() {
    assert_eq!(unit_charge(3.5), 1.0);
    assert_eq!(unit_charge(-0.2), -1.0);
    assert_eq!(unit_charge(0.0), 1.0);
    let p = Particle::new(ParticleId(0), Vec3::zero(), -7.0);
    assert_eq!(p.charge, -1.0);
}

#[test]
fn random_charge_is_seeded_and_covers_both_signs() {
    let mut a = fastrand::Rng::with_seed(42);
    let mut b = fastrand::Rng::with_seed(42);
    let seq_a: Vec<f32> = (0..64).map(|_| random_charge(&mut a)).collect();
    let seq_b: Vec<f32> = (0..64).map(|_| random_charge(&mut b)).collect();
    assert_eq!(seq_a, seq_b);
    assert!(seq_a.iter().any(|&q| q > 0.0));
    assert!(seq_a.iter().any(|&q| q < 0.0));
    assert!(seq_a.iter().all(|&q| q == 1.0 || q == -1.0));
}

#[test]
fn central_charge_sits_at_origin() {
    let c = CentralCharge::default();
    assert_eq!(c.position(), Vec3::zero());
    assert_eq!(c.charge(), 1.0);
}

#[test]
fn non_finite_particle_is_detected() {
    let mut p = Particle::new(ParticleId(0), Vec3::zero(), 1.0);
    p.vel.y = f32::NAN;
    assert!(!p.is_finite());
}
