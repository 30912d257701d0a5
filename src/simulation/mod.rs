// simulation/mod.rs
// Re-exports and module declarations for simulation submodules

pub mod forces;
pub mod integrator;
pub mod simulation;
pub use integrator::Integrator;
pub use simulation::*;
