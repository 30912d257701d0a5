pub mod app;
pub mod body;
pub mod clock;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod field;
pub mod picking;
pub mod plotting;
pub mod profiler;
pub mod simulation;

pub use body::{CentralCharge, Particle, ParticleId, ParticleSnapshot};
pub use config::{SimConfig, UpdateMode};
pub use error::{Error, Result};
pub use plotting::{Sample, SampleSeries};
pub use simulation::SimulationState;

#[cfg(feature = "profiling")]
use once_cell::sync::Lazy;
#[cfg(feature = "profiling")]
use parking_lot::Mutex;

#[cfg(feature = "profiling")]
pub static PROFILER: Lazy<Mutex<profiler::Profiler>> =
    Lazy::new(|| Mutex::new(profiler::Profiler::new()));
