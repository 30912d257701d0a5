// app/mod.rs
// Host-facing command queue and frame scheduling around SimulationState

use std::path::PathBuf;
use ultraviolet::{Vec2, Vec3};

use crate::picking::Camera;
use crate::plotting::ExportFormat;

pub mod command_loop;
pub mod simulation_loop;

pub use simulation_loop::FrameDriver;

/// Commands sent to the simulation from input handlers. Applied between
/// steps, in arrival order.
#[derive(Clone, Debug)]
pub enum SimCommand {
    /// Spawn at a world position. `None` picks ±1 at random.
    Spawn { position: Vec3, charge: Option<f32> },
    /// Spawn under a pointer (NDC) on the ground plane.
    SpawnAtPointer { ndc: Vec2, camera: Camera },
    /// Advance one frame immediately, then pause.
    StepOnce,
    SetPaused(bool),
    ExportSeries { path: PathBuf, format: ExportFormat },
}

/// Drives a per-frame callback, e.g. a render loop.
pub trait Scheduler {
    /// Invoke `callback` once per frame with that frame's timestep until the
    /// scheduler is exhausted or the callback returns `false`.
    fn on_tick(&mut self, callback: &mut dyn FnMut(f32) -> bool);
}

/// Fires a fixed number of frames back to back with a constant timestep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedStepScheduler {
    pub dt: f32,
    pub frames: usize,
}

impl FixedStepScheduler {
    pub fn new(dt: f32, frames: usize) -> Self {
        Self { dt, frames }
    }
}

impl Scheduler for FixedStepScheduler {
    fn on_tick(&mut self, callback: &mut dyn FnMut(f32) -> bool) {
        for _ in 0..self.frames {
            if !callback(self.dt) {
                break;
            }
        }
    }
}
