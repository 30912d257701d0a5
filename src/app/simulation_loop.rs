use std::sync::mpsc::{channel, Receiver, Sender};
use tracing::{error, info, warn};

use crate::error::Result;
use crate::profile_scope;
use crate::simulation::SimulationState;

use super::{command_loop, Scheduler, SimCommand};

/// Owns the simulation and the receiving end of the command queue. Each
/// tick applies all pending commands, then advances one frame unless
/// paused.
pub struct FrameDriver {
    state: SimulationState,
    rx: Receiver<SimCommand>,
    paused: bool,
    /// Log a diagnostics line every this many frames (0 disables)
    pub report_every: usize,
}

impl FrameDriver {
    pub fn new(state: SimulationState) -> (Self, Sender<SimCommand>) {
        let (tx, rx) = channel();
        let driver = Self {
            state,
            rx,
            paused: false,
            report_every: 0,
        };
        (driver, tx)
    }

    /// Apply every pending command, using the configured timestep for
    /// `StepOnce`. All commands are applied even if one fails; the first
    /// failure is returned.
    pub fn drain_commands(&mut self) -> Result<usize> {
        let dt = self.state.config().dt;
        self.drain_commands_with(dt)
    }

    fn drain_commands_with(&mut self, dt: f32) -> Result<usize> {
        let mut handled = 0;
        let mut first_err = None;
        while let Ok(cmd) = self.rx.try_recv() {
            let result = command_loop::handle_command(cmd, &mut self.state, &mut self.paused, dt);
            if let Err(e) = result {
                if first_err.is_none() {
                    first_err = Some(e);
                }
            }
            handled += 1;
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(handled),
        }
    }

    /// One frame at the configured timestep.
    pub fn tick(&mut self) {
        let dt = self.state.config().dt;
        self.tick_with(dt);
    }

    /// One frame at `dt`. Command failures are logged, the frame still runs.
    pub fn tick_with(&mut self, dt: f32) {
        profile_scope!("simulation_loop");
        if let Err(e) = self.drain_commands_with(dt) {
            error!("command failed: {e}");
        }
        if self.paused {
            return;
        }
        self.state.step(dt);

        let invalid = self.state.particles().iter().filter(|p| !p.is_finite()).count();
        if invalid > 0 {
            warn!(invalid, frame = self.state.frame(), "particles with non-finite position or velocity");
        }
        let report_due = self.report_every > 0 && self.state.frame() % self.report_every == 0;
        if report_due {
            info!("{}", self.state.diagnostics());
        }

        #[cfg(feature = "profiling")]
        {
            let mut profiler = crate::PROFILER.lock();
            profiler.end_frame();
            if report_due {
                profiler.log_report();
            }
        }
    }

    /// Tick once per frame the scheduler fires.
    pub fn run<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        scheduler.on_tick(&mut |dt| {
            self.tick_with(dt);
            true
        });
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }

    pub fn into_state(self) -> SimulationState {
        self.state
    }
}
