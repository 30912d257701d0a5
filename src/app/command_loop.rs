use tracing::debug;

use crate::error::Result;
use crate::profile_scope;
use crate::simulation::SimulationState;

use super::SimCommand;

/// Apply one command. `paused` is the driver's pause flag and `dt` the
/// timestep of the frame being driven, used by `StepOnce`.
///
/// Only an export can fail; spawns that miss or hit the particle cap are
/// dropped silently.
pub fn handle_command(
    cmd: SimCommand,
    state: &mut SimulationState,
    paused: &mut bool,
    dt: f32,
) -> Result<()> {
    profile_scope!("command_handling");
    match cmd {
        SimCommand::Spawn { position, charge } => {
            let id = match charge {
                Some(q) => state.spawn_particle(position, q),
                None => state.spawn_random_charge(position),
            };
            if id.is_none() {
                debug!(?position, "spawn command dropped");
            }
        }
        SimCommand::SpawnAtPointer { ndc, camera } => {
            state.spawn_at_pointer(ndc, &camera);
        }
        SimCommand::StepOnce => {
            state.step(dt);
            *paused = true;
        }
        SimCommand::SetPaused(p) => {
            *paused = p;
        }
        SimCommand::ExportSeries { path, format } => {
            crate::plotting::write_series(&path, state.all_series(), format)?;
        }
    }
    Ok(())
}
