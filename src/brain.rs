//! Brain trait - the decision component behind `/think`
//!
//! The HTTP layer only decodes a `State`, hands it to `think()`, and encodes
//! whatever `Commands` come back. Brains are synchronous; the dispatcher runs
//! them on the blocking pool so a slow brain only stalls its own request.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::{CommandSet, WorldState};

/// Decision component injected into the agent at construction.
pub trait Brain: Send + Sync + 'static {
    /// Snapshot decoded from the think request body
    type State: DeserializeOwned + Send + 'static;

    /// Output encoded into the think response body
    type Commands: Serialize + Send + 'static;

    /// Produce this tick's commands. Called at most once per request.
    fn think(&self, state: Self::State) -> Self::Commands;
}

/// Brain that never acts. Useful for wiring checks against a live coordinator.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdleBrain;

impl Brain for IdleBrain {
    type State = WorldState;
    type Commands = CommandSet;

    fn think(&self, state: WorldState) -> CommandSet {
        tracing::trace!(tick = state.tick, robot = %state.robot.id, "idle tick");
        CommandSet::default()
    }
}
