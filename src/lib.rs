pub mod adapters;
pub mod api;
pub mod brain;
pub mod cli;
pub mod config;
pub mod coordination;
pub mod domain;
pub mod error;

pub use adapters::CoordinatorClient;
pub use brain::{Brain, IdleBrain};
pub use config::AppConfig;
pub use coordination::{
    AgentLifecycle, LifecyclePhase, SessionSignal, ShutdownHandle, ShutdownReason,
};
pub use domain::{AgentEndpoint, CommandSet, JoinRequest, MatchId, SessionState, WorldState};
pub use error::{CylonError, Result};
