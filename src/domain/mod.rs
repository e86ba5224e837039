pub mod session;
pub mod world;

pub use session::{AgentEndpoint, JoinRequest, MatchId, SessionState};
pub use world::{Command, CommandSet, Position, Robot, WorldState};
