//! Coordination layer for the agent process
//!
//! - Lifecycle phase tracking (created / ready / shutting down)
//! - The single-fire session shutdown signal

pub mod lifecycle;
pub mod shutdown;

pub use lifecycle::{AgentLifecycle, LifecyclePhase};
pub use shutdown::{install_signal_handlers, SessionSignal, ShutdownHandle, ShutdownReason};
