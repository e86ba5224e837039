use std::sync::Arc;

use crate::brain::Brain;
use crate::coordination::{AgentLifecycle, ShutdownHandle};
use crate::domain::SessionState;

/// Shared state for the agent's request handlers
pub struct AgentState<B: Brain> {
    /// Own endpoint + coordinator address, fixed at startup
    pub session: Arc<SessionState>,

    /// Decision component
    pub brain: Arc<B>,

    /// Lifecycle phase tracking
    pub lifecycle: Arc<AgentLifecycle>,

    /// Request-only access to the session shutdown signal
    pub shutdown: ShutdownHandle,
}

impl<B: Brain> AgentState<B> {
    pub fn new(session: Arc<SessionState>, brain: B, shutdown: ShutdownHandle) -> Self {
        Self {
            session,
            brain: Arc::new(brain),
            lifecycle: Arc::new(AgentLifecycle::new()),
            shutdown,
        }
    }
}

// Manual impl: deriving would demand `B: Clone`
impl<B: Brain> Clone for AgentState<B> {
    fn clone(&self) -> Self {
        Self {
            session: Arc::clone(&self.session),
            brain: Arc::clone(&self.brain),
            lifecycle: Arc::clone(&self.lifecycle),
            shutdown: self.shutdown.clone(),
        }
    }
}
