//! Agent lifecycle tracking
//!
//! CREATED --(any request)--> READY --(End)--> SHUTTING_DOWN
//!
//! Phases are informational: no request is ever refused because of the
//! current phase, and joining a match is not a prerequisite for anything.

use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU8, Ordering};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LifecyclePhase {
    /// Constructed, no request seen yet
    Created = 0,
    /// Serving requests
    Ready = 1,
    /// End received; terminal
    ShuttingDown = 2,
}

impl LifecyclePhase {
    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => LifecyclePhase::Created,
            1 => LifecyclePhase::Ready,
            _ => LifecyclePhase::ShuttingDown,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, LifecyclePhase::ShuttingDown)
    }
}

impl std::fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LifecyclePhase::Created => write!(f, "created"),
            LifecyclePhase::Ready => write!(f, "ready"),
            LifecyclePhase::ShuttingDown => write!(f, "shutting_down"),
        }
    }
}

pub struct AgentLifecycle {
    phase: AtomicU8,
    created_at: DateTime<Utc>,
}

impl AgentLifecycle {
    pub fn new() -> Self {
        Self {
            phase: AtomicU8::new(LifecyclePhase::Created as u8),
            created_at: Utc::now(),
        }
    }

    pub fn phase(&self) -> LifecyclePhase {
        LifecyclePhase::from_u8(self.phase.load(Ordering::SeqCst))
    }

    pub fn uptime_seconds(&self) -> u64 {
        (Utc::now() - self.created_at).num_seconds().max(0) as u64
    }

    /// CREATED -> READY. No-op in any other phase.
    pub fn mark_ready(&self) {
        if self
            .phase
            .compare_exchange(
                LifecyclePhase::Created as u8,
                LifecyclePhase::Ready as u8,
                Ordering::SeqCst,
                Ordering::SeqCst,
            )
            .is_ok()
        {
            debug!("Agent lifecycle: created -> ready");
        }
    }

    /// Enter the terminal phase. Returns the phase that was left behind, so
    /// callers can tell a first End from a repeat.
    pub fn begin_shutdown(&self) -> LifecyclePhase {
        let previous = LifecyclePhase::from_u8(
            self.phase
                .swap(LifecyclePhase::ShuttingDown as u8, Ordering::SeqCst),
        );
        if !previous.is_terminal() {
            info!(
                "Agent lifecycle: {} -> shutting_down after {}s",
                previous,
                self.uptime_seconds()
            );
        }
        previous
    }
}

impl Default for AgentLifecycle {
    fn default() -> Self {
        Self::new()
    }
}
