//! Session shutdown signal
//!
//! A single-fire notification owned by the process supervisor. Request
//! handlers only ever see a [`ShutdownHandle`], which can ask for shutdown
//! but cannot wait on or reset the signal.

use std::sync::{Arc, OnceLock};
use tokio::sync::broadcast;
use tracing::{info, warn};

/// Why the session is ending
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    /// Coordinator sent POST /end
    MatchEnded,
    /// SIGINT / Ctrl+C
    Interrupted,
    /// SIGTERM
    Terminated,
}

impl std::fmt::Display for ShutdownReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShutdownReason::MatchEnded => write!(f, "match_ended"),
            ShutdownReason::Interrupted => write!(f, "interrupted"),
            ShutdownReason::Terminated => write!(f, "terminated"),
        }
    }
}

/// Fire-once shutdown notification
pub struct SessionSignal {
    reason: OnceLock<ShutdownReason>,
    signal_tx: broadcast::Sender<ShutdownReason>,
}

impl SessionSignal {
    pub fn new() -> Arc<Self> {
        let (signal_tx, _) = broadcast::channel(1);
        Arc::new(Self {
            reason: OnceLock::new(),
            signal_tx,
        })
    }

    /// Narrow capability handed to request handlers
    pub fn handle(self: &Arc<Self>) -> ShutdownHandle {
        ShutdownHandle {
            signal: Arc::clone(self),
        }
    }

    /// Subscribe to the (single) shutdown broadcast
    pub fn subscribe(&self) -> broadcast::Receiver<ShutdownReason> {
        self.signal_tx.subscribe()
    }

    pub fn is_fired(&self) -> bool {
        self.reason.get().is_some()
    }

    pub fn reason(&self) -> Option<ShutdownReason> {
        self.reason.get().copied()
    }

    /// Returns true only for the call that actually fired the signal
    fn fire(&self, reason: ShutdownReason) -> bool {
        if self.reason.set(reason).is_err() {
            warn!(
                "Shutdown already requested ({}), ignoring duplicate: {}",
                self.reason.get().copied().unwrap_or(reason),
                reason
            );
            return false;
        }

        info!("Shutdown requested: {}", reason);
        // No subscribers is fine; late waiters read `reason` instead
        let _ = self.signal_tx.send(reason);
        true
    }

    /// Wait until the signal fires. Returns immediately if it already has.
    pub async fn wait(&self) -> ShutdownReason {
        let mut rx = self.signal_tx.subscribe();
        if let Some(reason) = self.reason() {
            return reason;
        }

        match rx.recv().await {
            Ok(reason) => reason,
            // Sender lives as long as `self`; fall back to the stored reason
            Err(_) => self.reason().unwrap_or(ShutdownReason::Terminated),
        }
    }
}

/// Request-only view of the [`SessionSignal`]
#[derive(Clone)]
pub struct ShutdownHandle {
    signal: Arc<SessionSignal>,
}

impl ShutdownHandle {
    /// Ask the supervisor to stop. Safe to call any number of times, from any
    /// task; only the first call has an effect.
    pub fn request_shutdown(&self, reason: ShutdownReason) -> bool {
        self.signal.fire(reason)
    }
}

/// Route SIGINT/SIGTERM into the session signal
pub fn install_signal_handlers(handle: ShutdownHandle) {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let on_term = handle.clone();
        tokio::spawn(async move {
            match signal(SignalKind::terminate()) {
                Ok(mut stream) => {
                    stream.recv().await;
                    info!("Received SIGTERM");
                    on_term.request_shutdown(ShutdownReason::Terminated);
                }
                Err(e) => warn!("Failed to install SIGTERM handler: {}", e),
            }
        });
    }

    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received Ctrl+C");
                handle.request_shutdown(ShutdownReason::Interrupted);
            }
            Err(e) => warn!("Failed to install Ctrl+C handler: {}", e),
        }
    });
}
