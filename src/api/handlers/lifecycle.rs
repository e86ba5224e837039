use axum::{extract::State, http::StatusCode};

use crate::api::state::AgentState;
use crate::brain::Brain;
use crate::coordination::ShutdownReason;

/// GET|POST /status -- liveness probe
pub async fn status() -> StatusCode {
    StatusCode::OK
}

/// POST /start -- acknowledged; the agent is ready to think from construction
pub async fn start() -> StatusCode {
    StatusCode::OK
}

/// POST /end
///
/// Always 200. The first End fires the session signal; repeats only log. The
/// server keeps accepting for a grace window and then drains in-flight
/// responses, so this 200 and any racing call are still answered.
pub async fn end<B: Brain>(State(state): State<AgentState<B>>) -> StatusCode {
    state.lifecycle.begin_shutdown();
    state.shutdown.request_shutdown(ShutdownReason::MatchEnded);
    StatusCode::OK
}
