use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{error, warn};

use crate::api::{error::ApiError, state::AgentState};
use crate::brain::Brain;
use crate::error::CylonError;

/// POST /think -- one tick: decode state, ask the brain, encode commands
pub async fn think<B: Brain>(
    State(state): State<AgentState<B>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let world: B::State = serde_json::from_slice(&body).map_err(|e| {
        warn!("Rejected think request: {}", e);
        CylonError::Decode(e)
    })?;

    let brain = Arc::clone(&state.brain);
    let commands = tokio::task::spawn_blocking(move || brain.think(world))
        .await
        .map_err(|e| {
            error!("Decision component failed: {}", e);
            CylonError::Internal(format!("decision component failed: {}", e))
        })?;

    // Encode fully before picking a status so a failure can't produce a
    // truncated 200
    let encoded = serde_json::to_vec(&commands).map_err(|e| {
        error!("Failed to encode commands: {}", e);
        CylonError::Encode(e)
    })?;

    Ok((StatusCode::OK, [(CONTENT_TYPE, "application/json")], encoded).into_response())
}
