use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;

use crate::api::{create_router, AgentState};
use crate::brain::Brain;
use crate::coordination::SessionSignal;
use crate::error::Result;

/// Bind the agent's listener
pub async fn bind_agent_listener(addr: SocketAddr) -> Result<TcpListener> {
    let listener = TcpListener::bind(addr).await?;
    info!("Agent listening on http://{}", listener.local_addr()?);
    Ok(listener)
}

/// Serve the agent API on `listener` until `signal` fires, then keep
/// accepting for `grace` before draining in-flight requests and returning.
///
/// The grace window covers calls racing the one that fired the signal,
/// e.g. a second `/end` on another connection, which must still get a 200.
pub async fn serve_agent<B: Brain>(
    listener: TcpListener,
    state: AgentState<B>,
    signal: Arc<SessionSignal>,
    grace: Duration,
) -> Result<()> {
    let app = create_router(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let reason = signal.wait().await;
            info!(
                "Agent server stopping in {}ms: {}",
                grace.as_millis(),
                reason
            );
            tokio::time::sleep(grace).await;
        })
        .await?;

    info!("Agent server stopped");
    Ok(())
}
