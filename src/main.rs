mod main_runtime;

use clap::Parser;
use cylon::adapters::{bind_agent_listener, serve_agent, CoordinatorClient};
use cylon::api::AgentState;
use cylon::cli::{Cli, Commands};
use cylon::config::AppConfig;
use cylon::coordination::{install_signal_handlers, SessionSignal};
use cylon::domain::{AgentEndpoint, SessionState};
use cylon::error::{CylonError, Result};
use cylon::IdleBrain;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match AppConfig::load(Some(cli.config.as_path())) {
        Ok(config) => config,
        Err(e) => {
            main_runtime::init_logging_simple();
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };
    cli.apply_overrides(&mut config);
    main_runtime::init_logging(&config.logging);

    if let Err(errors) = config.validate() {
        for e in &errors {
            error!("Invalid configuration: {}", e);
        }
        return Err(CylonError::Validation(errors.join("; ")));
    }

    let session = Arc::new(SessionState::new(
        AgentEndpoint::new(config.agent.endpoint.as_str()),
        config.coordinator.url.as_str(),
    ));
    let client = CoordinatorClient::new(Arc::clone(&session), config.coordinator.timeout())?;

    match &cli.command {
        Some(Commands::Join { match_id }) => run_join(&client, match_id).await,
        Some(Commands::Serve { .. }) | None => run_serve(&config, session, client).await,
    }
}

async fn run_join(client: &CoordinatorClient, match_id: &str) -> Result<()> {
    client.join(match_id).await.map_err(|e| {
        error!("Failed to join match {}: {}", match_id, e);
        e
    })
}

async fn run_serve(
    config: &AppConfig,
    session: Arc<SessionState>,
    client: CoordinatorClient,
) -> Result<()> {
    let signal = SessionSignal::new();
    install_signal_handlers(signal.handle());

    let state = AgentState::new(session, IdleBrain, signal.handle());
    let listener = bind_agent_listener(config.agent.listen_addr()?).await?;

    // Join only once the listener is up, so coordinator callbacks can land
    if let Some(match_id) = config.coordinator.match_id.clone() {
        tokio::spawn(async move {
            if let Err(e) = client.join(&match_id).await {
                error!("Failed to join match {}: {}", match_id, e);
            }
        });
    }

    serve_agent(
        listener,
        state,
        Arc::clone(&signal),
        config.agent.shutdown_grace(),
    )
    .await?;

    if let Some(reason) = signal.reason() {
        info!("Agent exited: {}", reason);
    }
    Ok(())
}
