use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::AppConfig;

/// Match agent runtime CLI.
#[derive(Parser, Debug)]
#[command(name = "cylon")]
#[command(author, version)]
#[command(
    about = "Match agent: joins a coordinator and answers think requests",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Override the callback endpoint registered with the coordinator
    #[arg(long, env = "CYLON_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Override the coordinator base address
    #[arg(long, env = "CYLON_COORDINATOR")]
    pub coordinator: Option<String>,

    /// Override the listen port
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the agent API until the match ends (default)
    Serve {
        /// Join this match once the listener is bound
        #[arg(long)]
        join: Option<String>,
    },

    /// Perform a single join handshake and exit
    Join {
        /// Match identifier to join
        match_id: String,
    },
}

impl Cli {
    /// Apply command-line overrides on top of loaded configuration
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(endpoint) = &self.endpoint {
            config.agent.endpoint = endpoint.clone();
        }
        if let Some(coordinator) = &self.coordinator {
            config.coordinator.url = coordinator.clone();
        }
        if let Some(port) = self.port {
            config.agent.port = port;
        }
        if let Some(Commands::Serve { join: Some(match_id) }) = &self.command {
            config.coordinator.match_id = Some(match_id.clone());
        }
    }
}
