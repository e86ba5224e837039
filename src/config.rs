use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::Path;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub agent: AgentConfig,
    #[serde(default)]
    pub coordinator: CoordinatorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AgentConfig {
    /// Callback address registered with the coordinator (e.g. "http://agent:9000")
    #[serde(default)]
    pub endpoint: String,
    /// Interface to listen on
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
    /// How long the listener keeps accepting after the session signal fires
    #[serde(default = "default_shutdown_grace_ms")]
    pub shutdown_grace_ms: u64,
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9000
}

fn default_shutdown_grace_ms() -> u64 {
    500
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            bind: default_bind(),
            port: default_port(),
            shutdown_grace_ms: default_shutdown_grace_ms(),
        }
    }
}

impl AgentConfig {
    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .bind
            .parse()
            .map_err(|e| ConfigError::Message(format!("invalid agent.bind `{}`: {}", self.bind, e)))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_millis(self.shutdown_grace_ms)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoordinatorConfig {
    /// Coordinator base address; `join` is appended to it
    #[serde(default)]
    pub url: String,
    /// Match to join once the listener is up
    #[serde(default)]
    pub match_id: Option<String>,
    /// Overall timeout for the join call. Unset means the transport default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl CoordinatorConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Enable JSON formatted logs
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Load configuration from an optional TOML file and the environment
    /// (`CYLON__AGENT__ENDPOINT`, `CYLON__COORDINATOR__URL`, ...)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("agent.bind", default_bind())?
            .set_default("agent.port", default_port() as i64)?
            .set_default("agent.shutdown_grace_ms", default_shutdown_grace_ms() as i64)?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(false));
        }

        builder
            .add_source(
                Environment::with_prefix("CYLON")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Validate configuration values.
    ///
    /// The coordinator URL is only checked for presence; a malformed address
    /// is reported by the join call itself.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.agent.endpoint.trim().is_empty() {
            errors.push("agent.endpoint must not be empty".to_string());
        }

        if self.agent.port == 0 {
            errors.push("agent.port must be non-zero".to_string());
        }

        if let Err(e) = self.agent.listen_addr() {
            errors.push(e.to_string());
        }

        if self.coordinator.url.trim().is_empty() {
            errors.push("coordinator.url must not be empty".to_string());
        }

        if let Some(match_id) = &self.coordinator.match_id {
            if match_id.trim().is_empty() {
                errors.push("coordinator.match_id must not be empty when set".to_string());
            }
        }

        if self.coordinator.timeout_secs == Some(0) {
            errors.push("coordinator.timeout_secs must be positive when set".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
