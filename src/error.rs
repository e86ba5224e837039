use thiserror::Error;

/// Main error type for the agent
#[derive(Error, Debug)]
pub enum CylonError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    // Inbound payload errors
    #[error("Failed to decode world state: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to encode command set: {0}")]
    Encode(#[source] serde_json::Error),

    // Join handshake errors
    #[error("Invalid coordinator address `{address}`: {reason}")]
    Address { address: String, reason: String },

    #[error("HTTP request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("expected HTTP 200 - OK, got {status}")]
    Protocol { status: u16 },

    // Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CylonError {
    /// Status code observed on a rejected join, if any
    pub fn protocol_status(&self) -> Option<u16> {
        match self {
            CylonError::Protocol { status } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for CylonError
pub type Result<T> = std::result::Result<T, CylonError>;
