//! Session identity: who this agent is and which coordinator it talks to.
//!
//! Everything here is fixed at construction and shared read-only between
//! request handlers, so no locking is involved.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CylonError, Result};

/// Callback address the coordinator uses for tick requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentEndpoint(String);

impl AgentEndpoint {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self(endpoint.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AgentEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque token naming a match. Supplied by the operator, never generated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(String);

impl MatchId {
    /// Accepts any non-blank identifier verbatim
    pub fn parse(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(CylonError::Validation(
                "match identifier must not be empty".to_string(),
            ));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body of the outbound join call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinRequest {
    pub endpoint: AgentEndpoint,
    #[serde(rename = "match")]
    pub match_id: MatchId,
}

/// Immutable addresses of this agent and its coordinator
#[derive(Debug, Clone)]
pub struct SessionState {
    endpoint: AgentEndpoint,
    coordinator_root: String,
}

impl SessionState {
    pub fn new(endpoint: AgentEndpoint, coordinator_root: impl Into<String>) -> Self {
        Self {
            endpoint,
            coordinator_root: coordinator_root.into(),
        }
    }

    pub fn endpoint(&self) -> &AgentEndpoint {
        &self.endpoint
    }

    /// Unparsed on purpose; Join reports a bad address when it resolves it
    pub fn coordinator_root(&self) -> &str {
        &self.coordinator_root
    }

    pub fn join_request(&self, match_id: MatchId) -> JoinRequest {
        JoinRequest {
            endpoint: self.endpoint.clone(),
            match_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_request_wire_shape() {
        let session = SessionState::new(
            AgentEndpoint::new("http://agent:9000"),
            "http://coord:8000",
        );
        let request = session.join_request(MatchId::parse("match-42").unwrap());

        let body = serde_json::to_string(&request).unwrap();
        assert_eq!(body, r#"{"endpoint":"http://agent:9000","match":"match-42"}"#);
    }

    #[test]
    fn test_match_id_rejects_blank() {
        assert!(matches!(MatchId::parse(""), Err(CylonError::Validation(_))));
        assert!(matches!(MatchId::parse("   "), Err(CylonError::Validation(_))));
    }

    #[test]
    fn test_match_id_kept_verbatim() {
        let id = MatchId::parse(" arena 7 ").unwrap();
        assert_eq!(id.as_str(), " arena 7 ");
    }
}
