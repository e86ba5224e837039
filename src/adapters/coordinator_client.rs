//! Outbound client for the match coordinator.
//!
//! The only call is the join handshake: one POST registering this agent's
//! callback endpoint for a match. There is no retry here; callers decide.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use url::Url;

use crate::domain::{MatchId, SessionState};
use crate::error::{CylonError, Result};

const JOIN_SEGMENT: &str = "join";

#[derive(Clone)]
pub struct CoordinatorClient {
    http: Client,
    session: Arc<SessionState>,
}

impl CoordinatorClient {
    /// `timeout` of `None` leaves reqwest's default (no overall deadline)
    pub fn new(session: Arc<SessionState>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(concat!("cylon/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| {
            CylonError::Internal(format!("failed to build coordinator HTTP client: {}", e))
        })?;

        Ok(Self { http, session })
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Coordinator base address with the `join` segment appended
    pub fn join_url(&self) -> Result<Url> {
        let root = self.session.coordinator_root();
        let address_error = |reason: String| CylonError::Address {
            address: root.to_string(),
            reason,
        };

        let mut url = Url::parse(root).map_err(|e| address_error(e.to_string()))?;
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| address_error("address cannot carry a path".to_string()))?
            .pop_if_empty()
            .push(JOIN_SEGMENT);

        Ok(url)
    }

    /// Register this agent's endpoint with the coordinator for `match_id`.
    ///
    /// Succeeds only on an explicit 200. Local state is untouched either way.
    pub async fn join(&self, match_id: &str) -> Result<()> {
        let match_id = MatchId::parse(match_id)?;
        let url = self.join_url()?;
        let request = self.session.join_request(match_id);
        let body = serde_json::to_vec(&request).map_err(CylonError::Encode)?;

        info!("Making request to {}", url);
        let resp = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(CylonError::Protocol {
                status: status.as_u16(),
            });
        }

        info!("OK");
        Ok(())
    }
}
