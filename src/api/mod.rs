//! Inbound HTTP surface of the agent
//!
//! | Method   | Path    | Handler            |
//! |----------|---------|--------------------|
//! | GET/POST | /status | liveness           |
//! | POST     | /start  | acknowledge start  |
//! | POST     | /end    | request shutdown   |
//! | POST     | /think  | one decision tick  |

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{create_router, Endpoint, Route, RouteMethod, ROUTES};
pub use state::AgentState;
