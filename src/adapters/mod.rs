pub mod agent_server;
pub mod coordinator_client;

pub use agent_server::{bind_agent_listener, serve_agent};
pub use coordinator_client::CoordinatorClient;
