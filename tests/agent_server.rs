use cylon::{
    adapters::{bind_agent_listener, serve_agent},
    api::AgentState,
    coordination::{SessionSignal, ShutdownReason},
    domain::{AgentEndpoint, SessionState},
    IdleBrain,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

const GRACE: Duration = Duration::from_millis(300);

struct RunningAgent {
    base: String,
    signal: Arc<SessionSignal>,
    server: JoinHandle<cylon::error::Result<()>>,
}

async fn spawn_agent() -> RunningAgent {
    let session = Arc::new(SessionState::new(
        AgentEndpoint::new("http://agent:9000"),
        "http://coord:8000",
    ));
    let signal = SessionSignal::new();
    let state = AgentState::new(session, IdleBrain, signal.handle());

    let listener = bind_agent_listener("127.0.0.1:0".parse().unwrap())
        .await
        .expect("failed to bind agent");
    let base = format!("http://{}", listener.local_addr().unwrap());
    let server = tokio::spawn(serve_agent(listener, state, Arc::clone(&signal), GRACE));

    RunningAgent {
        base,
        signal,
        server,
    }
}

async fn post(client: &reqwest::Client, url: String) -> reqwest::StatusCode {
    client
        .post(url)
        .send()
        .await
        .expect("request to agent failed")
        .status()
}

async fn assert_exits(server: JoinHandle<cylon::error::Result<()>>) {
    tokio::time::timeout(Duration::from_secs(5), server)
        .await
        .expect("agent did not stop after the session signal")
        .expect("server task panicked")
        .expect("server returned an error");
}

#[tokio::test]
async fn concurrent_end_on_separate_connections_both_succeed() {
    for _ in 0..5 {
        let agent = spawn_agent().await;
        let first = reqwest::Client::new();
        let second = reqwest::Client::new();

        let (a, b) = tokio::join!(
            post(&first, format!("{}/end", agent.base)),
            post(&second, format!("{}/end", agent.base)),
        );
        assert_eq!(a, reqwest::StatusCode::OK);
        assert_eq!(b, reqwest::StatusCode::OK);
        assert_eq!(agent.signal.reason(), Some(ShutdownReason::MatchEnded));

        drop(first);
        drop(second);
        assert_exits(agent.server).await;
    }
}

#[tokio::test]
async fn requests_after_end_are_served_until_grace_elapses() {
    let agent = spawn_agent().await;
    let client = reqwest::Client::new();

    assert_eq!(
        post(&client, format!("{}/end", agent.base)).await,
        reqwest::StatusCode::OK
    );

    let late = reqwest::Client::new();
    let status = late
        .get(format!("{}/status", agent.base))
        .send()
        .await
        .expect("status after end was dropped")
        .status();
    assert_eq!(status, reqwest::StatusCode::OK);

    drop(client);
    drop(late);
    assert_exits(agent.server).await;
}
