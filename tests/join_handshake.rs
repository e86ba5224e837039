use axum::{
    http::{header, HeaderMap, Method, StatusCode, Uri},
    Router,
};
use cylon::{
    adapters::CoordinatorClient,
    domain::{AgentEndpoint, SessionState},
    error::CylonError,
};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
struct Captured {
    method: Method,
    path: String,
    content_type: Option<String>,
    body: String,
}

type Captures = Arc<Mutex<Vec<Captured>>>;

/// Stub coordinator answering every request with `status`
async fn spawn_coordinator(status: StatusCode) -> (String, Captures) {
    let captures: Captures = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new().fallback({
        let captures = Arc::clone(&captures);
        move |method: Method, uri: Uri, headers: HeaderMap, body: String| {
            let captures = Arc::clone(&captures);
            async move {
                captures.lock().unwrap().push(Captured {
                    method,
                    path: uri.path().to_string(),
                    content_type: headers
                        .get(header::CONTENT_TYPE)
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string),
                    body,
                });
                status
            }
        }
    });

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind stub coordinator");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub coordinator failed");
    });

    (format!("http://{}", addr), captures)
}

fn client(endpoint: &str, coordinator_root: &str) -> CoordinatorClient {
    let session = SessionState::new(AgentEndpoint::new(endpoint), coordinator_root);
    CoordinatorClient::new(Arc::new(session), None).expect("failed to build client")
}

#[tokio::test]
async fn join_sends_endpoint_and_match_verbatim() {
    let (root, captures) = spawn_coordinator(StatusCode::OK).await;

    client("http://agent:9000", &root)
        .join("match-42")
        .await
        .expect("join should succeed on 200");

    let captures = captures.lock().unwrap();
    assert_eq!(captures.len(), 1);
    let request = &captures[0];
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.path, "/join");
    assert_eq!(request.content_type.as_deref(), Some("application/json"));
    assert_eq!(
        request.body,
        r#"{"endpoint":"http://agent:9000","match":"match-42"}"#
    );
}

#[tokio::test]
async fn join_appends_segment_to_base_path() {
    let (root, captures) = spawn_coordinator(StatusCode::OK).await;

    client("http://agent:9000", &format!("{}/arena/", root))
        .join("m-1")
        .await
        .unwrap();

    assert_eq!(captures.lock().unwrap()[0].path, "/arena/join");
}

#[tokio::test]
async fn join_reports_unexpected_status() {
    let (root, _) = spawn_coordinator(StatusCode::NOT_FOUND).await;

    let err = client("http://agent:9000", &root)
        .join("match-42")
        .await
        .unwrap_err();

    assert!(matches!(err, CylonError::Protocol { status: 404 }));
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn join_requires_exactly_200() {
    let (root, _) = spawn_coordinator(StatusCode::CREATED).await;

    let err = client("http://agent:9000", &root)
        .join("match-42")
        .await
        .unwrap_err();

    assert_eq!(err.protocol_status(), Some(201));
}

#[tokio::test]
async fn join_is_not_retried_or_remembered() {
    let (root, captures) = spawn_coordinator(StatusCode::SERVICE_UNAVAILABLE).await;
    let client = client("http://agent:9000", &root);

    assert!(client.join("match-42").await.is_err());
    assert_eq!(captures.lock().unwrap().len(), 1);

    // A second attempt is a fresh request; nothing was recorded locally
    assert!(client.join("match-42").await.is_err());
    assert_eq!(captures.lock().unwrap().len(), 2);
    assert_eq!(client.session().endpoint().as_str(), "http://agent:9000");
}

#[tokio::test]
async fn join_reports_unreachable_coordinator() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client("http://agent:9000", &format!("http://{}", addr))
        .join("match-42")
        .await
        .unwrap_err();

    assert!(matches!(err, CylonError::Transport(_)), "got {:?}", err);
}

#[tokio::test]
async fn join_reports_malformed_coordinator_address() {
    let err = client("http://agent:9000", "http//coord:8000")
        .join("match-42")
        .await
        .unwrap_err();

    assert!(matches!(err, CylonError::Address { .. }), "got {:?}", err);
}
