use axum::{
    extract::{Request, State},
    http::{header, HeaderValue},
    middleware::{self, Next},
    response::Response,
    routing::{MethodFilter, MethodRouter},
    Router,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::debug;

use crate::api::{handlers, state::AgentState};
use crate::brain::Brain;
use crate::coordination::AgentLifecycle;

const CORS_ALLOW_ORIGIN: &str = "*";
const CORS_ALLOW_HEADERS: &str = "Origin, X-Requested-With, Content-Type, Accept";
const CORS_ALLOW_METHODS: &str = "GET, POST, DELETE, PUT, OPTIONS";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RouteMethod {
    Get,
    Post,
}

impl RouteMethod {
    fn filter(self) -> MethodFilter {
        match self {
            RouteMethod::Get => MethodFilter::GET,
            RouteMethod::Post => MethodFilter::POST,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Status,
    Start,
    End,
    Think,
}

#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub method: RouteMethod,
    pub path: &'static str,
    pub endpoint: Endpoint,
}

/// Every inbound route the agent serves
pub const ROUTES: &[Route] = &[
    Route { method: RouteMethod::Get, path: "/status", endpoint: Endpoint::Status },
    Route { method: RouteMethod::Post, path: "/status", endpoint: Endpoint::Status },
    Route { method: RouteMethod::Post, path: "/start", endpoint: Endpoint::Start },
    Route { method: RouteMethod::Post, path: "/end", endpoint: Endpoint::End },
    Route { method: RouteMethod::Post, path: "/think", endpoint: Endpoint::Think },
];

fn mount<B: Brain>(
    method_router: MethodRouter<AgentState<B>>,
    route: &Route,
) -> MethodRouter<AgentState<B>> {
    let filter = route.method.filter();
    match route.endpoint {
        Endpoint::Status => method_router.on(filter, handlers::status),
        Endpoint::Start => method_router.on(filter, handlers::start),
        Endpoint::End => method_router.on(filter, handlers::end::<B>),
        Endpoint::Think => method_router.on(filter, handlers::think::<B>),
    }
}

/// First request of any kind moves the agent out of CREATED
async fn track_lifecycle(
    State(lifecycle): State<Arc<AgentLifecycle>>,
    request: Request,
    next: Next,
) -> Response {
    lifecycle.mark_ready();
    next.run(request).await
}

pub fn create_router<B: Brain>(state: AgentState<B>) -> Router {
    let mut by_path: BTreeMap<&'static str, MethodRouter<AgentState<B>>> = BTreeMap::new();
    for route in ROUTES {
        debug!("Mounting {:?} {} -> {:?}", route.method, route.path, route.endpoint);
        let method_router = by_path.remove(route.path).unwrap_or_else(MethodRouter::new);
        by_path.insert(route.path, mount(method_router, route));
    }

    let router = by_path
        .into_iter()
        .fold(Router::new(), |router, (path, method_router)| {
            router.route(path, method_router)
        });

    router
        .layer(middleware::from_fn_with_state(
            Arc::clone(&state.lifecycle),
            track_lifecycle,
        ))
        // CORS headers go on every response, errors included
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(CORS_ALLOW_ORIGIN),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(CORS_ALLOW_HEADERS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(CORS_ALLOW_METHODS),
        ))
        .with_state(state)
}
