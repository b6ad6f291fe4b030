use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::Arc,
    time::{Duration, Instant},
};

use axum::{
    extract::{ConnectInfo, Request, State},
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::api::LimitedRoute;

const REQUEST_ID_HEADER: &str = "x-request-id";
const MAX_REQUEST_ID_LEN: usize = 64;

/// Expired client windows are swept once the table reaches this size.
const CLIENT_SWEEP_THRESHOLD: usize = 1024;

/// Newtype wrapping a request ID string, stored as a request extension.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

#[derive(Debug, Clone, Copy)]
struct ClientWindow {
    started_at: Instant,
    count: usize,
}

/// Fixed-window limiter for one route, counted per client address.
///
/// Each delivery check costs a paid geocoding call. Behind a reverse proxy
/// every request shares the proxy's address, so the limit becomes global.
#[derive(Debug, Clone)]
pub struct RateLimitState {
    route: LimitedRoute,
    max_requests: usize,
    window: Duration,
    clients: Arc<Mutex<HashMap<String, ClientWindow>>>,
}

impl RateLimitState {
    #[must_use]
    pub fn new(route: LimitedRoute, max_requests: usize, window: Duration) -> Self {
        Self {
            route,
            max_requests,
            window,
            clients: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    #[must_use]
    pub fn per_minute(route: LimitedRoute, max_requests: usize) -> Self {
        Self::new(route, max_requests, Duration::from_secs(60))
    }

    /// Counts one request for `client`; `false` once its window is used up.
    async fn admit(&self, client: &str) -> bool {
        let now = Instant::now();
        let mut clients = self.clients.lock().await;

        if clients.len() >= CLIENT_SWEEP_THRESHOLD {
            clients.retain(|_, w| now.duration_since(w.started_at) < self.window);
        }

        let window = clients.entry(client.to_string()).or_insert(ClientWindow {
            started_at: now,
            count: 0,
        });
        if now.duration_since(window.started_at) >= self.window {
            window.started_at = now;
            window.count = 0;
        }
        if window.count >= self.max_requests {
            return false;
        }
        window.count += 1;
        true
    }
}

/// Peer address of the connection, or `"unknown"` when the server was not
/// started with connect info.
fn client_key(req: &Request) -> String {
    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map_or_else(|| "unknown".to_string(), |ci| ci.0.ip().to_string())
}

fn accepted_request_id(value: &HeaderValue) -> Option<String> {
    let id = value.to_str().ok()?;
    let well_formed = !id.is_empty()
        && id.len() <= MAX_REQUEST_ID_LEN
        && id.bytes().all(|b| b.is_ascii_graphic());
    well_formed.then(|| id.to_string())
}

/// Axum middleware that extracts or generates a request ID.
///
/// A caller-supplied `x-request-id` is kept when it is at most 64 visible
/// ASCII characters; anything else is replaced by a fresh `UUIDv4`. The ID is
/// stored as a [`RequestId`] extension and echoed on the response.
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(accepted_request_id)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    req.extensions_mut().insert(RequestId(id.clone()));

    let mut res = next.run(req).await;

    if let Ok(val) = HeaderValue::from_str(&id) {
        res.headers_mut().insert(REQUEST_ID_HEADER, val);
    }

    res
}

/// Rejects requests over the per-client limit with the route's own 429 body.
pub async fn enforce_rate_limit(
    State(limiter): State<RateLimitState>,
    req: Request,
    next: Next,
) -> Response {
    let client = client_key(&req);
    if limiter.admit(&client).await {
        return next.run(req).await;
    }

    tracing::warn!(
        route = ?limiter.route,
        client = %client,
        max_requests = limiter.max_requests,
        "rate limit exceeded"
    );
    let request_id = req
        .extensions()
        .get::<RequestId>()
        .map(|r| r.0.clone())
        .unwrap_or_default();
    limiter.route.too_many_requests(request_id)
}
