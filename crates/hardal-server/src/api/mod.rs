mod cart;
mod delivery;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use hardal_delivery::DeliveryEngine;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{enforce_rate_limit, request_id, RateLimitState, RequestId};

/// Endpoints behind the rate limiter. Each answers 429 in its own format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitedRoute {
    CheckDelivery,
    CartTotals,
}

impl LimitedRoute {
    pub(crate) fn too_many_requests(self, request_id: String) -> Response {
        match self {
            LimitedRoute::CheckDelivery => delivery::rate_limited(),
            LimitedRoute::CartTotals => {
                ApiError::new(request_id, "rate_limited", "rate limit exceeded").into_response()
            }
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<DeliveryEngine>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    delivery_city: String,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.error.code.as_str() {
            "validation_error" => StatusCode::BAD_REQUEST,
            "rate_limited" => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-request-id")])
}

/// Routes that cost a geocoding call or parse a client-supplied cart, each
/// with its own per-client window.
fn limited_router(requests_per_minute: usize) -> Router<AppState> {
    let check_delivery = Router::new()
        .route("/api/check-delivery", post(delivery::check_delivery))
        .layer(axum::middleware::from_fn_with_state(
            RateLimitState::per_minute(LimitedRoute::CheckDelivery, requests_per_minute),
            enforce_rate_limit,
        ));
    let cart_totals = Router::new()
        .route("/api/cart-totals", post(cart::cart_totals))
        .layer(axum::middleware::from_fn_with_state(
            RateLimitState::per_minute(LimitedRoute::CartTotals, requests_per_minute),
            enforce_rate_limit,
        ));

    check_delivery.merge(cart_totals)
}

pub fn build_app(state: AppState, requests_per_minute: usize) -> Router {
    let public_routes = Router::new().route("/api/health", get(health));

    Router::new()
        .merge(public_routes)
        .merge(limited_router(requests_per_minute))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    Json(ApiResponse {
        data: HealthData {
            status: "ok",
            delivery_city: state.engine.area().zone.city.clone(),
        },
        meta: ResponseMeta::new(req_id.0),
    })
}
