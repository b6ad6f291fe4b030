use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hardal_delivery::{messages, DeliveryQuote, QuoteOutcome, ValidationResult};
use serde::{Deserialize, Serialize};

use super::AppState;

/// Address fields as posted by the checkout form. Missing fields are empty.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CheckDeliveryRequest {
    #[serde(default)]
    address: String,
    #[serde(default)]
    city: String,
    #[serde(default)]
    postal_code: String,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CheckDeliveryResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    distance: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    distance_km: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    validation_result: Option<ValidationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    delivery_fee: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_delivery_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    full_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl CheckDeliveryResponse {
    fn failure(error: &str) -> (StatusCode, Self) {
        (
            StatusCode::BAD_REQUEST,
            Self {
                success: false,
                error: Some(error.to_string()),
                ..Self::default()
            },
        )
    }

    fn from_quote(quote: DeliveryQuote) -> (StatusCode, Self) {
        match quote.outcome {
            QuoteOutcome::Quoted => (
                StatusCode::OK,
                Self {
                    success: true,
                    distance: quote.distance_rounded(),
                    distance_km: quote.distance_km_display(),
                    validation_result: quote.validation,
                    delivery_fee: quote.fee,
                    is_delivery_available: Some(true),
                    message: Some(quote.message),
                    full_address: quote.formatted_address,
                    error: None,
                },
            ),
            QuoteOutcome::Rejected => (
                StatusCode::OK,
                Self {
                    success: true,
                    is_delivery_available: Some(false),
                    message: Some(quote.message),
                    full_address: quote.formatted_address,
                    ..Self::default()
                },
            ),
            QuoteOutcome::NotFound => (
                StatusCode::OK,
                Self {
                    success: false,
                    is_delivery_available: Some(false),
                    message: Some(quote.message),
                    ..Self::default()
                },
            ),
            QuoteOutcome::LookupFailed => Self::failure(&quote.message),
        }
    }
}

/// 429 body in the checkout's `{success, error}` shape.
pub(super) fn rate_limited() -> Response {
    let body = CheckDeliveryResponse {
        success: false,
        error: Some(messages::RATE_LIMITED.to_string()),
        ..CheckDeliveryResponse::default()
    };
    (StatusCode::TOO_MANY_REQUESTS, Json(body)).into_response()
}

pub(super) async fn check_delivery(
    State(state): State<AppState>,
    payload: Result<Json<CheckDeliveryRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(body) => body,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "rejected check-delivery body");
            let (status, body) = CheckDeliveryResponse::failure(messages::LOOKUP_FAILED);
            return (status, Json(body));
        }
    };

    let quote = state
        .engine
        .evaluate_delivery(&request.address, &request.city, &request.postal_code)
        .await;

    let (status, body) = CheckDeliveryResponse::from_quote(quote);
    (status, Json(body))
}
