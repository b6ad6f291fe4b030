use axum::{
    extract::rejection::JsonRejection, response::IntoResponse, Extension, Json,
};
use hardal_core::{calculate_cart_totals, CartPayload, CartTotals};
use serde::Serialize;

use super::{ApiError, ApiResponse, ResponseMeta};
use crate::middleware::RequestId;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CartTotalsData {
    sub_total: String,
    total_price: String,
    extras_total: String,
}

impl From<CartTotals> for CartTotalsData {
    fn from(totals: CartTotals) -> Self {
        Self {
            sub_total: CartTotals::display(totals.sub_total),
            total_price: CartTotals::display(totals.total_price),
            extras_total: CartTotals::display(totals.extras_total),
        }
    }
}

pub(super) async fn cart_totals(
    Extension(req_id): Extension<RequestId>,
    payload: Result<Json<CartPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejected cart payload");
        ApiError::new(
            req_id.0.clone(),
            "validation_error",
            rejection.body_text(),
        )
    })?;

    let totals = calculate_cart_totals(&payload);

    Ok(Json(ApiResponse {
        data: CartTotalsData::from(totals),
        meta: ResponseMeta::new(req_id.0),
    }))
}
