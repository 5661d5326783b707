//! Standalone EOQ calculators with caller-supplied parameters.

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/basic", post(compute_basic))
        .route("/shortages", post(compute_shortages))
}

pub async fn compute_basic(Json(body): Json<dto::BasicEoqRequest>) -> axum::response::Response {
    match restock_eoq::basic(body.demand, body.order_cost, body.holding_cost) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => errors::engine_error_to_response(e),
    }
}

pub async fn compute_shortages(
    Json(body): Json<dto::ShortageEoqRequest>,
) -> axum::response::Response {
    match restock_eoq::with_shortages(
        body.demand,
        body.order_cost,
        body.holding_cost,
        body.shortage_cost,
    ) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => errors::engine_error_to_response(e),
    }
}
