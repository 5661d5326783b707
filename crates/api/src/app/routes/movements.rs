use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use restock_core::ProductId;
use restock_inventory::NewMovement;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/", get(list_movements).post(create_movement))
}

/// Full movement history, newest first, resolved against current products.
pub async fn list_movements(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let movements = match services.ledger.list_movements().await {
        Ok(m) => m,
        Err(e) => return errors::engine_error_to_response(e),
    };
    let products = match services.ledger.list_products().await {
        Ok(p) => p,
        Err(e) => return errors::engine_error_to_response(e),
    };

    let rows = restock_reporting::movement_history(&movements, &products);
    (StatusCode::OK, Json(rows)).into_response()
}

pub async fn create_movement(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateMovementRequest>,
) -> axum::response::Response {
    let movement = NewMovement::new(
        ProductId::new(body.product_id),
        body.kind,
        body.quantity,
        body.reason,
        body.actor.unwrap_or_else(|| "Admin".to_string()),
    );

    match services.ledger.record_movement(movement).await {
        Ok((product, recorded)) => (
            StatusCode::CREATED,
            Json(serde_json::json!({
                "movement": recorded,
                "product": product,
            })),
        )
            .into_response(),
        Err(e) => errors::engine_error_to_response(e),
    }
}
