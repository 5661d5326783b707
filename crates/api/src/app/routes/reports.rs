use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/low-stock", get(low_stock))
        .route("/out-of-stock", get(out_of_stock))
}

pub async fn low_stock(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.ledger.list_products().await {
        Ok(products) => {
            let rows = restock_reporting::low_stock(&products);
            (StatusCode::OK, Json(rows)).into_response()
        }
        Err(e) => errors::engine_error_to_response(e),
    }
}

pub async fn out_of_stock(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let products = match services.ledger.list_products().await {
        Ok(p) => p,
        Err(e) => return errors::engine_error_to_response(e),
    };
    let movements = match services.ledger.list_movements().await {
        Ok(m) => m,
        Err(e) => return errors::engine_error_to_response(e),
    };

    let rows = restock_reporting::out_of_stock(&products, &movements);
    (StatusCode::OK, Json(rows)).into_response()
}
