use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use restock_core::ProductId;
use restock_inventory::advisor;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/:id/order", post(order_product))
        .route("/:id/recommendation", get(get_recommendation))
        .route("/:id/eoq", get(get_product_eoq))
}

fn parse_id(id: &str) -> Result<ProductId, axum::response::Response> {
    id.parse().map_err(|_| {
        errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id")
    })
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.ledger.list_products().await {
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(e) => errors::engine_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.ledger.get_product(id).await {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(e) => errors::engine_error_to_response(e),
    }
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateProductRequest>,
) -> axum::response::Response {
    match services.ledger.create_product(body.into()).await {
        Ok(product) => (StatusCode::CREATED, Json(product)).into_response(),
        Err(e) => errors::engine_error_to_response(e),
    }
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateProductRequest>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let (patch, actor) = body.into_patch();
    match services.ledger.edit_product(id, patch, &actor).await {
        Ok((product, movement)) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "product": product,
                "adjustment": movement,
            })),
        )
            .into_response(),
        Err(e) => errors::engine_error_to_response(e),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.ledger.delete_product(id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "deleted": id })),
        )
            .into_response(),
        Err(e) => errors::engine_error_to_response(e),
    }
}

/// Execute a replenishment order. Without an explicit quantity the
/// advisor's recommended quantity is ordered.
pub async fn order_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Option<Json<dto::OrderRequest>>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let quantity = match body.and_then(|Json(b)| b.quantity) {
        Some(q) => q,
        None => {
            let product = match services.ledger.get_product(id).await {
                Ok(p) => p,
                Err(e) => return errors::engine_error_to_response(e),
            };
            match advisor::recommend(&product, &services.policy) {
                Ok(rec) => rec.recommended_quantity,
                Err(e) => return errors::engine_error_to_response(e),
            }
        }
    };

    match services.ledger.execute_order(id, quantity).await {
        Ok((product, movement)) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "product": product,
                "movement": movement,
            })),
        )
            .into_response(),
        Err(e) => errors::engine_error_to_response(e),
    }
}

pub async fn get_recommendation(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let product = match services.ledger.get_product(id).await {
        Ok(p) => p,
        Err(e) => return errors::engine_error_to_response(e),
    };
    match advisor::recommend(&product, &services.policy) {
        Ok(rec) => (StatusCode::OK, Json(rec)).into_response(),
        Err(e) => errors::engine_error_to_response(e),
    }
}

/// Both EOQ models evaluated for one product under the configured policy,
/// plus the numeric series the charts are drawn from.
pub async fn get_product_eoq(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let product = match services.ledger.get_product(id).await {
        Ok(p) => p,
        Err(e) => return errors::engine_error_to_response(e),
    };

    let policy = &services.policy;
    let holding_cost = policy.holding_cost(product.cost);
    let shortage_cost = policy.shortage_cost(product.price);

    let basic = match restock_eoq::basic(product.annual_demand, policy.order_cost, holding_cost) {
        Ok(r) => r,
        Err(e) => return errors::engine_error_to_response(e),
    };
    let shortages = match restock_eoq::with_shortages(
        product.annual_demand,
        policy.order_cost,
        holding_cost,
        shortage_cost,
    ) {
        Ok(r) => r,
        Err(e) => return errors::engine_error_to_response(e),
    };

    const SERIES_POINTS: usize = 50;
    let cost_curve = match restock_eoq::cost_curve(
        product.annual_demand,
        policy.order_cost,
        holding_cost,
        SERIES_POINTS,
    ) {
        Ok(s) => s,
        Err(e) => return errors::engine_error_to_response(e),
    };
    let cycle_profile = match restock_eoq::cycle_profile(
        product.annual_demand,
        policy.order_cost,
        holding_cost,
        SERIES_POINTS,
    ) {
        Ok(s) => s,
        Err(e) => return errors::engine_error_to_response(e),
    };

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "product_id": product.id,
            "basic": basic,
            "shortages": shortages,
            "series": {
                "cost_curve": cost_curve,
                "cycle_profile": cycle_profile,
            },
        })),
    )
        .into_response()
}
