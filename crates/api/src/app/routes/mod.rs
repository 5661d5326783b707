use axum::Router;

pub mod eoq;
pub mod movements;
pub mod products;
pub mod reports;
pub mod system;

/// Router for all API endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/products", products::router())
        .nest("/movements", movements::router())
        .nest("/reports", reports::router())
        .nest("/eoq", eoq::router())
}
