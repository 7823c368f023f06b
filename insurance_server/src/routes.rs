//! Router assembly.
use axum::Router;
use axum::http::Method;
use axum::routing::{get, post};
use insurance_common::net::{HEALTH_PATH, QUOTE_PATH};
use tower_http::cors::{Any, CorsLayer};

use crate::handlers::{health, quote};

/// Build the application router with permissive CORS, as the browser form is
/// served from a different origin than the API.
pub fn create_router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route(HEALTH_PATH, get(health))
        .route(QUOTE_PATH, post(quote))
        .layer(cors)
}
