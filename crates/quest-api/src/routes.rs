//! # Routes
//!
//! Axum router configuration for the checkout proxy.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - GET  /api/ping - Health check
/// - POST /api/checkout - Create checkout session
/// - GET  /api/products - List active products
/// - GET  /api/products/{id} - Get product by ID
pub fn create_router(state: AppState) -> Router {
    // The checkout endpoint is called cross-origin from the site pages,
    // so all origins are permitted.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/ping", get(handlers::ping))
        .route("/checkout", post(handlers::create_checkout))
        .route("/products", get(handlers::list_products))
        .route("/products/{product_id}", get(handlers::get_product));

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
