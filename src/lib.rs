use axum::{
    extract::DefaultBodyLimit,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::compression::{predicate::SizeAbove, CompressionLayer};
use tower_http::trace::TraceLayer;

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod pages;
pub mod services;
pub mod state;

use middleware::{get_cors_layer, response_headers_middleware};
use state::AppState;

use axum::middleware as axum_middleware;

pub fn create_app_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        // Landing page with the contact section
        .route("/", get(pages::landing))
        // Staff verify page keyed by the opaque QR token
        .route(
            "/r/:token",
            get(api::verify::verify_page).post(api::verify::redeem),
        )
        // API endpoints
        .merge(api::create_api_router())
        .with_state(app_state)
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(
            CompressionLayer::new()
                .gzip(true)
                .br(false)
                .deflate(true)
                .compress_when(SizeAbove::new(1024)),
        )
        .layer(TraceLayer::new_for_http())
        .layer(get_cors_layer())
        .layer(axum_middleware::from_fn(response_headers_middleware))
}
