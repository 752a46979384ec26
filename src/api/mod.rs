// ============================================================================
// API MODULE - Endpoint routing
// ============================================================================

pub mod contact;
pub mod verify;

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use crate::state::AppState;

pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/contact", post(contact::relay_contact))
        .route("/health", get(health_check))
}

/// Basic liveness probe
async fn health_check() -> impl IntoResponse {
    let health = serde_json::json!({
        "status": "healthy",
        "service": "krowz_ws",
    });

    (StatusCode::OK, Json(health))
}
