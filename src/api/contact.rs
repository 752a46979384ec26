// ============================================================================
// CONTACT ENDPOINT - Relay form submissions to the email provider
// ============================================================================

use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::info;

use crate::{
    error::AppError,
    models::contact::{ContactRequest, ContactResponse},
    state::AppState,
};

/// Relay a contact submission
///
/// # Endpoint
/// POST /api/contact
///
/// # Request Body
/// ```json
/// {
///   "type": "business",
///   "name": "Maple Diner",
///   "email": "owner@maple.ca",
///   "message": "Interested in listing deals."
/// }
/// ```
///
/// # Returns
/// - 200 OK: `{"ok":true,"id":...}` with the provider's message id
/// - 400 Bad Request: any of the four fields absent or empty
/// - 405 Method Not Allowed: non-POST methods (method routing)
/// - 500 Internal Server Error: missing credential or provider failure
pub async fn relay_contact(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, AppError> {
    let submission = payload
        .into_submission()
        .map_err(|_| AppError::MissingFields)?;

    info!(
        "relaying contact submission: type={} name={}",
        submission.kind.as_str(),
        submission.name
    );

    let receipt = state.email.send(&submission).await?;

    Ok(Json(ContactResponse {
        ok: true,
        id: Some(receipt.id),
    }))
}
