// ============================================================================
// VERIFY ENDPOINTS - Staff-side QR redemption page
// ============================================================================

use axum::{
    extract::{Path, State},
    response::Html,
};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::{
    models::redemption::{DenyReason, RedeemOutcome, VerifyFlow, VerifyPhase},
    pages,
    state::AppState,
};

/// Staff verify page, idle phase
///
/// # Endpoint
/// GET /r/:token
///
/// The token is opaque: extracted from the path and forwarded verbatim,
/// never generated or interpreted here.
pub async fn verify_page(Path(token): Path<String>) -> Html<String> {
    Html(pages::render_verify(&VerifyFlow::new(token)))
}

/// Redeem action
///
/// # Endpoint
/// POST /r/:token
///
/// Invokes the remote `consume_redemption` procedure once and renders the
/// terminal outcome. Transport failures render the same denial as a
/// remote-side `server_error`, so the staff member always lands on a
/// terminal state.
pub async fn redeem(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
) -> Html<String> {
    let mut flow = VerifyFlow::new(token);

    if let Err(e) = flow.begin() {
        warn!("redeem attempt rejected: {}", e);
        return Html(pages::render_verify(&flow));
    }

    let outcome = match state.redemption.consume(flow.token()).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("consume_redemption error: {:#}", e);
            RedeemOutcome::Denied(DenyReason::ServerError)
        }
    };

    flow.resolve(outcome);

    match flow.phase() {
        VerifyPhase::Approved => info!("redemption approved"),
        VerifyPhase::Denied(reason) => info!("redemption denied: {:?}", reason),
        _ => {}
    }

    Html(pages::render_verify(&flow))
}
