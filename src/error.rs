//! Error handling for the web service
//!
//! Every failure is converted to a user-facing terminal state at the
//! boundary of the component that made the external call. The wire shape
//! is a bare `{"error": string}`; provider internals stay in the logs.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A required field was absent or empty. Caught before any external call.
    #[error("Missing fields")]
    MissingFields,

    /// A required secret is not configured. The secret's value is never exposed.
    #[error("{0}")]
    Configuration(String),

    /// The email provider reported a failure; only its message string is surfaced.
    #[error("{0}")]
    EmailProvider(String),

    #[error("Server error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingFields => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::EmailProvider(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let AppError::Internal(ref source) = self {
            tracing::error!("unexpected error: {:#}", source);
        } else {
            tracing::error!("API error ({}): {}", status, self);
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
