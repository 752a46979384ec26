// ============================================================================
// EMAIL SERVICE - Relay contact submissions to the transactional provider
// ============================================================================

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::{
    config::EmailConfig,
    error::{AppError, Result},
    models::contact::ContactSubmission,
};

/// Fixed sender identity. The domain is verified with the provider, so
/// mail goes out from it while replies flow to the submitter.
pub const SENDER: &str = "Krowz <no-reply@krowz.ca>";

#[derive(Debug, Clone)]
pub struct EmailService {
    client: Client,
    config: EmailConfig,
}

#[derive(Debug, Serialize)]
struct OutboundEmail<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    reply_to: &'a str,
    subject: String,
    text: String,
}

/// Provider acknowledgement of an accepted send.
#[derive(Debug, Deserialize)]
pub struct SendReceipt {
    pub id: String,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    message: Option<String>,
}

impl EmailService {
    pub fn new(client: Client, config: EmailConfig) -> Self {
        Self { client, config }
    }

    /// Forward one validated submission as a single email. No retry and no
    /// dedup: a resubmission sends a duplicate message.
    pub async fn send(&self, submission: &ContactSubmission) -> Result<SendReceipt> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            error!("RESEND_API_KEY is not configured");
            return Err(AppError::Configuration("Missing RESEND_API_KEY".to_string()));
        };

        let payload = OutboundEmail {
            from: SENDER,
            to: vec![self.config.to_email.as_str()],
            reply_to: &submission.email,
            subject: submission.subject(),
            text: submission.body(),
        };

        let url = format!("{}/emails", self.config.api_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!("email provider unreachable: {}", e);
                AppError::Internal(anyhow::Error::new(e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("email provider error (status {}): {}", status, body);

            let message = serde_json::from_str::<ProviderError>(&body)
                .ok()
                .and_then(|e| e.message)
                .unwrap_or_else(|| "Email send failed".to_string());
            return Err(AppError::EmailProvider(message));
        }

        let receipt: SendReceipt = response
            .json()
            .await
            .map_err(|e| AppError::Internal(anyhow::Error::new(e)))?;

        info!("contact submission relayed: id={}", receipt.id);
        Ok(receipt)
    }
}
