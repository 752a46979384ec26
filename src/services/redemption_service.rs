// ============================================================================
// REDEMPTION SERVICE - Client for the remote consume_redemption procedure
// ============================================================================
//
// The procedure is an external collaborator: it decides expiry, monthly
// limits and idempotency, and records the redemption. This client only
// speaks its observed contract (token in, discriminated outcome out).

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

use crate::{config::RedemptionConfig, models::redemption::RedeemOutcome};

/// The single operation the external database service exposes to this site.
///
/// Errors are transport-level only; application denials arrive as an
/// `ok:false` outcome. Callers map errors to a `server_error` denial so
/// the staff member always sees a terminal state.
#[async_trait]
pub trait ConsumeRedemption: Send + Sync {
    async fn consume(&self, token: &str) -> anyhow::Result<RedeemOutcome>;
}

#[derive(Debug, Clone)]
pub struct RpcRedemptionClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RpcRedemptionClient {
    pub fn new(config: &RedemptionConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.rpc_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl ConsumeRedemption for RpcRedemptionClient {
    async fn consume(&self, token: &str) -> anyhow::Result<RedeemOutcome> {
        let url = format!("{}/rest/v1/rpc/consume_redemption", self.base_url);
        debug!("invoking consume_redemption");

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .json(&json!({ "p_token": token }))
            .send()
            .await
            .context("consume_redemption request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("consume_redemption returned status {}: {}", status, body);
        }

        response
            .json::<RedeemOutcome>()
            .await
            .context("consume_redemption returned an unreadable result")
    }
}
