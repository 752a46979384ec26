use crate::config::Config;
use crate::services::{ConsumeRedemption, EmailService, RpcRedemptionClient};
use anyhow::Context;
use reqwest::Client as ReqwestClient;
use std::sync::Arc;
use std::time::Duration;

/// Shared application state: configuration, the email relay, and the
/// redemption backend behind its trait so tests can swap in a double.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub email: EmailService,
    pub redemption: Arc<dyn ConsumeRedemption>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let redemption: Arc<dyn ConsumeRedemption> =
            Arc::new(RpcRedemptionClient::new(&config.redemption)?);
        Self::with_redemption(config, redemption)
    }

    /// Build state around an alternate redemption backend.
    pub fn with_redemption(
        config: Config,
        redemption: Arc<dyn ConsumeRedemption>,
    ) -> anyhow::Result<Self> {
        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to build HTTP client")?;

        let email = EmailService::new(http_client, config.email.clone());

        Ok(AppState {
            config,
            email,
            redemption,
        })
    }
}
