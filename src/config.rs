//! Configuration management for the Krowz web service

use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub email: EmailConfig,
    pub redemption: RedemptionConfig,
    pub app: AppConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Base URL of the transactional email provider.
    pub api_url: String,
    /// Provider credential. Absence is reported per request, never at startup.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Destination inbox for contact submissions.
    pub to_email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedemptionConfig {
    /// Base URL of the external database service hosting `consume_redemption`.
    pub rpc_url: String,
    #[serde(skip_serializing)]
    pub api_key: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub port: u16,
    pub environment: String,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            email: EmailConfig {
                api_url: env::var("EMAIL_API_URL")
                    .unwrap_or_else(|_| "https://api.resend.com".to_string()),
                api_key: env::var("RESEND_API_KEY").ok(),
                to_email: env::var("CONTACT_TO_EMAIL")
                    .unwrap_or_else(|_| "hello@krowz.ca".to_string()),
            },
            redemption: RedemptionConfig {
                rpc_url: env::var("SUPABASE_URL")
                    .unwrap_or_else(|_| "http://localhost:54321".to_string()),
                api_key: env::var("SUPABASE_ANON_KEY").unwrap_or_else(|_| String::new()),
                timeout_seconds: env::var("REDEMPTION_RPC_TIMEOUT_SECONDS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()?,
            },
            app: AppConfig {
                port: env::var("PORT").unwrap_or_else(|_| "8000".to_string()).parse()?,
                environment: env::var("ENVIRONMENT")
                    .unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            },
        })
    }

    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }
}
