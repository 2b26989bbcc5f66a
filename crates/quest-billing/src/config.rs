//! # Billing Configuration
//!
//! Configuration for the billing platform client.
//! The secret key is loaded from environment variables.

use quest_core::CheckoutError;
use std::env;

const DEFAULT_API_BASE_URL: &str = "https://api.useautumn.com";

/// Billing platform API configuration
#[derive(Debug, Clone)]
pub struct BillingConfig {
    /// Secret API key
    pub secret_key: String,

    /// API base URL (overridable for testing/mocking)
    pub api_base_url: String,
}

impl BillingConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `BILLING_SECRET_KEY`
    ///
    /// Optional:
    /// - `BILLING_API_URL`
    pub fn from_env() -> Result<Self, CheckoutError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let secret_key = env::var("BILLING_SECRET_KEY").map_err(|_| {
            CheckoutError::Configuration("BILLING_SECRET_KEY not set".to_string())
        })?;

        if secret_key.trim().is_empty() {
            return Err(CheckoutError::Configuration(
                "BILLING_SECRET_KEY is empty".to_string(),
            ));
        }

        let api_base_url =
            env::var("BILLING_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        Ok(Self {
            secret_key,
            api_base_url,
        })
    }

    /// Create config with explicit values (for testing)
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.secret_key)
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}
