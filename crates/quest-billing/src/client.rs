//! # Billing API Client
//!
//! Implementation of the attach operation against the billing platform's
//! REST API. The platform creates the checkout session and manages
//! customer-to-product attachment; this client only forwards the request
//! and maps the response envelope.

use crate::config::BillingConfig;
use async_trait::async_trait;
use quest_core::{AttachOutcome, AttachRequest, BillingProvider, CheckoutError, CheckoutResult};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, info, instrument};

/// Billing platform client
///
/// Holds a pooled reqwest client; cheap to clone via the service layer's
/// `Arc`. One outbound call per checkout request, no retries here.
pub struct BillingClient {
    config: BillingConfig,
    client: Client,
}

impl BillingClient {
    /// Create a new billing client
    pub fn new(config: BillingConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Create from environment variables
    pub fn from_env() -> CheckoutResult<Self> {
        let config = BillingConfig::from_env()?;
        Ok(Self::new(config))
    }

    fn attach_url(&self) -> String {
        format!("{}/v1/attach", self.config.api_base_url)
    }
}

#[async_trait]
impl BillingProvider for BillingClient {
    #[instrument(skip(self, request), fields(product_id = %request.product_id))]
    async fn attach(&self, request: &AttachRequest) -> CheckoutResult<AttachOutcome> {
        debug!(
            "Attaching product {} to customer {}",
            request.product_id, request.customer_id
        );

        let response = self
            .client
            .post(self.attach_url())
            .header("Authorization", self.config.auth_header())
            .json(request)
            .send()
            .await
            .map_err(|e| CheckoutError::Upstream(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CheckoutError::Upstream(e.to_string()))?;

        if !status.is_success() {
            error!("Billing API error: status={}, body={}", status, body);

            if let Ok(err) = serde_json::from_str::<BillingErrorResponse>(&body) {
                return Err(CheckoutError::Upstream(err.message));
            }

            return Err(CheckoutError::Upstream(format!("HTTP {}: {}", status, body)));
        }

        let envelope: AttachEnvelope = serde_json::from_str(&body).map_err(|e| {
            CheckoutError::Upstream(format!("Failed to parse billing response: {}", e))
        })?;

        info!(
            "Attach succeeded: checkout_url={:?}",
            envelope.data.checkout_url
        );

        Ok(envelope.data)
    }
}

// =============================================================================
// Billing API Types
// =============================================================================

/// Response envelope: `{ "data": { "checkout_url": ... } }`
#[derive(Debug, Deserialize)]
struct AttachEnvelope {
    #[serde(default)]
    data: AttachOutcome,
}

#[derive(Debug, Deserialize)]
struct BillingErrorResponse {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> BillingClient {
        BillingClient::new(BillingConfig::new("am_sk_test_key").with_api_base_url(server.uri()))
    }

    fn attach_request() -> AttachRequest {
        AttachRequest {
            customer_id: "anon_1700000000000_a1b2c3d4e5f6".to_string(),
            product_id: "academy_warrior".to_string(),
            success_url: "https://cosmicsoulquest.com/success?product=academy_warrior"
                .to_string(),
        }
    }

    #[tokio::test]
    async fn test_attach_returns_checkout_url() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/attach"))
            .and(header("Authorization", "Bearer am_sk_test_key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": { "checkout_url": "https://billing.example/session/abc" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let outcome = client_for(&server).attach(&attach_request()).await.unwrap();
        assert_eq!(
            outcome.checkout_url.as_deref(),
            Some("https://billing.example/session/abc")
        );
    }

    #[tokio::test]
    async fn test_attach_without_checkout_url() {
        let server = MockServer::start().await;

        // Already attached: the platform returns an empty data object
        Mock::given(method("POST"))
            .and(path("/v1/attach"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": {} })),
            )
            .mount(&server)
            .await;

        let outcome = client_for(&server).attach(&attach_request()).await.unwrap();
        assert!(outcome.checkout_url.is_none());
    }

    #[tokio::test]
    async fn test_attach_forwards_payload_fields() {
        let server = MockServer::start().await;

        let expected = serde_json::json!({
            "customer_id": "anon_1700000000000_a1b2c3d4e5f6",
            "product_id": "academy_warrior",
            "success_url": "https://cosmicsoulquest.com/success?product=academy_warrior"
        });

        Mock::given(method("POST"))
            .and(path("/v1/attach"))
            .and(body_json(&expected))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": {} })),
            )
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server).attach(&attach_request()).await.unwrap();
    }

    #[tokio::test]
    async fn test_attach_api_error_maps_to_upstream() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/attach"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "message": "Product not found: mystery_box"
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .attach(&attach_request())
            .await
            .unwrap_err();

        assert!(matches!(err, CheckoutError::Upstream(_)));
        assert_eq!(err.detail(), "Product not found: mystery_box");
    }

    #[tokio::test]
    async fn test_attach_unparseable_error_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/attach"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .attach(&attach_request())
            .await
            .unwrap_err();

        assert!(err.detail().contains("503"));
        assert!(err.detail().contains("upstream unavailable"));
    }
}
