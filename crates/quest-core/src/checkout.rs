//! # Checkout Service
//!
//! The single operation of this system: take a purchase request, resolve
//! or synthesize the customer identity, and delegate to the billing
//! platform, returning either a redirect URL or an "already attached"
//! acknowledgment.
//!
//! The service holds no state between requests. The only side effect is
//! the outbound attach call, so the operation is naturally atomic: a
//! failure leaves nothing to roll back.

use crate::billing::{AttachRequest, BoxedBillingProvider};
use crate::customer::anonymous_customer_id;
use crate::error::{CheckoutError, CheckoutResult};
use serde::Deserialize;
use tracing::{info, instrument};

/// Configuration for the checkout service.
///
/// Passed explicitly into the constructor rather than read from ambient
/// globals, so the service can be constructed in tests with any base URL.
#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    /// Public base URL of the site, used to build default success URLs
    pub base_url: String,
}

impl CheckoutConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Default success URL for a product: `<base-url>/success?product=<id>`
    pub fn default_success_url(&self, product_id: &str) -> String {
        format!("{}/success?product={}", self.base_url, product_id)
    }
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}

/// A purchase request as received from the caller.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckoutRequest {
    /// Product to purchase; required
    pub product_id: Option<String>,
    /// Existing customer identity; synthesized when absent
    pub customer_id: Option<String>,
    /// Overrides the default success URL
    pub success_url: Option<String>,
    /// Accepted for forward compatibility; the attach payload has no
    /// cancel field, so it is not forwarded
    pub cancel_url: Option<String>,
}

impl CheckoutRequest {
    /// Minimal request for a product (anonymous customer, default URLs)
    pub fn for_product(product_id: impl Into<String>) -> Self {
        Self {
            product_id: Some(product_id.into()),
            ..Self::default()
        }
    }
}

/// Result of a successful checkout request.
///
/// Both variants carry the resolved customer identifier so the caller can
/// correlate the success page with the same identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The caller should redirect the browser to `url`
    Redirect { url: String, customer_id: String },
    /// The product was already attached; no payment needed
    Attached { customer_id: String },
}

impl CheckoutOutcome {
    pub fn customer_id(&self) -> &str {
        match self {
            CheckoutOutcome::Redirect { customer_id, .. } => customer_id,
            CheckoutOutcome::Attached { customer_id } => customer_id,
        }
    }
}

/// Stateless checkout service over an injected billing provider.
#[derive(Clone)]
pub struct CheckoutService {
    provider: BoxedBillingProvider,
    config: CheckoutConfig,
}

impl CheckoutService {
    pub fn new(provider: BoxedBillingProvider, config: CheckoutConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &CheckoutConfig {
        &self.config
    }

    /// Create a checkout session for the requested product.
    ///
    /// Fails fast with a validation error when `product_id` is missing;
    /// the billing platform is never contacted in that case. All other
    /// failures come from the attach delegation and are terminal for the
    /// request (no retry here).
    #[instrument(skip(self, request), fields(product_id = request.product_id.as_deref().unwrap_or("")))]
    pub async fn create_checkout(&self, request: CheckoutRequest) -> CheckoutResult<CheckoutOutcome> {
        let product_id = request
            .product_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| CheckoutError::Validation("Product ID is required".to_string()))?;

        let customer_id = request
            .customer_id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(anonymous_customer_id);

        let success_url = request
            .success_url
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| self.config.default_success_url(&product_id));

        info!(
            "Creating checkout: product={}, customer={}, success_url={}",
            product_id, customer_id, success_url
        );

        let outcome = self
            .provider
            .attach(&AttachRequest {
                customer_id: customer_id.clone(),
                product_id,
                success_url,
            })
            .await?;

        match outcome.checkout_url {
            Some(url) => {
                info!("Checkout session created: {}", url);
                Ok(CheckoutOutcome::Redirect { url, customer_id })
            }
            None => {
                info!("Product already attached to {}", customer_id);
                Ok(CheckoutOutcome::Attached { customer_id })
            }
        }
    }
}
