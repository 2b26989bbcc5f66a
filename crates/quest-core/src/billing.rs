//! # Billing Provider Trait
//!
//! The seam between the checkout service and the external billing
//! platform. The platform exposes exactly one capability we use: attach a
//! product to a customer, returning a hosted checkout URL when payment is
//! needed.
//!
//! Keeping the trait this narrow lets tests substitute a double that
//! returns canned responses or simulated failures without a network call.

use crate::error::CheckoutResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Payload for the billing platform's attach operation.
///
/// The product id is forwarded raw; the platform validates it against its
/// own copy of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttachRequest {
    /// Customer to attach the product to (caller-supplied or synthesized)
    pub customer_id: String,
    /// Product identifier
    pub product_id: String,
    /// Where the platform redirects after successful payment
    pub success_url: String,
}

/// Result of an attach call.
///
/// A present `checkout_url` means the customer must complete payment at
/// the hosted page; an absent one means the product was already attached
/// and no payment is needed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AttachOutcome {
    #[serde(default)]
    pub checkout_url: Option<String>,
}

/// Trait for billing platform implementations.
#[async_trait]
pub trait BillingProvider: Send + Sync {
    /// Attach a product to a customer, creating a checkout session if
    /// payment is required.
    async fn attach(&self, request: &AttachRequest) -> CheckoutResult<AttachOutcome>;
}

/// Type alias for a shared billing provider (dynamic dispatch)
pub type BoxedBillingProvider = Arc<dyn BillingProvider>;
