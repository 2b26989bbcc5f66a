//! # quest-billing
//!
//! Client for the external billing platform used by the Cosmic Soul Quest
//! checkout proxy.
//!
//! The platform is an opaque collaborator with one operation we consume:
//! attach a product to a customer. When payment is required the response
//! carries a hosted checkout URL; when the product is already attached it
//! does not.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use quest_billing::BillingClient;
//! use quest_core::{AttachRequest, BillingProvider};
//!
//! let client = BillingClient::from_env()?;
//!
//! let outcome = client
//!     .attach(&AttachRequest {
//!         customer_id: "anon_1700000000000_a1b2c3".into(),
//!         product_id: "academy_warrior".into(),
//!         success_url: "https://cosmicsoulquest.com/success?product=academy_warrior".into(),
//!     })
//!     .await?;
//!
//! // Redirect to outcome.checkout_url when present.
//! ```

pub mod client;
pub mod config;

// Re-exports
pub use client::BillingClient;
pub use config::BillingConfig;
