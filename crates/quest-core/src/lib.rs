//! # quest-core
//!
//! Core types and the checkout service for the Cosmic Soul Quest
//! checkout proxy.
//!
//! This crate provides:
//! - `BillingProvider` trait for the external billing platform
//! - `Product` and `ProductCatalog` for the product catalog
//! - `CheckoutService`, `CheckoutRequest`, and `CheckoutOutcome` for the
//!   checkout flow
//! - `CheckoutError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use quest_core::{CheckoutConfig, CheckoutRequest, CheckoutService};
//!
//! let service = CheckoutService::new(provider, CheckoutConfig::new("https://cosmicsoulquest.com"));
//!
//! let outcome = service
//!     .create_checkout(CheckoutRequest::for_product("academy_warrior"))
//!     .await?;
//!
//! // Redirect the browser to the checkout URL, or acknowledge the attach.
//! ```

pub mod billing;
pub mod checkout;
pub mod customer;
pub mod error;
pub mod product;

// Re-exports for convenience
pub use billing::{AttachOutcome, AttachRequest, BillingProvider, BoxedBillingProvider};
pub use checkout::{CheckoutConfig, CheckoutOutcome, CheckoutRequest, CheckoutService};
pub use customer::anonymous_customer_id;
pub use error::{CheckoutError, CheckoutResult};
pub use product::{PriceItem, Product, ProductCatalog, RecurringInterval};
