//! # Checkout Error Types
//!
//! Typed error handling for the checkout proxy.
//! All checkout operations return `Result<T, CheckoutError>`.

use thiserror::Error;

/// Core error type for checkout operations
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Caller input missing or malformed. Never reaches the billing platform.
    #[error("{0}")]
    Validation(String),

    /// The billing platform call failed (network error, rejected request,
    /// invalid credentials, unknown product on the platform's side).
    #[error("Failed to create checkout session: {0}")]
    Upstream(String),

    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CheckoutError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            CheckoutError::Validation(_) => 400,
            CheckoutError::Upstream(_) => 500,
            CheckoutError::Configuration(_) => 500,
        }
    }

    /// The underlying message, without the error-class prefix.
    pub fn detail(&self) -> &str {
        match self {
            CheckoutError::Validation(msg) => msg,
            CheckoutError::Upstream(msg) => msg,
            CheckoutError::Configuration(msg) => msg,
        }
    }
}

/// Result type alias for checkout operations
pub type CheckoutResult<T> = Result<T, CheckoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            CheckoutError::Validation("Product ID is required".into()).status_code(),
            400
        );
        assert_eq!(
            CheckoutError::Upstream("connection refused".into()).status_code(),
            500
        );
        assert_eq!(
            CheckoutError::Configuration("BILLING_SECRET_KEY not set".into()).status_code(),
            500
        );
    }

    #[test]
    fn test_validation_display_is_bare_message() {
        let err = CheckoutError::Validation("Product ID is required".into());
        assert_eq!(err.to_string(), "Product ID is required");
        assert_eq!(err.detail(), "Product ID is required");
    }

    #[test]
    fn test_upstream_detail() {
        let err = CheckoutError::Upstream("invalid api key".into());
        assert_eq!(err.detail(), "invalid api key");
        assert_eq!(
            err.to_string(),
            "Failed to create checkout session: invalid api key"
        );
    }
}
