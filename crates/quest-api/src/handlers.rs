//! # Request Handlers
//!
//! Axum request handlers for the checkout proxy.
//! The wire format is camelCase JSON, matching what the site's pages send.

use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use quest_core::{CheckoutError, CheckoutOutcome, CheckoutRequest};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Checkout request body.
///
/// `productId` is optional on the wire so that a missing field reaches the
/// handler and yields the contract's 400 body instead of an extractor
/// rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutBody {
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub success_url: Option<String>,
    #[serde(default)]
    pub cancel_url: Option<String>,
}

impl From<CheckoutBody> for CheckoutRequest {
    fn from(body: CheckoutBody) -> Self {
        Self {
            product_id: body.product_id,
            customer_id: body.customer_id,
            success_url: body.success_url,
            cancel_url: body.cancel_url,
        }
    }
}

/// Successful checkout response
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CheckoutResponse {
    /// Redirect the browser to `url`
    Redirect {
        url: String,
        #[serde(rename = "customerId")]
        customer_id: String,
    },
    /// No payment needed
    Attached {
        success: bool,
        message: &'static str,
        #[serde(rename = "customerId")]
        customer_id: String,
    },
}

impl From<CheckoutOutcome> for CheckoutResponse {
    fn from(outcome: CheckoutOutcome) -> Self {
        match outcome {
            CheckoutOutcome::Redirect { url, customer_id } => {
                CheckoutResponse::Redirect { url, customer_id }
            }
            CheckoutOutcome::Attached { customer_id } => CheckoutResponse::Attached {
                success: true,
                message: "Product attached",
                customer_id,
            },
        }
    }
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

fn checkout_error_to_response(err: CheckoutError) -> (StatusCode, Json<ErrorBody>) {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = match err {
        CheckoutError::Validation(msg) => ErrorBody::new(msg),
        CheckoutError::Upstream(details) => {
            ErrorBody::new("Failed to create checkout session").with_details(details)
        }
        CheckoutError::Configuration(details) => {
            ErrorBody::new("Failed to create checkout session").with_details(details)
        }
    };
    (status, Json(body))
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn ping() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": format!("Pong! {}", Utc::now().timestamp_millis())
    }))
}

/// Create a checkout session
#[instrument(skip(state, body), fields(product_id = body.product_id.as_deref().unwrap_or("")))]
pub async fn create_checkout(
    State(state): State<AppState>,
    Json(body): Json<CheckoutBody>,
) -> Result<Json<CheckoutResponse>, (StatusCode, Json<ErrorBody>)> {
    let outcome = state
        .checkout
        .create_checkout(body.into())
        .await
        .map_err(|e| {
            error!("Checkout failed: {}", e);
            checkout_error_to_response(e)
        })?;

    info!("Checkout resolved for customer {}", outcome.customer_id());

    Ok(Json(outcome.into()))
}

/// List active products
pub async fn list_products(State(state): State<AppState>) -> impl IntoResponse {
    let products: Vec<_> = state.catalog.active_products().collect();
    Json(serde_json::json!({
        "products": products,
        "count": products.len()
    }))
}

/// Get single product
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorBody>)> {
    let product = state.catalog.get(&product_id).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorBody::new(format!("Product not found: {}", product_id))),
        )
    })?;

    Ok(Json(product.clone()))
}
