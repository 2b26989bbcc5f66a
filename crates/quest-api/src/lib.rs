//! # quest-api
//!
//! HTTP API layer for cosmic-checkout-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - The checkout endpoint and product catalog endpoints
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/api/ping` | Health check |
//! | POST | `/api/checkout` | Create checkout session |
//! | GET | `/api/products` | List products |
//! | GET | `/api/products/:id` | Get product |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
