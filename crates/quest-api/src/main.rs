//! # Cosmic Checkout
//!
//! Checkout proxy for the Cosmic Soul Quest site.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export BILLING_SECRET_KEY=am_sk_...
//! export BASE_URL=https://cosmicsoulquest.com
//!
//! # Run the server
//! cosmic-checkout
//! ```

use quest_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Initialize application state
    let state = AppState::new()?;

    let addr = state.config.socket_addr();
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Base URL: {}", state.config.base_url);
    info!("Products loaded: {}", state.catalog.len());

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("Cosmic Checkout starting on http://{}", addr);

    if !is_prod {
        info!("Health check: GET http://{}/api/ping", addr);
        info!("Checkout: POST http://{}/api/checkout", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
