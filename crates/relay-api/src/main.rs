//! # sub-relay
//!
//! Subscription and map-token relay in front of Stripe.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export STRIPE_SECRET_KEY=sk_test_...
//! export STRIPE_PRICE_ID=price_...
//! export MAPBOX_TOKEN=pk.ey...
//!
//! # Run the server
//! sub-relay
//! ```

use relay_api::{routes, state::AppState};
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

    print_banner();

    let state = AppState::new()?;

    let addr = state.config.socket_addr()?;
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Payment provider: {}", state.relay.provider_name());
    if state.relay.config().map_token.is_none() {
        info!("MAPBOX_TOKEN not set, /map-token will answer null");
    }

    let app = routes::create_router(state);

    info!("sub-relay starting on http://{}", addr);

    if !is_prod {
        info!("Verify: POST http://{}/verify-subscription", addr);
        info!("Checkout: POST http://{}/create-checkout-session", addr);
        info!("Map token: GET http://{}/map-token", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  sub-relay
  ━━━━━━━━━━━━━━━━━━━━━━━
  Stripe subscription relay
  Version: {}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
