//! # Application State
//!
//! Shared state for the Axum application.
//! Holds the relay facade and server configuration.

use relay_core::{BoxedPaymentProvider, PaymentRelay, RelayConfig, RelayError};
use relay_stripe::StripeClient;
use std::net::{AddrParseError, SocketAddr};
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    pub const DEFAULT_HOST: &'static str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 10000;

    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| Self::DEFAULT_HOST.to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(Self::DEFAULT_PORT),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: Self::DEFAULT_HOST.to_string(),
            port: Self::DEFAULT_PORT,
            environment: "development".to_string(),
        }
    }
}

/// Load the facade configuration from environment variables.
///
/// Required: `STRIPE_PRICE_ID`. Optional: `MAPBOX_TOKEN`.
pub fn relay_config_from_env() -> Result<RelayConfig, RelayError> {
    dotenvy::dotenv().ok();

    relay_config_from_lookup(|key| std::env::var(key).ok())
}

/// Same as [`relay_config_from_env`], reading values through `lookup`.
pub fn relay_config_from_lookup(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<RelayConfig, RelayError> {
    let price_id = lookup("STRIPE_PRICE_ID")
        .ok_or_else(|| RelayError::Configuration("STRIPE_PRICE_ID not set".to_string()))?;
    let map_token = lookup("MAPBOX_TOKEN");

    Ok(RelayConfig::new(price_id, map_token))
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Relay facade
    pub relay: Arc<PaymentRelay>,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState backed by Stripe
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();
        let relay_config = relay_config_from_env()?;

        let stripe = StripeClient::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize Stripe: {}", e))?;

        Ok(Self::with_provider(config, relay_config, Arc::new(stripe)))
    }

    /// Assemble state from explicit parts
    pub fn with_provider(
        config: AppConfig,
        relay_config: RelayConfig,
        provider: BoxedPaymentProvider,
    ) -> Self {
        Self {
            relay: Arc::new(PaymentRelay::new(provider, relay_config)),
            config,
        }
    }
}
