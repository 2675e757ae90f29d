//! # relay-core
//!
//! Core types and traits for the sub-relay payment facade.
//!
//! This crate provides:
//! - `PaymentProvider` trait for the external billing API
//! - `PaymentRelay`, the facade behind the three HTTP endpoints
//! - `RelayConfig` and `RedirectUrls` for startup configuration
//! - `RelayError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use relay_core::{PaymentRelay, RelayConfig, SubscriptionQuery};
//!
//! let relay = PaymentRelay::new(provider, RelayConfig::new("price_123", None));
//!
//! let status = relay
//!     .verify_subscription(&SubscriptionQuery { customer_id: "cus_123".into() })
//!     .await?;
//! ```

pub mod checkout;
pub mod config;
pub mod error;
pub mod facade;
pub mod provider;
pub mod subscription;

// Re-exports for convenience
pub use checkout::{
    CheckoutMode, CheckoutRequest, CheckoutSession, PriceLineItem, SubscriptionCheckout,
};
pub use config::{RedirectUrls, RelayConfig};
pub use error::{RelayError, RelayResult};
pub use facade::{PaymentRelay, TokenResponse};
pub use provider::{BoxedPaymentProvider, PaymentProvider};
pub use subscription::{
    Subscription, SubscriptionFilter, SubscriptionQuery, SubscriptionState, SubscriptionStatus,
};
