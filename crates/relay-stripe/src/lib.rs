//! # relay-stripe
//!
//! Stripe payment provider for sub-relay.
//!
//! `StripeClient` implements `relay_core::PaymentProvider` against two
//! Stripe endpoints:
//!
//! - `GET /v1/subscriptions` (customer + status filter)
//! - `POST /v1/checkout/sessions` (subscription mode, single price)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use relay_stripe::StripeClient;
//! use relay_core::{PaymentProvider, SubscriptionFilter};
//!
//! let client = StripeClient::from_env()?;
//! let subs = client
//!     .list_subscriptions(&SubscriptionFilter::active_for("cus_123"))
//!     .await?;
//! ```

mod checkout;
pub mod client;
pub mod config;
mod subscriptions;

// Re-exports
pub use client::StripeClient;
pub use config::StripeConfig;
