//! # Payment Provider Trait
//!
//! Seam between the relay facade and the external billing API.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   PaymentProvider (trait)                   │
//! │  ├── list_subscriptions()                                   │
//! │  ├── create_checkout()                                      │
//! │  └── provider_name()                                        │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!                    ┌───────┴───────┐
//!                    │ StripeClient  │
//!                    └───────────────┘
//! ```

use crate::checkout::{CheckoutSession, SubscriptionCheckout};
use crate::error::RelayResult;
use crate::subscription::{Subscription, SubscriptionFilter};
use async_trait::async_trait;
use std::sync::Arc;

/// Outbound operations the relay needs from a payment provider.
///
/// Each call maps to exactly one request against the provider. Failures of
/// any kind come back as a `RelayError` and are never retried.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// List subscriptions matching `filter`.
    async fn list_subscriptions(
        &self,
        filter: &SubscriptionFilter,
    ) -> RelayResult<Vec<Subscription>>;

    /// Create a hosted checkout session and return its redirect URL.
    ///
    /// Not idempotent: every call creates a new session.
    async fn create_checkout(&self, checkout: &SubscriptionCheckout)
        -> RelayResult<CheckoutSession>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a boxed payment provider (dynamic dispatch)
pub type BoxedPaymentProvider = Arc<dyn PaymentProvider>;
