//! # Checkout Types
//!
//! Inbound checkout request, the outbound subscription checkout order,
//! and the provider-issued session.

use serde::{Deserialize, Serialize};

/// Body of `POST /create-checkout-session`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Customer email to prefill; passed through unmodified
    #[serde(default)]
    pub email: Option<String>,
}

/// Checkout mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutMode {
    /// Recurring subscription
    Subscription,
}

impl CheckoutMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutMode::Subscription => "subscription",
        }
    }
}

/// A line item referencing a provider-side price
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceLineItem {
    /// Provider price id (price_...)
    pub price: String,
    pub quantity: u32,
}

/// Outbound checkout order handed to the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionCheckout {
    pub mode: CheckoutMode,
    pub payment_method_types: Vec<String>,
    pub line_items: Vec<PriceLineItem>,
    pub customer_email: Option<String>,
    pub success_url: String,
    pub cancel_url: String,
}

impl SubscriptionCheckout {
    /// Card-paid subscription for a single unit of `price_id`
    pub fn single_price(
        price_id: impl Into<String>,
        customer_email: Option<String>,
        success_url: impl Into<String>,
        cancel_url: impl Into<String>,
    ) -> Self {
        Self {
            mode: CheckoutMode::Subscription,
            payment_method_types: vec!["card".to_string()],
            line_items: vec![PriceLineItem {
                price: price_id.into(),
                quantity: 1,
            }],
            customer_email,
            success_url: success_url.into(),
            cancel_url: cancel_url.into(),
        }
    }
}

/// Provider-issued checkout session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Hosted checkout page to redirect the end user to
    pub checkout_url: String,
}
