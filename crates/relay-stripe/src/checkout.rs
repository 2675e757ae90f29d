//! # Stripe Checkout Sessions
//!
//! Form encoding for `POST /v1/checkout/sessions` and its response body.

use relay_core::{CheckoutSession, SubscriptionCheckout};
use serde::Deserialize;

/// Build form params for the Checkout Sessions API.
///
/// Stripe expects bracketed keys for nested arrays, e.g.
/// `line_items[0][price]`.
pub(crate) fn checkout_form(checkout: &SubscriptionCheckout) -> Vec<(String, String)> {
    let mut form_params: Vec<(String, String)> = vec![
        ("mode".to_string(), checkout.mode.as_str().to_string()),
        ("success_url".to_string(), checkout.success_url.clone()),
        ("cancel_url".to_string(), checkout.cancel_url.clone()),
    ];

    for (i, method) in checkout.payment_method_types.iter().enumerate() {
        form_params.push((format!("payment_method_types[{}]", i), method.clone()));
    }

    for (i, item) in checkout.line_items.iter().enumerate() {
        form_params.push((format!("line_items[{}][price]", i), item.price.clone()));
        form_params.push((
            format!("line_items[{}][quantity]", i),
            item.quantity.to_string(),
        ));
    }

    if let Some(ref email) = checkout.customer_email {
        form_params.push(("customer_email".to_string(), email.clone()));
    }

    form_params
}

#[derive(Debug, Deserialize)]
pub(crate) struct StripeCheckoutSessionResponse {
    pub id: String,
    pub url: String,
}

impl From<StripeCheckoutSessionResponse> for CheckoutSession {
    fn from(response: StripeCheckoutSessionResponse) -> Self {
        CheckoutSession {
            checkout_url: response.url,
        }
    }
}
