//! # Stripe Client
//!
//! `PaymentProvider` implementation over Stripe's REST API.

use crate::checkout::{checkout_form, StripeCheckoutSessionResponse};
use crate::config::StripeConfig;
use crate::subscriptions::{list_query, SubscriptionList};
use async_trait::async_trait;
use relay_core::{
    CheckoutSession, PaymentProvider, RelayError, RelayResult, Subscription, SubscriptionCheckout,
    SubscriptionFilter,
};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Stripe API client
pub struct StripeClient {
    config: StripeConfig,
    client: Client,
}

impl StripeClient {
    /// Create a new Stripe client
    pub fn new(config: StripeConfig) -> RelayResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| RelayError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> RelayResult<Self> {
        Self::new(StripeConfig::from_env()?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("Authorization", self.config.auth_header())
            .header("Stripe-Version", &self.config.api_version)
    }

    /// Send the request and decode a 2xx body, or surface Stripe's error message.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> RelayResult<T> {
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("Stripe API error: status={}, body={}", status, body);

            let message = match serde_json::from_str::<StripeErrorResponse>(&body) {
                Ok(error_response) => error_response.error.message,
                Err(_) => format!("HTTP {}: {}", status, body),
            };

            return Err(RelayError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            RelayError::Serialization(format!("Failed to parse Stripe response: {}", e))
        })
    }
}

#[async_trait]
impl PaymentProvider for StripeClient {
    #[instrument(skip(self, filter))]
    async fn list_subscriptions(
        &self,
        filter: &SubscriptionFilter,
    ) -> RelayResult<Vec<Subscription>> {
        let request = self
            .client
            .get(self.url("/v1/subscriptions"))
            .query(&list_query(filter));

        let list: SubscriptionList = self.send(request).await?;

        debug!(
            "Listed Stripe subscriptions: count={}, has_more={}",
            list.data.len(),
            list.has_more
        );

        Ok(list.data)
    }

    #[instrument(skip(self, checkout), fields(mode = checkout.mode.as_str()))]
    async fn create_checkout(
        &self,
        checkout: &SubscriptionCheckout,
    ) -> RelayResult<CheckoutSession> {
        let request = self
            .client
            .post(self.url("/v1/checkout/sessions"))
            .form(&checkout_form(checkout));

        let session: StripeCheckoutSessionResponse = self.send(request).await?;

        info!(
            "Created Stripe checkout session: id={}, url={}",
            session.id, session.url
        );

        Ok(session.into())
    }

    fn provider_name(&self) -> &'static str {
        "stripe"
    }
}

// =============================================================================
// Stripe API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct StripeErrorResponse {
    error: StripeError,
}

#[derive(Debug, Deserialize)]
struct StripeError {
    message: String,
}
