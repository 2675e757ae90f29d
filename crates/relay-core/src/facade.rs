//! # Payment Relay Facade
//!
//! The three operations exposed over HTTP. Each is stateless: at most one
//! outbound provider call, then the result is mapped to a response type.

use crate::checkout::{CheckoutRequest, CheckoutSession, SubscriptionCheckout};
use crate::config::RelayConfig;
use crate::error::RelayResult;
use crate::provider::BoxedPaymentProvider;
use crate::subscription::{SubscriptionFilter, SubscriptionQuery, SubscriptionStatus};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Answer of `GET /map-token`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// `null` when no token is configured
    pub token: Option<String>,
}

/// Forwards relay operations to a payment provider
pub struct PaymentRelay {
    provider: BoxedPaymentProvider,
    config: RelayConfig,
}

impl PaymentRelay {
    pub fn new(provider: BoxedPaymentProvider, config: RelayConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.provider_name()
    }

    /// Whether the customer has at least one active subscription.
    #[instrument(skip(self, query), fields(provider = self.provider_name()))]
    pub async fn verify_subscription(
        &self,
        query: &SubscriptionQuery,
    ) -> RelayResult<SubscriptionStatus> {
        let filter = SubscriptionFilter::active_for(query.customer_id.clone());
        let subscriptions = self.provider.list_subscriptions(&filter).await?;

        let active = subscriptions.iter().any(|s| s.is_active());
        debug!(
            "Subscriptions returned: {}, active={}",
            subscriptions.len(),
            active
        );

        Ok(SubscriptionStatus { active })
    }

    /// Create a subscription checkout for the configured price.
    #[instrument(skip(self, request), fields(provider = self.provider_name()))]
    pub async fn create_checkout_session(
        &self,
        request: &CheckoutRequest,
    ) -> RelayResult<CheckoutSession> {
        let urls = &self.config.redirect_urls;
        let checkout = SubscriptionCheckout::single_price(
            self.config.price_id.clone(),
            request.email.clone(),
            urls.success_url.clone(),
            urls.cancel_url.clone(),
        );

        self.provider.create_checkout(&checkout).await
    }

    /// The configured mapping token, unchanged.
    pub fn map_token(&self) -> TokenResponse {
        TokenResponse {
            token: self.config.map_token.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RelayError;
    use crate::provider::PaymentProvider;
    use crate::subscription::{Subscription, SubscriptionState};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct FakeProvider {
        subscriptions: Vec<Subscription>,
        failure: Option<String>,
        filters: Mutex<Vec<SubscriptionFilter>>,
        checkouts: Mutex<Vec<SubscriptionCheckout>>,
    }

    impl FakeProvider {
        fn fail(&self) -> RelayResult<()> {
            match &self.failure {
                Some(message) => Err(RelayError::Provider {
                    status: 400,
                    message: message.clone(),
                }),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl PaymentProvider for FakeProvider {
        async fn list_subscriptions(
            &self,
            filter: &SubscriptionFilter,
        ) -> RelayResult<Vec<Subscription>> {
            self.filters.lock().unwrap().push(filter.clone());
            self.fail()?;
            Ok(self.subscriptions.clone())
        }

        async fn create_checkout(
            &self,
            checkout: &SubscriptionCheckout,
        ) -> RelayResult<CheckoutSession> {
            self.checkouts.lock().unwrap().push(checkout.clone());
            self.fail()?;
            Ok(CheckoutSession {
                checkout_url: "https://checkout.stripe.com/c/pay/cs_test_1".to_string(),
            })
        }

        fn provider_name(&self) -> &'static str {
            "fake"
        }
    }

    fn subscription(id: &str, status: SubscriptionState) -> Subscription {
        Subscription {
            id: id.to_string(),
            customer: Some("cus_1".to_string()),
            status,
        }
    }

    fn relay(provider: Arc<FakeProvider>) -> PaymentRelay {
        PaymentRelay::new(provider, RelayConfig::new("price_42", Some("pk.map".into())))
    }

    #[tokio::test]
    async fn test_no_subscriptions_is_inactive() {
        let provider = Arc::new(FakeProvider::default());
        let relay = relay(provider.clone());

        let status = relay
            .verify_subscription(&SubscriptionQuery {
                customer_id: "cus_1".into(),
            })
            .await
            .unwrap();

        assert!(!status.active);
        let filters = provider.filters.lock().unwrap();
        assert_eq!(filters.as_slice(), &[SubscriptionFilter::active_for("cus_1")]);
    }

    #[tokio::test]
    async fn test_one_active_subscription_is_active() {
        let provider = Arc::new(FakeProvider {
            subscriptions: vec![
                subscription("sub_old", SubscriptionState::Canceled),
                subscription("sub_live", SubscriptionState::Active),
            ],
            ..Default::default()
        });

        let status = relay(provider)
            .verify_subscription(&SubscriptionQuery {
                customer_id: "cus_1".into(),
            })
            .await
            .unwrap();

        assert!(status.active);
    }

    #[tokio::test]
    async fn test_provider_failure_propagates() {
        let provider = Arc::new(FakeProvider {
            failure: Some("No such customer: 'cus_nope'".into()),
            ..Default::default()
        });

        let err = relay(provider)
            .verify_subscription(&SubscriptionQuery {
                customer_id: "cus_nope".into(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "No such customer: 'cus_nope'");
        assert_eq!(err.status_code(), 400);
    }

    #[tokio::test]
    async fn test_checkout_uses_configured_price_and_redirects() {
        let provider = Arc::new(FakeProvider::default());
        let relay = relay(provider.clone());

        let session = relay
            .create_checkout_session(&CheckoutRequest {
                email: Some("user@example.com".into()),
            })
            .await
            .unwrap();
        assert!(!session.checkout_url.is_empty());

        let checkouts = provider.checkouts.lock().unwrap();
        assert_eq!(checkouts.len(), 1);
        let sent = &checkouts[0];
        assert_eq!(sent.line_items[0].price, "price_42");
        assert_eq!(sent.line_items[0].quantity, 1);
        assert_eq!(sent.customer_email.as_deref(), Some("user@example.com"));
        assert_eq!(sent.success_url, "https://your-app.com/success");
        assert_eq!(sent.cancel_url, "https://your-app.com/cancel");
    }

    #[tokio::test]
    async fn test_checkout_failure_propagates() {
        let provider = Arc::new(FakeProvider {
            failure: Some("No such price: 'price_42'".into()),
            ..Default::default()
        });

        let result = relay(provider)
            .create_checkout_session(&CheckoutRequest::default())
            .await;
        assert!(matches!(result, Err(RelayError::Provider { .. })));
    }

    #[test]
    fn test_map_token_is_unchanged() {
        let token = "pk.eyJ1Ijoi\u{00e9}x  \"quoted\"";
        let relay = PaymentRelay::new(
            Arc::new(FakeProvider::default()),
            RelayConfig::new("price_42", Some(token.to_string())),
        );
        assert_eq!(relay.map_token().token.as_deref(), Some(token));

        let relay = PaymentRelay::new(
            Arc::new(FakeProvider::default()),
            RelayConfig::new("price_42", None),
        );
        assert_eq!(relay.map_token(), TokenResponse { token: None });
    }
}
