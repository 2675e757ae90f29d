//! # Subscription Types
//!
//! Inbound subscription query and the provider-side subscription view.

use serde::{Deserialize, Serialize};

/// Body of `POST /verify-subscription`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionQuery {
    /// Provider customer id, passed through unmodified
    pub customer_id: String,
}

/// Answer of `POST /verify-subscription`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionStatus {
    pub active: bool,
}

/// Provider-side subscription state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionState {
    Active,
    Trialing,
    PastDue,
    Canceled,
    Unpaid,
    Incomplete,
    IncompleteExpired,
    Paused,
    #[serde(other)]
    Unknown,
}

impl SubscriptionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionState::Active => "active",
            SubscriptionState::Trialing => "trialing",
            SubscriptionState::PastDue => "past_due",
            SubscriptionState::Canceled => "canceled",
            SubscriptionState::Unpaid => "unpaid",
            SubscriptionState::Incomplete => "incomplete",
            SubscriptionState::IncompleteExpired => "incomplete_expired",
            SubscriptionState::Paused => "paused",
            SubscriptionState::Unknown => "unknown",
        }
    }
}

/// A subscription record as returned by the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub id: String,
    /// Owning customer id
    #[serde(default)]
    pub customer: Option<String>,
    pub status: SubscriptionState,
}

impl Subscription {
    pub fn is_active(&self) -> bool {
        self.status == SubscriptionState::Active
    }
}

/// Outbound subscription list query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionFilter {
    pub customer_id: String,
    pub status: SubscriptionState,
}

impl SubscriptionFilter {
    /// Active subscriptions belonging to `customer_id`
    pub fn active_for(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            status: SubscriptionState::Active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_parsing() {
        let sub: Subscription =
            serde_json::from_str(r#"{"id":"sub_1","customer":"cus_1","status":"past_due"}"#)
                .unwrap();
        assert_eq!(sub.status, SubscriptionState::PastDue);
        assert!(!sub.is_active());

        let sub: Subscription =
            serde_json::from_str(r#"{"id":"sub_2","status":"some_new_state"}"#).unwrap();
        assert_eq!(sub.status, SubscriptionState::Unknown);
        assert!(sub.customer.is_none());
    }

    #[test]
    fn test_active_filter() {
        let filter = SubscriptionFilter::active_for("cus_123");
        assert_eq!(filter.customer_id, "cus_123");
        assert_eq!(filter.status.as_str(), "active");
    }

    #[test]
    fn test_query_requires_customer_id() {
        assert!(serde_json::from_str::<SubscriptionQuery>("{}").is_err());

        let query: SubscriptionQuery =
            serde_json::from_str(r#"{"customer_id":"  cus_ odd "}"#).unwrap();
        assert_eq!(query.customer_id, "  cus_ odd ");
    }
}
