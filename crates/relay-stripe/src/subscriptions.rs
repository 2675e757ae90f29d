//! # Stripe Subscriptions
//!
//! Query encoding for `GET /v1/subscriptions` and its list envelope.

use relay_core::{Subscription, SubscriptionFilter};
use serde::Deserialize;

pub(crate) fn list_query(filter: &SubscriptionFilter) -> [(&'static str, String); 2] {
    [
        ("customer", filter.customer_id.clone()),
        ("status", filter.status.as_str().to_string()),
    ]
}

/// Stripe list envelope: `{"object":"list","data":[...],"has_more":...}`
#[derive(Debug, Deserialize)]
pub(crate) struct StripeList<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
}

pub(crate) type SubscriptionList = StripeList<Subscription>;

#[cfg(test)]
mod tests {
    use super::*;
    use relay_core::SubscriptionState;

    #[test]
    fn test_list_query() {
        let query = list_query(&SubscriptionFilter::active_for("cus_9"));
        assert_eq!(query[0], ("customer", "cus_9".to_string()));
        assert_eq!(query[1], ("status", "active".to_string()));
    }

    #[test]
    fn test_parse_list() {
        let body = r#"{
            "object": "list",
            "url": "/v1/subscriptions",
            "has_more": false,
            "data": [
                {"id": "sub_1", "object": "subscription", "customer": "cus_9", "status": "active", "items": {"data": []}}
            ]
        }"#;
        let list: SubscriptionList = serde_json::from_str(body).unwrap();

        assert_eq!(list.data.len(), 1);
        assert_eq!(list.data[0].status, SubscriptionState::Active);
        assert!(!list.has_more);
    }
}
