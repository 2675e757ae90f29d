//! # Request Handlers
//!
//! Axum request handlers for the relay API.
//! Every failure is reported as `{"error": "..."}` with a 400 status.

use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use relay_core::{
    CheckoutRequest, CheckoutSession, RelayError, SubscriptionQuery, SubscriptionStatus,
    TokenResponse,
};
use serde::Serialize;
use tracing::{error, info, instrument};

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn relay_error_to_response(err: RelayError) -> ApiError {
    let status = StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::BAD_REQUEST);
    (status, Json(ErrorResponse::new(err.to_string())))
}

fn body_or_reject<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        relay_error_to_response(RelayError::InvalidRequest(rejection.body_text()))
    })
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "sub-relay",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Report whether a customer has an active subscription
#[instrument(skip(state, payload))]
pub async fn verify_subscription(
    State(state): State<AppState>,
    payload: Result<Json<SubscriptionQuery>, JsonRejection>,
) -> Result<Json<SubscriptionStatus>, ApiError> {
    let query = body_or_reject(payload)?;

    let status = state.relay.verify_subscription(&query).await.map_err(|e| {
        error!("Failed to verify subscription: {}", e);
        relay_error_to_response(e)
    })?;

    info!(
        "Verified subscription: customer={}, active={}",
        query.customer_id, status.active
    );

    Ok(Json(status))
}

/// Create a subscription checkout session
#[instrument(skip(state, payload))]
pub async fn create_checkout_session(
    State(state): State<AppState>,
    payload: Result<Json<CheckoutRequest>, JsonRejection>,
) -> Result<Json<CheckoutSession>, ApiError> {
    let request = body_or_reject(payload)?;

    let session = state
        .relay
        .create_checkout_session(&request)
        .await
        .map_err(|e| {
            error!("Failed to create checkout: {}", e);
            relay_error_to_response(e)
        })?;

    info!("Created checkout session: email={:?}", request.email);

    Ok(Json(session))
}

/// Hand out the mapping-service token
pub async fn map_token(State(state): State<AppState>) -> Json<TokenResponse> {
    Json(state.relay.map_token())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response() {
        let err = ErrorResponse::new("Test error");
        assert_eq!(err.error, "Test error");
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            serde_json::json!({"error": "Test error"})
        );
    }

    #[test]
    fn test_relay_error_conversion() {
        let err = RelayError::Network("connection reset".to_string());
        let (status, Json(body)) = relay_error_to_response(err);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Network error: connection reset");

        let err = RelayError::Provider {
            status: 401,
            message: "Invalid API Key provided: sk_test_****".to_string(),
        };
        let (status, Json(body)) = relay_error_to_response(err);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Invalid API Key provided: sk_test_****");
    }
}
