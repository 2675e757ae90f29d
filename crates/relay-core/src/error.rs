//! # Relay Error Types
//!
//! Typed error handling for the subscription relay.
//! All facade operations return `Result<T, RelayError>`.

use thiserror::Error;

/// Core error type for all relay operations
#[derive(Debug, Error)]
pub enum RelayError {
    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Request body could not be read as the expected JSON
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Payment provider rejected the call. The message is the provider's own.
    #[error("{message}")]
    Provider { status: u16, message: String },

    /// Network/HTTP error communicating with provider
    #[error("Network error: {0}")]
    Network(String),

    /// Provider answered with a body we could not decode
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RelayError {
    /// Returns the HTTP status code reported to the caller.
    ///
    /// Every request-time failure collapses to 400; only a configuration
    /// fault (which can only surface at startup) maps to 500.
    pub fn status_code(&self) -> u16 {
        match self {
            RelayError::Configuration(_) => 500,
            RelayError::InvalidRequest(_)
            | RelayError::Provider { .. }
            | RelayError::Network(_)
            | RelayError::Serialization(_) => 400,
        }
    }
}

/// Result type alias for relay operations
pub type RelayResult<T> = Result<T, RelayError>;
