//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for BlueForce
///
/// Provider failures carry the provider's message verbatim so the UI layer
/// can surface it unchanged.
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum BlueForceError {
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl BlueForceError {
    /// The message payload without the variant prefix
    ///
    /// Session state stores this so the UI shows exactly what the provider
    /// said, not our wrapper text.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Auth(msg)
            | Self::Api(msg)
            | Self::Storage(msg)
            | Self::Config(msg)
            | Self::NotFound(msg)
            | Self::InvalidInput(msg)
            | Self::Internal(msg) => msg,
        }
    }
}

/// Result type alias for BlueForce operations
pub type Result<T> = std::result::Result<T, BlueForceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_message_is_forwarded_verbatim() {
        let err = BlueForceError::Auth("Invalid login credentials".into());
        assert_eq!(err.to_string(), "Authentication error: Invalid login credentials");
    }

    #[test]
    fn errors_serialize_tagged() {
        let err = BlueForceError::NotFound("profile row".into());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "NotFound");
        assert_eq!(json["message"], "profile row");
    }
}
