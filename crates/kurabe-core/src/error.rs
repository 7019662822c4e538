use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Broad classification of a failed service call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiErrorKind {
    /// The service responded but reported a domain-level failure.
    #[serde(rename = "api_error")]
    Api,
    /// The request never reached the service.
    #[serde(rename = "network_error")]
    Network,
    /// Anything else, including failures while decoding a success response.
    #[serde(rename = "unknown_error")]
    Unknown,
}

/// A failed fetch, as surfaced to the comparison workflow and its callers.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
    /// Unix timestamp in milliseconds at which the error was recorded.
    pub timestamp: i64,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    pub fn api(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Api, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Network, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Unknown, message)
    }

    /// Same error with the owning user's ID prefixed to the message.
    pub fn for_user(self, user_id: &str) -> Self {
        Self {
            message: format!("User {user_id}: {}", self.message),
            ..self
        }
    }
}
