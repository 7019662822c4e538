use thiserror::Error;

use kurabe_core::error::{ApiError, ApiErrorKind};

/// Errors from the AniList API client.
#[derive(Debug, Error)]
pub enum AniListError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("{0}")]
    GraphQL(String),

    #[error("no data returned from API")]
    NoData,

    #[error("parse error: {0}")]
    Parse(String),
}

impl From<AniListError> for ApiError {
    fn from(err: AniListError) -> Self {
        let kind = match &err {
            AniListError::Http(_) => ApiErrorKind::Network,
            AniListError::Api { .. } | AniListError::GraphQL(_) | AniListError::NoData => {
                ApiErrorKind::Api
            }
            AniListError::Parse(_) => ApiErrorKind::Unknown,
        };
        ApiError::new(kind, err.to_string())
    }
}
