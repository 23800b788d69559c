// src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Failures talking to the activities backend. A non-success HTTP status
/// with a JSON body is not one of these; it is a rejected [`crate::api::Reply`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}
