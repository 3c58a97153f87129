//! Client error types

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by every remote operation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response. `message` is the response body, or the status
    /// reason when the body was empty.
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    /// Transport failure (connection refused, DNS, broken body stream...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A 2xx body that is not the expected JSON
    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub(crate) fn from_status(status: StatusCode, body: String) -> Self {
        let message = if body.is_empty() {
            status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.as_str().to_string())
        } else {
            body
        };
        ApiError::Status { status, message }
    }

    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Http(e) => e.status(),
            ApiError::Decode(_) => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
