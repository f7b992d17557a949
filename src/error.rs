/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Error types for the session client

use crate::session::flight::Operation;
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Main error type of the library
#[derive(Debug, Error)]
pub enum AppError {
    /// The request never produced a response (DNS, connect, TLS, timeout...)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success status; the body is kept verbatim
    #[error("api error {status}: {body}")]
    Api {
        /// HTTP status returned by the API
        status: StatusCode,
        /// Response body, `null` when empty
        body: Value,
    },

    /// The API answered 429 Too Many Requests
    #[error("rate limit exceeded")]
    RateLimitExceeded {
        /// Seconds to wait, from the `Retry-After` header
        retry_after: Option<u64>,
        /// Response body
        body: Value,
    },

    /// An authenticated operation was attempted without an access token
    #[error("unauthenticated")]
    Unauthenticated,

    /// The same operation is already running
    #[error("{0} already in flight")]
    RequestInFlight(Operation),

    /// JSON encoding or decoding failed
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Token store failure
    #[error("storage error: {0}")]
    Storage(String),
}

impl AppError {
    /// HTTP status carried by this error, if the API produced one
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            AppError::RateLimitExceeded { .. } => Some(StatusCode::TOO_MANY_REQUESTS),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Response body carried by this error, if any
    #[must_use]
    pub fn body(&self) -> Option<&Value> {
        match self {
            AppError::Api { body, .. } | AppError::RateLimitExceeded { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Whether the API rejected the credentials with 401
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}
