//! HTTP-specific error types for the Hello API SDK.
//!
//! This module contains error types for the transport layer: request
//! validation failures and network failures. Non-success statuses are not
//! errors at this layer; the transport hands every response back and the
//! endpoint groups decide what a success looks like.

use thiserror::Error;

/// Error returned when an HTTP request fails validation before sending.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for transport operations.
///
/// # Example
///
/// ```rust,ignore
/// use hello_sdk::http::HttpError;
///
/// match client.request(url, request).await {
///     Ok(response) => { /* inspect status and body */ }
///     Err(HttpError::InvalidRequest(e)) => println!("invalid request: {e}"),
///     Err(HttpError::Network(e)) => println!("network error: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error from the underlying transport.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use post without specifying data.");
    }

    #[test]
    fn test_invalid_request_converts_into_http_error() {
        let error: HttpError = InvalidHttpRequestError::MissingBody {
            method: "put".to_string(),
        }
        .into();
        assert!(matches!(error, HttpError::InvalidRequest(_)));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let invalid: &dyn std::error::Error = &InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        let _ = invalid;
    }
}
