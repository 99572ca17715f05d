//! Error types for the greetings endpoint group.

use thiserror::Error;

use crate::codec::CodecError;
use crate::http::HttpError;

/// Error returned when a greetings operation fails.
///
/// Every failure at the transport or codec boundary is caught inside the
/// endpoint group and re-raised as this type; raw `reqwest` or `serde_json`
/// errors never become the call's error type. The original cause remains
/// reachable through `source()`.
///
/// # Example
///
/// ```rust,ignore
/// use hello_sdk::GreetingError;
///
/// match client.greetings().get_greeting(&request).await {
///     Ok(response) => println!("{}", response.content),
///     Err(GreetingError::Status { status, .. }) => println!("server said {status}"),
///     Err(GreetingError::Transport(e)) => println!("transport failed: {e}"),
///     Err(GreetingError::Decode(e)) => println!("bad body: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum GreetingError {
    /// The request could not be sent or the exchange failed below HTTP.
    #[error("Greeting request could not be completed: {0}")]
    Transport(#[from] HttpError),

    /// The server answered with a status other than 200.
    #[error("Greeting request failed with status {status}.")]
    Status {
        /// The HTTP status code of the response.
        status: u16,
        /// The raw response body text, for diagnostics.
        body: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("Greeting response could not be decoded: {0}")]
    Decode(#[from] CodecError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message_includes_status() {
        let error = GreetingError::Status {
            status: 404,
            body: "Not Found".to_string(),
        };
        assert!(error.to_string().contains("404"));
    }

    #[test]
    fn test_status_error_preserves_body() {
        let error = GreetingError::Status {
            status: 500,
            body: r#"{"error":"boom"}"#.to_string(),
        };
        if let GreetingError::Status { body, .. } = &error {
            assert!(body.contains("boom"));
        } else {
            unreachable!();
        }
    }

    #[test]
    fn test_codec_error_converts_into_decode_variant() {
        let codec_error = CodecError::NotConfigured {
            direction: "decoder",
        };
        let error: GreetingError = codec_error.into();
        assert!(matches!(error, GreetingError::Decode(_)));
    }

    #[test]
    fn test_decode_variant_exposes_cause() {
        use std::error::Error as _;

        let codec_error = CodecError::NotConfigured {
            direction: "decoder",
        };
        let error: GreetingError = codec_error.into();
        assert!(error.source().is_some());
    }
}
