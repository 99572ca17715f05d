//! Error types for the Hello API SDK.
//!
//! This module contains the construction-validation errors and the root
//! error type that every SDK failure converts into.
//!
//! # Error Handling
//!
//! All request-value and credential constructors return
//! `Result<T, ValidationError>` to enable fail-fast validation. Call-path
//! failures surface as [`GreetingError`](crate::greetings::GreetingError) and
//! codec failures as [`CodecError`](crate::codec::CodecError); both convert
//! into [`HelloError`] via `From`, so callers can funnel every SDK failure
//! into one type and branch on variant.
//!
//! # Example
//!
//! ```rust
//! use hello_sdk::{GetGreetingRequest, ValidationError};
//!
//! let result = GetGreetingRequest::new("");
//! assert!(matches!(result, Err(ValidationError::EmptyGreetingName)));
//! ```

use thiserror::Error;

use crate::codec::CodecError;
use crate::greetings::GreetingError;

/// Errors raised when a value fails validation at construction.
///
/// These errors are raised synchronously, before any network activity
/// occurs. Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The greeting name cannot be empty.
    #[error("Greeting name cannot be empty. Please provide a non-empty name.")]
    EmptyGreetingName,

    /// The secret key cannot be empty.
    #[error("Secret key cannot be empty. Please provide a valid API secret key.")]
    EmptySecretKey,
}

/// Root error type for the Hello API SDK.
///
/// Every failure the SDK can produce converts into this type, so callers
/// that do not care which layer failed can match a single error family.
///
/// # Example
///
/// ```rust,ignore
/// use hello_sdk::{GreetingError, HelloError};
///
/// match client.greetings().get_greeting(&request).await {
///     Ok(response) => println!("{}", response.content),
///     Err(e) => match HelloError::from(e) {
///         HelloError::Greeting(GreetingError::Status { status, .. }) => {
///             println!("server said {status}");
///         }
///         other => println!("{other}"),
///     },
/// }
/// ```
#[derive(Debug, Error)]
pub enum HelloError {
    /// A value failed validation at construction.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The JSON codec failed or was not configured.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// A greetings operation failed.
    #[error(transparent)]
    Greeting(#[from] GreetingError),
}
