//! Request and response value types for the greetings endpoint group.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A validated request for the "get greeting" operation.
///
/// The `name` field is required and validated at construction; an invalid
/// value never produces a partially-built request.
///
/// # Example
///
/// ```rust
/// use hello_sdk::GetGreetingRequest;
///
/// let request = GetGreetingRequest::new("Hantsy").unwrap();
/// assert_eq!(request.name(), "Hantsy");
///
/// assert!(GetGreetingRequest::new("").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GetGreetingRequest {
    name: String,
}

impl GetGreetingRequest {
    /// Creates a new validated request.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyGreetingName`] if `name` is empty.
    /// The failure is raised here, before any network activity occurs.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyGreetingName);
        }
        Ok(Self { name })
    }

    /// Returns the name to greet.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The response of the "get greeting" operation.
///
/// Populated solely by decoding the JSON response body; no validation
/// beyond what decoding itself enforces.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetGreetingResponse {
    /// The greeting text, e.g. `"Hello Hantsy"`.
    pub content: String,
    /// When the greeting was created.
    pub created_at: DateTime<Utc>,
}
