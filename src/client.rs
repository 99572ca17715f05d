//! The Hello API client and its builder.
//!
//! This module provides [`HelloClient`], the entry point of the SDK. A
//! client owns a transport wrapper, a JSON codec pair, and a base address,
//! and exposes one accessor per endpoint group. It is assembled through
//! [`HelloClientBuilder`], which supplies defaults for every field the
//! caller does not override.
//!
//! # Example
//!
//! ```rust
//! use hello_sdk::{HelloClient, SecretKey};
//!
//! let client = HelloClient::builder()
//!     .secret_key(SecretKey::new("my-secret-key").unwrap())
//!     .base_uri("http://localhost:8080")
//!     .build();
//!
//! assert_eq!(client.base_uri(), "http://localhost:8080");
//! ```

use std::fmt;

use crate::codec::JsonCodec;
use crate::error::ValidationError;
use crate::greetings::GreetingsApi;
use crate::http::HttpClient;

/// A validated API secret credential.
///
/// This newtype ensures the credential is non-empty and masks its value in
/// debug output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `SecretKey(*****)` instead of the actual key.
///
/// # Example
///
/// ```rust
/// use hello_sdk::SecretKey;
///
/// let key = SecretKey::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", key), "SecretKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(String);

impl SecretKey {
    /// Creates a new validated secret key.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptySecretKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ValidationError::EmptySecretKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for SecretKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(*****)")
    }
}

/// Client for the Hello API.
///
/// A `HelloClient` owns its transport, its codec pair, and its base
/// address. All three are fixed at build time; concurrent calls through one
/// client never observe mutation. Endpoint groups are reached through
/// accessor methods ([`HelloClient::greetings`]), each of which constructs a
/// thin implementation value on demand.
///
/// # Thread Safety
///
/// `HelloClient` is `Send + Sync`, making it safe to share across async
/// tasks. Connection reuse across calls is the underlying transport's
/// concern.
///
/// # Example
///
/// ```rust,ignore
/// use hello_sdk::{GetGreetingRequest, HelloClient, SecretKey};
///
/// let client = HelloClient::builder()
///     .secret_key(SecretKey::new("my-secret-key").unwrap())
///     .base_uri("http://localhost:8080")
///     .build();
///
/// let request = GetGreetingRequest::new("Hantsy")?;
/// let response = client.greetings().get_greeting(&request).await?;
/// println!("{}", response.content);
/// ```
#[derive(Debug)]
pub struct HelloClient {
    http_client: HttpClient,
    codecs: JsonCodec,
    base_uri: String,
}

// Verify HelloClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HelloClient>();
};

impl HelloClient {
    /// Creates a new builder for constructing a `HelloClient`.
    #[must_use]
    pub fn builder() -> HelloClientBuilder {
        HelloClientBuilder::new()
    }

    /// Returns the transport wrapper used by this client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns the JSON codec pair used by this client.
    #[must_use]
    pub const fn codecs(&self) -> &JsonCodec {
        &self.codecs
    }

    /// Returns the base address for this client.
    ///
    /// The address is held exactly as supplied to the builder; no
    /// trailing-slash normalization is applied.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the greetings endpoint group.
    ///
    /// A fresh implementation value is constructed per call; it borrows the
    /// client and carries no state of its own.
    #[must_use]
    pub const fn greetings(&self) -> GreetingsApi<'_> {
        GreetingsApi::new(self)
    }
}

/// Builder for constructing [`HelloClient`] instances.
///
/// Every field is optional; [`build`](HelloClientBuilder::build) fills in
/// defaults for whatever the caller leaves unset and never fails.
///
/// # Defaults
///
/// - transport: a default `reqwest::Client`, with the secret key (if any)
///   attached as an `Authorization` header on every outgoing call
/// - codecs: `serde_json` in both directions
/// - base address: empty string (calls then fail at the transport with an
///   invalid-URL error)
///
/// A custom transport is used as-is: the secret key only applies when the
/// builder constructs the default transport.
///
/// # Example
///
/// ```rust
/// use hello_sdk::codec::JsonCodec;
/// use hello_sdk::HelloClient;
///
/// let client = HelloClient::builder()
///     .http_client(reqwest::Client::new())
///     .codecs(JsonCodec::serde_json())
///     .base_uri("http://localhost:8080")
///     .build();
///
/// assert_eq!(client.base_uri(), "http://localhost:8080");
/// ```
#[derive(Debug, Default)]
pub struct HelloClientBuilder {
    secret_key: Option<SecretKey>,
    http_client: Option<reqwest::Client>,
    codecs: Option<JsonCodec>,
    base_uri: Option<String>,
}

impl HelloClientBuilder {
    /// Creates a new builder with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the secret credential.
    ///
    /// The raw value is injected as the `Authorization` header on every
    /// call made through the default transport. Ignored when a custom
    /// transport is supplied via [`http_client`](Self::http_client).
    #[must_use]
    pub fn secret_key(mut self, key: SecretKey) -> Self {
        self.secret_key = Some(key);
        self
    }

    /// Sets a custom transport.
    ///
    /// Supply a pre-configured `reqwest::Client` to control timeouts,
    /// proxies, or TLS. The SDK still attaches its default `User-Agent` and
    /// `Accept` headers per request.
    #[must_use]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Sets the JSON codec pair.
    #[must_use]
    pub fn codecs(mut self, codecs: JsonCodec) -> Self {
        self.codecs = Some(codecs);
        self
    }

    /// Sets the base address.
    ///
    /// Copied verbatim: no trailing-slash normalization and no URL
    /// validation. A malformed address surfaces as a transport error on the
    /// first call, not here.
    #[must_use]
    pub fn base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.base_uri = Some(base_uri.into());
        self
    }

    /// Builds the [`HelloClient`].
    ///
    /// Building never fails: missing fields fall back to defaults.
    ///
    /// # Panics
    ///
    /// Panics if the default `reqwest` transport cannot be created. This
    /// should only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn build(self) -> HelloClient {
        let http_client = match self.http_client {
            Some(client) => HttpClient::new(client, None),
            None => {
                let transport = reqwest::Client::builder()
                    .use_rustls_tls()
                    .build()
                    .expect("Failed to create HTTP client");
                HttpClient::new(transport, self.secret_key.as_ref())
            }
        };

        HelloClient {
            http_client,
            codecs: self.codecs.unwrap_or_default(),
            base_uri: self.base_uri.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_key_rejects_empty() {
        let result = SecretKey::new("");
        assert!(matches!(result, Err(ValidationError::EmptySecretKey)));
    }

    #[test]
    fn test_secret_key_masks_debug_output() {
        let key = SecretKey::new("super-secret").unwrap();
        assert_eq!(format!("{key:?}"), "SecretKey(*****)");
    }

    #[test]
    fn test_build_with_defaults_never_fails() {
        let client = HelloClient::builder().build();

        assert_eq!(client.base_uri(), "");
        assert!(client.codecs().encoder().is_some());
        assert!(client.codecs().decoder().is_some());
    }

    #[test]
    fn test_build_with_secret_and_base_uri() {
        let client = HelloClient::builder()
            .secret_key(SecretKey::new("k").unwrap())
            .base_uri("http://localhost:8080")
            .build();

        assert_eq!(client.base_uri(), "http://localhost:8080");
        assert_eq!(
            client.http_client().default_headers().get("Authorization"),
            Some(&"k".to_string())
        );
    }

    #[test]
    fn test_base_uri_is_copied_verbatim() {
        let client = HelloClient::builder()
            .base_uri("http://localhost:8080/")
            .build();

        // Trailing slash preserved, nothing normalized.
        assert_eq!(client.base_uri(), "http://localhost:8080/");
    }

    #[test]
    fn test_secret_key_ignored_with_custom_transport() {
        let client = HelloClient::builder()
            .secret_key(SecretKey::new("k").unwrap())
            .http_client(reqwest::Client::new())
            .build();

        // The credential only attaches to the default transport.
        assert!(client
            .http_client()
            .default_headers()
            .get("Authorization")
            .is_none());
    }

    #[test]
    fn test_greetings_accessor_constructs_per_call() {
        let client = HelloClient::builder().build();

        // Two accessor calls yield two independent values.
        let _first = client.greetings();
        let _second = client.greetings();
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HelloClient>();
    }
}
