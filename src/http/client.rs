//! HTTP transport wrapper for Hello API communication.
//!
//! This module provides the [`HttpClient`] type: a thin wrapper around
//! `reqwest` that carries the SDK's default headers and performs a single
//! request/response exchange per call. No retries, no timeout overrides
//! beyond the transport's own defaults.

use std::collections::HashMap;

use crate::client::SecretKey;
use crate::http::errors::HttpError;
use crate::http::request::{HttpMethod, HttpRequest};
use crate::http::response::HttpResponse;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP transport for making requests to the Hello API.
///
/// The client handles:
/// - URL construction from a base address and a request path
/// - Default headers including `User-Agent`, `Accept`, and the
///   `Authorization` credential when one was attached
/// - Header merging and query-parameter encoding
///
/// The underlying `reqwest::Client` owns connection pooling and TLS; a
/// custom one can be supplied to substitute transport behavior.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new transport wrapper around the given `reqwest` client.
    ///
    /// When `secret_key` is present, its raw value is injected as the
    /// `Authorization` header on every outgoing call. No scheme prefix is
    /// added and no refresh is performed; the credential is passed through
    /// literally.
    #[must_use]
    pub fn new(client: reqwest::Client, secret_key: Option<&SecretKey>) -> Self {
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("Hello API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        if let Some(key) = secret_key {
            default_headers.insert("Authorization".to_string(), key.as_ref().to_string());
        }

        Self {
            client,
            default_headers,
        }
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request and returns the response, whatever its status.
    ///
    /// The target URL is the base address concatenated with the request
    /// path, exactly as supplied. Query parameters are URL-encoded by the
    /// transport. Non-success statuses are not errors here; the endpoint
    /// groups own status policy.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network or I/O error occurs (`Network`)
    pub async fn request(
        &self,
        base_uri: &str,
        request: HttpRequest,
    ) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}", base_uri, request.path);

        let mut headers = self.default_headers.clone();
        if request.body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = request.body {
            req_builder = req_builder.body(body);
        }

        tracing::debug!("Sending {} request to {}", request.http_method, url);

        let res = req_builder.send().await?;

        let status = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.text().await.unwrap_or_default();

        Ok(HttpResponse::new(status, res_headers, body))
    }

    /// Parses response headers into a `HashMap` keyed by lower-cased name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
