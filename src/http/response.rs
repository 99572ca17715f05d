//! HTTP response types for the Hello API SDK.
//!
//! This module provides the [`HttpResponse`] type returned by the transport
//! layer. The transport reports every status it receives; status policy
//! belongs to the endpoint groups.

use std::collections::HashMap;

/// A response received from the Hello API.
///
/// Holds the status code, the response headers (keys lower-cased), and the
/// raw body text. Decoding the body is the codec layer's concern.
///
/// # Example
///
/// ```rust
/// use hello_sdk::http::HttpResponse;
/// use std::collections::HashMap;
///
/// let response = HttpResponse::new(200, HashMap::new(), r#"{"content":"hi"}"#.to_string());
/// assert!(response.is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: u16,
    /// Response headers, keyed by lower-cased header name.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body text.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new response from its parts.
    #[must_use]
    pub const fn new(status: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Returns the first value of the given header, if present.
    ///
    /// Header names are matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_with_header(name: &str, value: &str) -> HttpResponse {
        let mut headers = HashMap::new();
        headers.insert(name.to_string(), vec![value.to_string()]);
        HttpResponse::new(200, headers, String::new())
    }

    #[test]
    fn test_is_ok_for_2xx() {
        let response = HttpResponse::new(200, HashMap::new(), String::new());
        assert!(response.is_ok());

        let response = HttpResponse::new(204, HashMap::new(), String::new());
        assert!(response.is_ok());
    }

    #[test]
    fn test_is_not_ok_outside_2xx() {
        let response = HttpResponse::new(404, HashMap::new(), String::new());
        assert!(!response.is_ok());

        let response = HttpResponse::new(301, HashMap::new(), String::new());
        assert!(!response.is_ok());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let response = response_with_header("content-type", "application/json");
        assert_eq!(response.header("Content-Type"), Some("application/json"));
    }

    #[test]
    fn test_missing_header_is_none() {
        let response = HttpResponse::new(200, HashMap::new(), String::new());
        assert!(response.header("x-request-id").is_none());
    }

    #[test]
    fn test_body_is_preserved_verbatim() {
        let body = r#"{"content":"Hello Hantsy"}"#;
        let response = HttpResponse::new(200, HashMap::new(), body.to_string());
        assert_eq!(response.body, body);
    }
}
