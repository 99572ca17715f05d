//! Greetings endpoint group implementation.

use crate::client::HelloClient;
use crate::greetings::errors::GreetingError;
use crate::greetings::types::{GetGreetingRequest, GetGreetingResponse};
use crate::http::{HttpError, HttpMethod, HttpRequest};

/// The greetings endpoint group.
///
/// Obtained through [`HelloClient::greetings`]; a fresh value is
/// constructed per accessor call. It borrows the client for its transport,
/// codec, and base address, and carries no state of its own: each operation
/// is an independent request/decode sequence.
///
/// # Example
///
/// ```rust,ignore
/// use hello_sdk::{GetGreetingRequest, HelloClient};
///
/// let client = HelloClient::builder()
///     .base_uri("http://localhost:8080")
///     .build();
///
/// let request = GetGreetingRequest::new("Hantsy")?;
/// let response = client.greetings().get_greeting(&request).await?;
/// assert!(response.content.contains("Hantsy"));
/// ```
#[derive(Debug)]
pub struct GreetingsApi<'a> {
    client: &'a HelloClient,
}

impl<'a> GreetingsApi<'a> {
    /// Creates the group implementation for the given client.
    pub(crate) const fn new(client: &'a HelloClient) -> Self {
        Self { client }
    }

    /// Fetches a greeting for the name in `request`.
    ///
    /// Sends `GET {base}/greetings?name={name}` with no body. The `name`
    /// parameter is URL-encoded by the transport, so names containing
    /// reserved characters reach the server intact.
    ///
    /// # Errors
    ///
    /// Returns [`GreetingError::Transport`] on a network or I/O failure,
    /// [`GreetingError::Status`] when the server answers with anything
    /// other than 200, and [`GreetingError::Decode`] when the body cannot
    /// be decoded into [`GetGreetingResponse`].
    pub async fn get_greeting(
        &self,
        request: &GetGreetingRequest,
    ) -> Result<GetGreetingResponse, GreetingError> {
        let http_request = HttpRequest::builder(HttpMethod::Get, "/greetings")
            .query_param("name", request.name())
            .build()
            .map_err(HttpError::from)?;

        let response = self
            .client
            .http_client()
            .request(self.client.base_uri(), http_request)
            .await?;

        if response.status != 200 {
            tracing::warn!("Greeting request failed with status {}", response.status);
            return Err(GreetingError::Status {
                status: response.status,
                body: response.body,
            });
        }

        Ok(self.client.codecs().decode(&response.body)?)
    }
}
