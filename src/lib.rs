//! # Hello API Rust SDK
//!
//! A Rust SDK for the Hello greetings API, demonstrating how a hand-written
//! client for a third-party HTTP/JSON API fits together: a builder-assembled
//! immutable client, a pluggable transport, a pluggable JSON codec pair,
//! per-endpoint-group accessors, and a single-root error family.
//!
//! ## Overview
//!
//! This SDK provides:
//! - An immutable [`HelloClient`] assembled via [`HelloClientBuilder`]
//! - A validated, masked [`SecretKey`] credential injected as a literal
//!   `Authorization` header
//! - Independently swappable JSON encode/decode capabilities via
//!   [`codec::JsonCodec`]
//! - The greetings endpoint group via [`greetings::GreetingsApi`]
//! - Fail-fast request validation and one error family rooted at
//!   [`HelloError`]
//!
//! HTTP transport concerns (connection pooling, TLS, timeouts) belong to
//! `reqwest`; JSON mapping belongs to `serde` behind the codec boundary. The
//! SDK adds no retries, no caching, and no rate limiting.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hello_sdk::{GetGreetingRequest, HelloClient, SecretKey};
//!
//! let client = HelloClient::builder()
//!     .secret_key(SecretKey::new("my-secret-key")?)
//!     .base_uri("http://localhost:8080")
//!     .build();
//!
//! let request = GetGreetingRequest::new("Hantsy")?;
//! let response = client.greetings().get_greeting(&request).await?;
//! println!("{}", response.content);
//! ```
//!
//! ## Swapping the Transport or Codec
//!
//! Both collaborators can be replaced independently:
//!
//! ```rust
//! use hello_sdk::codec::{JsonCodec, SerdeJsonDecoder, SerdeJsonEncoder};
//! use hello_sdk::HelloClient;
//!
//! let transport = reqwest::Client::builder()
//!     .timeout(std::time::Duration::from_secs(5))
//!     .build()
//!     .unwrap();
//!
//! let codec = JsonCodec::builder()
//!     .encoder(SerdeJsonEncoder)
//!     .decoder(SerdeJsonDecoder)
//!     .build();
//!
//! let client = HelloClient::builder()
//!     .http_client(transport)
//!     .codecs(codec)
//!     .base_uri("http://localhost:8080")
//!     .build();
//!
//! assert_eq!(client.base_uri(), "http://localhost:8080");
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use hello_sdk::{GetGreetingRequest, ValidationError};
//!
//! // Validation fails at construction, before any network activity.
//! let result = GetGreetingRequest::new("");
//! assert!(matches!(result, Err(ValidationError::EmptyGreetingName)));
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: every dependency is instance-based and passed
//!   explicitly
//! - **Fail-fast validation**: request values and credentials validate on
//!   construction
//! - **Immutable clients**: transport, codec, and base address are fixed at
//!   build time
//! - **Thread-safe**: all types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime

pub mod client;
pub mod codec;
pub mod error;
pub mod greetings;
pub mod http;

// Re-export public types at crate root for convenience
pub use client::{HelloClient, HelloClientBuilder, SecretKey};
pub use codec::{CodecError, JsonCodec, JsonCodecBuilder, JsonDecoder, JsonEncoder};
pub use error::{HelloError, ValidationError};
pub use greetings::{GetGreetingRequest, GetGreetingResponse, GreetingError, GreetingsApi};

// Re-export HTTP transport types
pub use http::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError,
};
