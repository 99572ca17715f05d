//! HTTP transport types for Hello API communication.
//!
//! This module provides the transport layer the SDK delegates HTTP concerns
//! to: a thin wrapper around `reqwest` plus request/response value types.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: the async transport wrapper carrying default headers
//! - [`HttpRequest`]: a request to be sent, built via [`HttpRequestBuilder`]
//! - [`HttpResponse`]: a received response (status, headers, raw body text)
//! - [`HttpMethod`]: supported HTTP methods
//! - [`HttpError`]: transport-level errors (validation, network)
//!
//! The transport returns every response it receives, whatever the status;
//! deciding what counts as success belongs to the endpoint groups. There is
//! no retry logic and no timeout handling beyond `reqwest`'s own defaults.

mod client;
mod errors;
mod request;
mod response;

pub use client::{HttpClient, SDK_VERSION};
pub use errors::{HttpError, InvalidHttpRequestError};
pub use request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use response::HttpResponse;
