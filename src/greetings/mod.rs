//! The greetings endpoint group.
//!
//! This module provides the SDK surface for the `/greetings` API group:
//!
//! - [`GreetingsApi`]: the group implementation, reached through
//!   [`HelloClient::greetings`](crate::HelloClient::greetings)
//! - [`GetGreetingRequest`] / [`GetGreetingResponse`]: the operation's
//!   validated request value and decoded response value
//! - [`GreetingError`]: the group's failure family
//!
//! # Wire Format
//!
//! One operation: `GET {base}/greetings?name={name}` with an empty request
//! body. A 200 response carries `{"content": string, "createdAt":
//! timestamp}`; any other status is a failure.

mod client;
mod errors;
mod types;

pub use client::GreetingsApi;
pub use errors::GreetingError;
pub use types::{GetGreetingRequest, GetGreetingResponse};
