//! JSON codec capability interfaces and the default `serde_json` engine.
//!
//! This module provides the [`JsonCodec`] pair used by [`HelloClient`] to
//! convert between structured values and JSON text. The two directions are
//! independent capabilities behind the [`JsonEncoder`] and [`JsonDecoder`]
//! traits, so an alternate JSON engine can be substituted for either
//! direction without touching endpoint-group code.
//!
//! # Overview
//!
//! - [`JsonEncoder`]: renders a `serde_json::Value` tree to JSON text
//! - [`JsonDecoder`]: parses JSON text into a `serde_json::Value` tree
//! - [`JsonCodec`]: immutable pair of the two capabilities, with typed
//!   `encode`/`decode` helpers that compose the pluggable text layer with
//!   each shape's own serde contract
//! - [`SerdeJsonEncoder`] / [`SerdeJsonDecoder`]: the default engine
//!
//! Either capability may be left unconfigured; the pair then fails at first
//! use with [`CodecError::NotConfigured`] rather than a silent no-op.
//!
//! # Example
//!
//! ```rust
//! use hello_sdk::codec::JsonCodec;
//!
//! let codec = JsonCodec::serde_json();
//! let text = codec.encode(&serde_json::json!({"name": "Hantsy"})).unwrap();
//! let value: serde_json::Value = codec.decode(&text).unwrap();
//! assert_eq!(value["name"], "Hantsy");
//! ```
//!
//! [`HelloClient`]: crate::HelloClient

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Errors produced by the JSON codec layer.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The codec pair has no capability configured for the needed direction.
    #[error("JSON codec has no {direction} configured.")]
    NotConfigured {
        /// The missing direction, `"encoder"` or `"decoder"`.
        direction: &'static str,
    },

    /// A value could not be represented as JSON text.
    #[error("Failed to encode value as JSON: {0}")]
    Encode(#[source] serde_json::Error),

    /// JSON text was malformed or did not match the target shape.
    #[error("Failed to decode JSON: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Capability to render a JSON value tree as text.
///
/// Implementations must be pure: no side effects, no retained state between
/// calls.
pub trait JsonEncoder: Send + Sync {
    /// Renders `value` as JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Encode`] if the value cannot be represented.
    fn encode(&self, value: &serde_json::Value) -> Result<String, CodecError>;
}

/// Capability to parse JSON text into a value tree.
///
/// Implementations must be pure: no side effects, no retained state between
/// calls.
pub trait JsonDecoder: Send + Sync {
    /// Parses `text` into a JSON value tree.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Decode`] if the text is not valid JSON.
    fn decode(&self, text: &str) -> Result<serde_json::Value, CodecError>;
}

/// The default encoder, backed by `serde_json`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SerdeJsonEncoder;

impl JsonEncoder for SerdeJsonEncoder {
    fn encode(&self, value: &serde_json::Value) -> Result<String, CodecError> {
        serde_json::to_string(value).map_err(CodecError::Encode)
    }
}

/// The default decoder, backed by `serde_json`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SerdeJsonDecoder;

impl JsonDecoder for SerdeJsonDecoder {
    fn decode(&self, text: &str) -> Result<serde_json::Value, CodecError> {
        serde_json::from_str(text).map_err(CodecError::Decode)
    }
}

/// An immutable pair of JSON encode/decode capabilities.
///
/// Constructed through [`JsonCodec::builder`], or through
/// [`JsonCodec::serde_json`] for the default engine in both directions.
/// Cloning is cheap: the capabilities are shared behind `Arc`.
///
/// # Thread Safety
///
/// `JsonCodec` is `Send + Sync` and safe to share across async tasks.
///
/// # Example
///
/// ```rust
/// use hello_sdk::codec::{JsonCodec, SerdeJsonDecoder};
///
/// // Swap in a decoder while leaving the encoder unconfigured.
/// let codec = JsonCodec::builder()
///     .decoder(SerdeJsonDecoder)
///     .build();
///
/// assert!(codec.decoder().is_some());
/// assert!(codec.encoder().is_none());
/// ```
#[derive(Clone)]
pub struct JsonCodec {
    encoder: Option<Arc<dyn JsonEncoder>>,
    decoder: Option<Arc<dyn JsonDecoder>>,
}

// Verify JsonCodec is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<JsonCodec>();
};

impl std::fmt::Debug for JsonCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonCodec")
            .field("encoder", &self.encoder.as_ref().map(|_| "..."))
            .field("decoder", &self.decoder.as_ref().map(|_| "..."))
            .finish()
    }
}

impl JsonCodec {
    /// Creates a new builder for constructing a `JsonCodec`.
    #[must_use]
    pub fn builder() -> JsonCodecBuilder {
        JsonCodecBuilder::new()
    }

    /// Creates a codec with both directions wired to `serde_json`.
    #[must_use]
    pub fn serde_json() -> Self {
        Self::builder()
            .encoder(SerdeJsonEncoder)
            .decoder(SerdeJsonDecoder)
            .build()
    }

    /// Returns the configured encoder capability, if any.
    #[must_use]
    pub fn encoder(&self) -> Option<&Arc<dyn JsonEncoder>> {
        self.encoder.as_ref()
    }

    /// Returns the configured decoder capability, if any.
    #[must_use]
    pub fn decoder(&self) -> Option<&Arc<dyn JsonDecoder>> {
        self.decoder.as_ref()
    }

    /// Encodes `value` to JSON text through the configured encoder.
    ///
    /// The value is first mapped through its own serde contract into a JSON
    /// value tree, then rendered to text by the pluggable engine.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::NotConfigured`] if no encoder is configured, or
    /// [`CodecError::Encode`] if the value cannot be represented.
    pub fn encode<T: Serialize>(&self, value: &T) -> Result<String, CodecError> {
        let encoder = self
            .encoder
            .as_ref()
            .ok_or(CodecError::NotConfigured {
                direction: "encoder",
            })?;
        let tree = serde_json::to_value(value).map_err(CodecError::Encode)?;
        encoder.encode(&tree)
    }

    /// Decodes JSON text into `T` through the configured decoder.
    ///
    /// The text is parsed into a JSON value tree by the pluggable engine,
    /// then mapped into `T` through the shape's own serde contract.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::NotConfigured`] if no decoder is configured, or
    /// [`CodecError::Decode`] if the text is malformed or does not match the
    /// target shape.
    pub fn decode<T: DeserializeOwned>(&self, text: &str) -> Result<T, CodecError> {
        let decoder = self
            .decoder
            .as_ref()
            .ok_or(CodecError::NotConfigured {
                direction: "decoder",
            })?;
        let tree = decoder.decode(text)?;
        serde_json::from_value(tree).map_err(CodecError::Decode)
    }
}

impl Default for JsonCodec {
    /// The default codec uses `serde_json` for both directions.
    fn default() -> Self {
        Self::serde_json()
    }
}

/// Builder for constructing [`JsonCodec`] instances.
///
/// Both capabilities are optional and default to unconfigured. An
/// unconfigured capability fails at first use with
/// [`CodecError::NotConfigured`].
#[derive(Default)]
pub struct JsonCodecBuilder {
    encoder: Option<Arc<dyn JsonEncoder>>,
    decoder: Option<Arc<dyn JsonDecoder>>,
}

impl JsonCodecBuilder {
    /// Creates a new builder with no capabilities configured.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the encoder capability.
    #[must_use]
    pub fn encoder(mut self, encoder: impl JsonEncoder + 'static) -> Self {
        self.encoder = Some(Arc::new(encoder));
        self
    }

    /// Sets the decoder capability.
    #[must_use]
    pub fn decoder(mut self, decoder: impl JsonDecoder + 'static) -> Self {
        self.decoder = Some(Arc::new(decoder));
        self
    }

    /// Builds the [`JsonCodec`].
    ///
    /// Building never fails; unconfigured capabilities surface as
    /// [`CodecError::NotConfigured`] when first used.
    #[must_use]
    pub fn build(self) -> JsonCodec {
        JsonCodec {
            encoder: self.encoder,
            decoder: self.decoder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
    struct Sample {
        name: String,
    }

    #[test]
    fn test_serde_json_codec_round_trips_a_shape() {
        let codec = JsonCodec::serde_json();

        let text = codec.encode(&Sample {
            name: "Hantsy".to_string(),
        })
        .unwrap();
        let decoded: Sample = codec.decode(&text).unwrap();

        assert_eq!(decoded.name, "Hantsy");
    }

    #[test]
    fn test_default_codec_has_both_directions() {
        let codec = JsonCodec::default();
        assert!(codec.encoder().is_some());
        assert!(codec.decoder().is_some());
    }

    #[test]
    fn test_unconfigured_encoder_fails_fast() {
        let codec = JsonCodec::builder().build();

        let result = codec.encode(&Sample {
            name: "x".to_string(),
        });

        assert!(matches!(
            result,
            Err(CodecError::NotConfigured {
                direction: "encoder"
            })
        ));
    }

    #[test]
    fn test_unconfigured_decoder_fails_fast() {
        let codec = JsonCodec::builder().encoder(SerdeJsonEncoder).build();

        let result: Result<Sample, _> = codec.decode(r#"{"name":"x"}"#);

        assert!(matches!(
            result,
            Err(CodecError::NotConfigured {
                direction: "decoder"
            })
        ));
    }

    #[test]
    fn test_malformed_json_is_a_decode_error() {
        let codec = JsonCodec::serde_json();

        let result: Result<Sample, _> = codec.decode("{not json");

        assert!(matches!(result, Err(CodecError::Decode(_))));
    }

    #[test]
    fn test_shape_mismatch_is_a_decode_error() {
        let codec = JsonCodec::serde_json();

        // Valid JSON, wrong shape: "name" is missing.
        let result: Result<Sample, _> = codec.decode(r#"{"other":1}"#);

        assert!(matches!(result, Err(CodecError::Decode(_))));
    }

    #[test]
    fn test_codec_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<JsonCodec>();
    }

    #[test]
    fn test_codec_clone_shares_capabilities() {
        let codec = JsonCodec::serde_json();
        let cloned = codec.clone();

        let decoded: Sample = cloned.decode(r#"{"name":"clone"}"#).unwrap();
        assert_eq!(decoded.name, "clone");
    }

    #[test]
    fn test_custom_decoder_is_used() {
        // A decoder that rejects everything, to prove substitution works.
        struct RejectingDecoder;
        impl JsonDecoder for RejectingDecoder {
            fn decode(&self, _text: &str) -> Result<serde_json::Value, CodecError> {
                Err(CodecError::NotConfigured {
                    direction: "decoder",
                })
            }
        }

        let codec = JsonCodec::builder().decoder(RejectingDecoder).build();
        let result: Result<Sample, _> = codec.decode(r#"{"name":"x"}"#);
        assert!(result.is_err());
    }
}
