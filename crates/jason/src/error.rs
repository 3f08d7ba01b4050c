//! Error type shared by the fallible operations of this crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A typed value could not be serialized.
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),
    /// Encoded bytes could not be decoded into the requested type.
    #[error("decode error: {0}")]
    Decode(#[source] serde_json::Error),
    /// Text handed to [`crate::Value::parse`] is not exactly one JSON value.
    #[error("syntax error: {0}")]
    Syntax(#[source] serde_json::Error),
    #[error("invalid JSON number `{0}`")]
    InvalidNumber(String),
    #[error("number `{text}` cannot be represented as {target}")]
    NumberRange { text: String, target: &'static str },
}
