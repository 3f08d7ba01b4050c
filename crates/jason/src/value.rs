//! [`Value`]: an encoded JSON value whose decoding is deferred.
//!
//! Like `serde_json::value::RawValue`, a [`Value`] can sit inside a typed
//! struct to delay or precompute part of a document. Unlike `RawValue` it owns
//! a plain byte buffer, has an empty state, and can be replaced in place.

use std::any::type_name;
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::de::{Deserialize, Deserializer};
use serde::ser::{self, Serialize, Serializer};
use serde_json::value::RawValue;
use tracing::trace;

use crate::error::Error;
use crate::number::Number;

const NULL: &[u8] = b"null";

/// An encoded JSON value.
///
/// The empty buffer and the literal `null` are the same state: both encode,
/// render, compare and decode as `null`.
///
/// ```
/// use jason::Value;
///
/// let v = Value::from("[1,2,3]");
/// assert_eq!(v.to::<Vec<u8>>(), vec![1, 2, 3]);
/// assert!(!v.is::<bool>());
/// assert_eq!(Value::new().to_string(), "null");
/// ```
#[derive(Clone, Default)]
pub struct Value(Vec<u8>);

impl Value {
    /// The empty (`null`) value.
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Encodes `value`, panicking if it cannot be serialized.
    ///
    /// Use [`Value::try_from_serialize`] when the input is not known to be
    /// encodable.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Self {
        match Self::try_from_serialize(value) {
            Ok(encoded) => encoded,
            Err(err) => panic!("jason: cannot encode {}: {err}", type_name::<T>()),
        }
    }

    pub fn try_from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, Error> {
        let bytes = serde_json::to_vec(value).map_err(Error::Encode)?;
        trace!(ty = type_name::<T>(), len = bytes.len(), "encoded value");
        Ok(Self(bytes))
    }

    /// Wraps `text` after checking it holds exactly one JSON value.
    ///
    /// Surrounding whitespace is dropped; whitespace inside the value is kept.
    pub fn parse(text: impl AsRef<[u8]>) -> Result<Self, Error> {
        let raw: &RawValue = serde_json::from_slice(text.as_ref()).map_err(Error::Syntax)?;
        Ok(Self(raw.get().as_bytes().to_vec()))
    }

    /// Decodes into `T`, panicking on failure.
    ///
    /// Only for values known to be well-formed and of the right shape, such as
    /// one just produced by [`Value::from_serialize`]. Untrusted input goes
    /// through [`Value::maybe`].
    pub fn to<'a, T: Deserialize<'a>>(&'a self) -> T {
        match self.maybe() {
            Ok(decoded) => decoded,
            Err(err) => panic!("jason: cannot decode into {}: {err}", type_name::<T>()),
        }
    }

    /// Decodes into `T`.
    pub fn maybe<'a, T: Deserialize<'a>>(&'a self) -> Result<T, Error> {
        let decoded = serde_json::from_slice(self.as_json_bytes()).map_err(Error::Decode);
        trace!(
            ty = type_name::<T>(),
            len = self.0.len(),
            ok = decoded.is_ok(),
            "decoded value"
        );
        decoded
    }

    /// Whether [`Value::maybe`] into `T` succeeds. Pays the full decode.
    pub fn is<'a, T: Deserialize<'a>>(&'a self) -> bool {
        self.maybe::<T>().is_ok()
    }

    /// Replaces the whole content with a copy of `data`.
    ///
    /// The existing allocation is reused; `data` is never retained.
    pub fn set_bytes(&mut self, data: &[u8]) {
        self.0.clear();
        self.0.extend_from_slice(data);
        trace!(len = data.len(), "replaced value");
    }

    /// The JSON encoding of this value: the stored bytes, or `null` when
    /// empty.
    pub fn as_json_bytes(&self) -> &[u8] {
        if self.0.is_empty() {
            NULL
        } else {
            &self.0
        }
    }

    /// Stored bytes without the `null` substitution.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Text form, with the same `null` substitution as the JSON encoding.
    pub fn as_str_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_json_bytes())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True only for the empty state; see [`Value::is_null`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True for the empty state and for a stored `null` literal.
    pub fn is_null(&self) -> bool {
        self.as_json_bytes().trim_ascii() == NULL
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.as_json_bytes() == other.as_json_bytes()
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_json_bytes().hash(state);
    }
}

impl AsRef<[u8]> for Value {
    fn as_ref(&self) -> &[u8] {
        self.as_json_bytes()
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self(text.into_bytes())
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self(text.as_bytes().to_vec())
    }
}

impl From<Box<RawValue>> for Value {
    fn from(raw: Box<RawValue>) -> Self {
        Self(Box::<str>::from(raw).into_string().into_bytes())
    }
}

impl From<Number> for Value {
    fn from(number: Number) -> Self {
        Self(number.into_string().into_bytes())
    }
}

impl From<Value> for Vec<u8> {
    fn from(value: Value) -> Self {
        value.0
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str_lossy())
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value({self})")
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.is_empty() {
            return serializer.serialize_unit();
        }
        let raw: &RawValue = serde_json::from_slice(&self.0).map_err(ser::Error::custom)?;
        raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut value = Self::new();
        Self::deserialize_in_place(deserializer, &mut value)?;
        Ok(value)
    }

    fn deserialize_in_place<D: Deserializer<'de>>(
        deserializer: D,
        place: &mut Self,
    ) -> Result<(), D::Error> {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        place.set_bytes(raw.get().as_bytes());
        Ok(())
    }
}
