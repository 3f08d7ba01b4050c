//! [`Number`]: an encoded JSON number.
//!
//! The number is kept as its JSON text, so precision is never lost until a
//! caller asks for a fixed-width conversion.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{self, Serialize, Serializer};
use serde_json::value::RawValue;

use crate::error::Error;

/// An encoded JSON number.
///
/// It has arbitrary precision and converts to `f64`, `i64` or `u64` on
/// request. Equality is textual: `Number::new("1.0")` and `Number::new("1")`
/// are different numbers.
///
/// ```
/// use jason::Number;
///
/// let n: Number = "10".parse().unwrap();
/// assert_eq!(n.as_i64().unwrap(), 10);
/// assert_eq!(n.as_f64().unwrap(), 10.0);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Number(String);

impl Number {
    /// Wraps `text` after checking it is exactly one JSON number token.
    pub fn new(text: impl Into<String>) -> Result<Self, Error> {
        let text = text.into();
        if is_number_token(&text) {
            Ok(Self(text))
        } else {
            Err(Error::InvalidNumber(text))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Nearest `f64`. Fails when the magnitude overflows to infinity.
    pub fn as_f64(&self) -> Result<f64, Error> {
        match self.0.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(self.out_of_range("f64")),
        }
    }

    /// Exact `i64`. Fractional and exponent forms are rejected.
    pub fn as_i64(&self) -> Result<i64, Error> {
        self.0.parse::<i64>().map_err(|_| self.out_of_range("i64"))
    }

    /// Exact `u64`. Fractional and exponent forms are rejected.
    pub fn as_u64(&self) -> Result<u64, Error> {
        self.0.parse::<u64>().map_err(|_| self.out_of_range("u64"))
    }

    /// Converts into a [`serde_json::Number`].
    ///
    /// Exact with the `arbitrary_precision` feature; otherwise goes through
    /// `serde_json`'s own integer/float selection and fails where it does.
    pub fn to_json_number(&self) -> Result<serde_json::Number, Error> {
        self.0
            .parse::<serde_json::Number>()
            .map_err(|_| self.out_of_range("serde_json::Number"))
    }

    fn out_of_range(&self, target: &'static str) -> Error {
        Error::NumberRange {
            text: self.0.clone(),
            target,
        }
    }
}

/// True when `text` is a single JSON number with no surrounding whitespace.
fn is_number_token(text: &str) -> bool {
    if !matches!(text.as_bytes().first(), Some(b'-' | b'0'..=b'9')) {
        return false;
    }
    match serde_json::from_str::<&RawValue>(text) {
        Ok(raw) => raw.get().len() == text.len(),
        Err(_) => false,
    }
}

impl FromStr for Number {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Number {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

macro_rules! number_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(v: $ty) -> Self {
                    Self(v.to_string())
                }
            }
        )*
    };
}

number_from_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl TryFrom<f64> for Number {
    type Error = Error;

    fn try_from(v: f64) -> Result<Self, Self::Error> {
        serde_json::Number::from_f64(v)
            .map(|n| Self(n.to_string()))
            .ok_or_else(|| Error::InvalidNumber(v.to_string()))
    }
}

impl From<serde_json::Number> for Number {
    fn from(n: serde_json::Number) -> Self {
        Self(n.to_string())
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Number({})", self.0)
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let raw: &RawValue = serde_json::from_str(&self.0).map_err(ser::Error::custom)?;
        raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        Self::new(raw.get()).map_err(de::Error::custom)
    }
}
