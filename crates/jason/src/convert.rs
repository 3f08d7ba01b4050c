//! Package-level forms of the [`Value`] conversions, for call sites that read
//! better with the target type up front: `jason::to::<T>(&v)`.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::value::Value;

/// Encodes `v` into a [`Value`], panicking on error.
///
/// ```
/// let v = jason::from(&[1, 2, 3]);
/// assert_eq!(v.to_string(), "[1,2,3]");
/// ```
pub fn from<T: Serialize + ?Sized>(v: &T) -> Value {
    Value::from_serialize(v)
}

/// Encodes `v` into a [`Value`].
pub fn encode<T: Serialize + ?Sized>(v: &T) -> Result<Value, Error> {
    Value::try_from_serialize(v)
}

/// Decodes `j` into a value of type `T`, panicking on error.
///
/// ```
/// let j = jason::Value::from("42");
/// assert_eq!(jason::to::<f64>(&j), 42.0);
/// ```
pub fn to<'a, T: Deserialize<'a>>(j: &'a Value) -> T {
    j.to()
}

/// Decodes `j` into a value of type `T`.
///
/// ```
/// let j = jason::Value::from("\"2024-01-01\"");
/// if let Ok(day) = jason::maybe::<String>(&j) {
///     assert_eq!(day, "2024-01-01");
/// }
/// ```
pub fn maybe<'a, T: Deserialize<'a>>(j: &'a Value) -> Result<T, Error> {
    j.maybe()
}

/// Checks whether `j` decodes into `T`.
pub fn is<'a, T: Deserialize<'a>>(j: &'a Value) -> bool {
    j.is::<T>()
}
