//! Names for JSON's structural shapes.

use indexmap::IndexMap;

use crate::value::Value;

/// A JSON object: an unordered set of name/value pairs.
///
/// Values are dynamic ([`serde_json::Value`]) unless a member type is given.
/// Keys keep document order so a decoded object re-encodes the same way.
///
/// ```
/// let flags: jason::Object<bool> = [("abc".to_string(), true)].into_iter().collect();
/// assert_eq!(serde_json::to_string(&flags).unwrap(), r#"{"abc":true}"#);
/// ```
pub type Object<T = serde_json::Value> = IndexMap<String, T>;

/// A JSON array: an ordered collection of values.
pub type Array<T = serde_json::Value> = Vec<T>;

/// An object whose members stay encoded until asked for.
pub type ValueObject = Object<Value>;

/// An array whose elements stay encoded until asked for.
pub type ValueArray = Array<Value>;
