//! jason - helpers for dynamic JSON.
//!
//! Vocabulary for JSON's shapes ([`Object`], [`Array`], [`Number`]), a
//! deferred encoded value ([`Value`]), and conversions between [`Value`] and
//! typed data ([`from`], [`encode`], [`to`], [`maybe`], [`is`]).
//!
//! All encoding and decoding goes through `serde_json`.
//!
//! ```
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Envelope {
//!     kind: String,
//!     body: jason::Value,
//! }
//!
//! let env: Envelope = serde_json::from_str(r#"{"kind":"sum","body":[1, 2, 3]}"#).unwrap();
//! assert_eq!(env.body.to_string(), "[1, 2, 3]");
//! if env.kind == "sum" {
//!     let terms = jason::to::<Vec<i64>>(&env.body);
//!     assert_eq!(terms.iter().sum::<i64>(), 6);
//! }
//! ```

mod convert;
mod error;
mod number;
mod types;
mod value;

pub use convert::{encode, from, is, maybe, to};
pub use error::Error;
pub use number::Number;
pub use types::{Array, Object, ValueArray, ValueObject};
pub use value::Value;
