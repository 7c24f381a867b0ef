//! JSON helpers.
//!
//! `to_json` produces the compact canonical text of any serializable value.
//! `from_json` parses text straight into a typed value, so the behaviour of
//! that type (its methods and trait impls) is available on the result.
//!
//! Numbers are written according to their Rust type: `f64` fields keep a
//! fractional part (`10.0`), integer fields do not (`10`). [`Rectangle`]
//! stores `f64`, so its text differs from a JavaScript `JSON.stringify` of
//! the same sizes while parsing back to the same values.
//!
//! [`Rectangle`]: crate::Rectangle
//!
//! # Example
//! ```
//! use selkit_common::{Rectangle, from_json, to_json};
//!
//! let json = to_json(&Rectangle::new(10.0, 20.0)).unwrap();
//! assert_eq!(json, r#"{"width":10.0,"height":20.0}"#);
//!
//! let rect: Rectangle = from_json(&json).unwrap();
//! assert_eq!(rect.area(), 200.0);
//! ```

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure to convert a value to or from JSON.
#[derive(Error, Debug)]
pub enum JsonError {
    /// The value could not be represented as JSON.
    #[error("failed to serialize value to JSON: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The input was not valid JSON, or did not match the target type.
    #[error("failed to parse JSON: {0}")]
    Parse(#[source] serde_json::Error),
}

/// Serialize `value` to its compact JSON text.
///
/// # Errors
///
/// Returns [`JsonError::Serialize`] if the value's `Serialize` impl fails,
/// e.g. for a map with non-string keys.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string(value).map_err(JsonError::Serialize)
}

/// Parse `json` into a value of type `T`.
///
/// # Errors
///
/// Returns [`JsonError::Parse`] if `json` is malformed or does not describe
/// a `T`.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, JsonError> {
    serde_json::from_str(json).map_err(JsonError::Parse)
}
