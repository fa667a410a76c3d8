//! Membership checks over sequences.
//!
//! The typed helpers scan a slice front to back and stop at the first match.
//! [`in_slice`] works on dynamically typed JSON values, where the container
//! may turn out not to be a sequence at all.

use serde_json::Value;

use crate::{Result, TypesError};

pub fn has_int(needle: i64, haystack: &[i64]) -> bool {
    contains(&needle, haystack)
}

pub fn has_string<S: AsRef<str>>(needle: &str, haystack: &[S]) -> bool {
    haystack.iter().any(|s| s.as_ref() == needle)
}

/// Linear search for `needle` in `haystack`.
pub fn contains<T: PartialEq>(needle: &T, haystack: &[T]) -> bool {
    haystack.iter().any(|item| item == needle)
}

/// Look for `needle` in a JSON array.
///
/// Fails with [`TypesError::NotASequence`] when `haystack` is not an array.
///
/// ```
/// use serde_json::json;
/// use plain_types::slices::in_slice;
///
/// assert!(in_slice(&json!(["ONE", "TWO"]), &json!("TWO")).unwrap());
/// assert!(!in_slice(&json!([]), &json!("TWO")).unwrap());
/// assert!(in_slice(&json!("not-a-slice"), &json!("")).is_err());
/// ```
pub fn in_slice(haystack: &Value, needle: &Value) -> Result<bool> {
    match haystack {
        Value::Array(items) => Ok(contains(needle, items)),
        other => Err(TypesError::NotASequence(json_kind(other))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
