//! JSON serialization and positional reconstruction.
//!
//! [`from_json`] does not deserialize by field name. It parses the text,
//! lists the values of the top-level object in property order (integer keys
//! ascending first, then the other keys as they appear), and hands that list
//! to [`Construct::construct`]:
//!
//! ```
//! use selkit_objects::{Rectangle, from_json};
//!
//! // Keys are ignored; order decides: width = 10, height = 20.
//! let r: Rectangle = from_json(r#"{"height":10,"width":20}"#).unwrap();
//! assert_eq!(r.width, 10.0);
//! assert_eq!(r.height, 20.0);
//! ```

use serde::Serialize;
use serde_json::Value;

use crate::error::ObjectError;

/// A type that can be built from positional JSON values.
pub trait Construct: Sized {
    /// Number of positional arguments the constructor takes.
    const ARITY: usize;

    /// Build a value from `args`, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::Arity`] or [`ObjectError::InvalidArgument`]
    /// when `args` does not fit the constructor.
    fn construct(args: &[Value]) -> Result<Self, ObjectError>;
}

/// Serialize `value` as compact JSON.
///
/// Struct fields are written in declaration order and `serde_json` maps in
/// insertion order.
///
/// # Errors
///
/// Returns [`ObjectError::Serialize`] if `value` has no JSON form.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ObjectError> {
    serde_json::to_string(value).map_err(ObjectError::Serialize)
}

/// Parse `text` and build a `T` from its values, positionally.
///
/// An object contributes its values in property order, an array its
/// elements, and any other value is a single argument.
///
/// # Errors
///
/// Returns [`ObjectError::Parse`] for malformed JSON, or whatever
/// [`Construct::construct`] rejects.
pub fn from_json<T: Construct>(text: &str) -> Result<T, ObjectError> {
    let parsed: Value = serde_json::from_str(text).map_err(ObjectError::Parse)?;
    let args = positional_values(parsed);
    T::construct(&args)
}

/// `key` as an array index: canonical decimal digits below `u32::MAX`.
fn array_index(key: &str) -> Option<u32> {
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse::<u32>().ok().filter(|index| *index != u32::MAX)
}

fn positional_values(value: Value) -> Vec<Value> {
    match value {
        Value::Object(map) => {
            let mut indexed = Vec::new();
            let mut named = Vec::new();
            for (key, value) in map {
                match array_index(&key) {
                    Some(index) => indexed.push((index, value)),
                    None => named.push(value),
                }
            }
            indexed.sort_by_key(|(index, _)| *index);
            indexed
                .into_iter()
                .map(|(_, value)| value)
                .chain(named)
                .collect()
        }
        Value::Array(items) => items,
        other => vec![other],
    }
}

/// Check that `args` has exactly `T::ARITY` values.
///
/// # Errors
///
/// Returns [`ObjectError::Arity`] otherwise.
pub fn check_arity<T: Construct>(args: &[Value]) -> Result<(), ObjectError> {
    if args.len() == T::ARITY {
        Ok(())
    } else {
        Err(ObjectError::Arity {
            expected: T::ARITY,
            found: args.len(),
        })
    }
}

/// Read argument `position` as a number.
///
/// # Errors
///
/// Returns [`ObjectError::InvalidArgument`] if the argument is missing or
/// not a JSON number.
pub fn arg_f64(args: &[Value], position: usize) -> Result<f64, ObjectError> {
    args.get(position)
        .and_then(Value::as_f64)
        .ok_or(ObjectError::InvalidArgument {
            position,
            expected: "number",
        })
}
