//! Dot-separated field-path utilities.
//!
//! A field path addresses a nested value inside an item record: `"user.name"`
//! steps into the `user` sub-record and reads its `name` field. Paths carry no
//! escaping mechanism, so a dot always separates segments.
//!
//! # Example
//!
//! ```
//! use ordered_view_field_path::{parse_field_path, format_field_path, get, FieldValue};
//!
//! // Parse a field path string into segments
//! let path = parse_field_path("user.name");
//! assert_eq!(path, vec!["user".to_string(), "name".to_string()]);
//!
//! // Format segments back to a field path string
//! assert_eq!(format_field_path(&path), "user.name");
//!
//! // Resolve a path on an item record
//! let item = FieldValue::from(serde_json::json!({"user": {"name": "ada"}}));
//! let val = get(&item, &path);
//! assert_eq!(val, Some(&FieldValue::String("ada".to_string())));
//! ```

pub mod value;
pub use value::FieldValue;

pub mod validate;
pub use validate::{validate_field_path, FieldPathError};

/// Parse a field path string into segments.
///
/// Splits on `.` with no escaping. An empty input yields a single empty
/// segment, which resolves to no value on any item, so a blank path acts as a
/// no-op sort key rather than an error.
///
/// # Example
///
/// ```
/// use ordered_view_field_path::parse_field_path;
///
/// assert_eq!(parse_field_path("id"), vec!["id"]);
/// assert_eq!(parse_field_path("user.address.city"), vec!["user", "address", "city"]);
/// assert_eq!(parse_field_path(""), vec![""]);
/// ```
pub fn parse_field_path(path: &str) -> Vec<String> {
    path.split('.').map(str::to_string).collect()
}

/// Format path segments back into a field path string.
///
/// Round-trips [`parse_field_path`] for segments that contain no dots.
///
/// # Example
///
/// ```
/// use ordered_view_field_path::format_field_path;
///
/// assert_eq!(format_field_path(&["id".to_string()]), "id");
/// assert_eq!(
///     format_field_path(&["user".to_string(), "name".to_string()]),
///     "user.name"
/// );
/// ```
pub fn format_field_path(path: &[String]) -> String {
    path.join(".")
}

/// Check if a string is a valid non-negative list index.
///
/// Leading zeros are rejected except for `"0"` itself.
///
/// # Example
///
/// ```
/// use ordered_view_field_path::is_valid_index;
///
/// assert!(is_valid_index("0"));
/// assert!(is_valid_index("123"));
/// assert!(!is_valid_index("-1"));
/// assert!(!is_valid_index("01"));
/// assert!(!is_valid_index("abc"));
/// ```
pub fn is_valid_index(index: &str) -> bool {
    if index.is_empty() {
        return false;
    }
    let bytes = index.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}

/// Resolve a field path on an item record.
///
/// Object steps look up a key; list steps parse the segment as a decimal
/// index. Any unresolvable segment (missing key, invalid or out-of-range
/// index, or a scalar reached mid-path) yields `None`. Resolution never
/// errors.
///
/// Note the distinction this keeps: a path that resolves to an explicit
/// [`FieldValue::Null`] returns `Some(&FieldValue::Null)`, while an absent
/// field returns `None`.
///
/// # Example
///
/// ```
/// use ordered_view_field_path::{get, parse_field_path, FieldValue};
/// use serde_json::json;
///
/// let item = FieldValue::from(json!({"a": {"b": [10, 20, 30]}}));
///
/// let found = get(&item, &parse_field_path("a.b.1"));
/// assert_eq!(found, Some(&FieldValue::Number(20.0)));
///
/// let missing = get(&item, &parse_field_path("a.missing"));
/// assert_eq!(missing, None);
/// ```
pub fn get<'a>(value: &'a FieldValue, path: &[String]) -> Option<&'a FieldValue> {
    let mut current = value;
    for step in path {
        match current {
            FieldValue::Object(map) => {
                current = map.get(step.as_str())?;
            }
            FieldValue::List(items) => {
                if !is_valid_index(step) {
                    return None;
                }
                let index: usize = step.parse().ok()?;
                current = items.get(index)?;
            }
            _ => return None,
        }
    }
    Some(current)
}
