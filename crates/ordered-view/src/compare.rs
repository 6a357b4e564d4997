//! Field and multi-key comparators over item records.

use std::cmp::Ordering;

use ordered_view_field_path::{get, FieldValue};

use crate::order_by::OrderField;

/// Compare one field of two item records.
///
/// Resolves `path` on both sides, then orders the resolved values:
///
/// 1. both absent → equal;
/// 2. exactly one absent → the absent side first;
/// 3. both null → equal;
/// 4. exactly one null → the null side first;
/// 5. same-shape scalars by their natural order: numbers by magnitude,
///    strings lexicographically, booleans `false < true`, instants by time
///    point.
///
/// Mixed-shape pairs (for example a number on one item and a string on the
/// other) and structured values compare by a deterministic text rendering;
/// the resulting order carries no meaning and columns mixing value shapes
/// should not be relied on. Never fails.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use ordered_view::compare_field;
/// use ordered_view_field_path::FieldValue;
/// use serde_json::json;
///
/// let a = FieldValue::from(json!({"id": 3}));
/// let b = FieldValue::from(json!({"id": 5}));
/// let path = vec!["id".to_string()];
///
/// assert_eq!(compare_field(&a, &b, &path), Ordering::Less);
/// assert_eq!(compare_field(&b, &a, &path), Ordering::Greater);
/// assert_eq!(compare_field(&a, &a, &path), Ordering::Equal);
/// ```
pub fn compare_field(left: &FieldValue, right: &FieldValue, path: &[String]) -> Ordering {
    compare_resolved(get(left, path), get(right, path))
}

fn compare_resolved(left: Option<&FieldValue>, right: Option<&FieldValue>) -> Ordering {
    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => compare_values(a, b),
    }
}

fn compare_values(a: &FieldValue, b: &FieldValue) -> Ordering {
    match (a, b) {
        (FieldValue::Null, FieldValue::Null) => Ordering::Equal,
        (FieldValue::Null, _) => Ordering::Less,
        (_, FieldValue::Null) => Ordering::Greater,
        // NaN pairs have no defined order; collapse to a tie so the
        // relation stays total.
        (FieldValue::Number(x), FieldValue::Number(y)) => {
            x.partial_cmp(y).unwrap_or(Ordering::Equal)
        }
        (FieldValue::String(x), FieldValue::String(y)) => x.cmp(y),
        (FieldValue::Bool(x), FieldValue::Bool(y)) => x.cmp(y),
        (FieldValue::Instant(x), FieldValue::Instant(y)) => x.cmp(y),
        _ => text(a).cmp(&text(b)),
    }
}

/// Deterministic text rendering used for mixed-shape and structured pairs.
fn text(value: &FieldValue) -> String {
    match value {
        FieldValue::Null => "null".to_string(),
        FieldValue::Bool(b) => b.to_string(),
        FieldValue::Number(n) => n.to_string(),
        FieldValue::String(s) => s.clone(),
        FieldValue::Instant(t) => t.to_rfc3339(),
        FieldValue::List(items) => items
            .iter()
            .map(text)
            .collect::<Vec<_>>()
            .join(","),
        FieldValue::Object(_) => "[object]".to_string(),
    }
}

/// Compare two item records under an ordered key list.
///
/// A fold over `order_by`: the first key whose [`compare_field`] result is
/// not equal decides, reversed when that key is descending. All keys equal,
/// or an empty key list, yields `Ordering::Equal`.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use ordered_view::{compare_by, parse_order_by};
/// use ordered_view_field_path::FieldValue;
/// use serde_json::json;
///
/// let order_by = parse_order_by("type DESC, id");
/// let a = FieldValue::from(json!({"type": "foo", "id": 2}));
/// let b = FieldValue::from(json!({"type": "bar", "id": 1}));
///
/// // "foo" > "bar", reversed by DESC
/// assert_eq!(compare_by(&a, &b, &order_by), Ordering::Less);
/// ```
pub fn compare_by(left: &FieldValue, right: &FieldValue, order_by: &[OrderField]) -> Ordering {
    order_by
        .iter()
        .map(|field| {
            let ordering = compare_field(left, right, &field.path);
            if field.ascending {
                ordering
            } else {
                ordering.reverse()
            }
        })
        .find(|&ordering| ordering != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

/// Check that no adjacent pair of `items` is inverted under `order_by`.
///
/// Diagnostic helper; the engine itself maintains this as an invariant
/// between operations.
pub fn is_ordered(items: &[FieldValue], order_by: &[OrderField]) -> bool {
    items
        .windows(2)
        .all(|pair| compare_by(&pair[0], &pair[1], order_by) != Ordering::Greater)
}
