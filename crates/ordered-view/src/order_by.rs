//! Order-by expressions: an ordered list of field keys with direction.

use ordered_view_field_path::{format_field_path, parse_field_path};

/// One sort key: a field path and a direction.
///
/// Order-by expressions parse into an ordered sequence of these; the first
/// entry is the primary key. Immutable once parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderField {
    /// Dot-split path segments addressing the field inside an item record.
    pub path: Vec<String>,
    /// `true` for ascending (the default), `false` for descending.
    pub ascending: bool,
}

impl OrderField {
    /// Build a key from a field path string and a direction.
    pub fn new(path: &str, ascending: bool) -> Self {
        OrderField {
            path: parse_field_path(path),
            ascending,
        }
    }

    /// Ascending key on `path`.
    pub fn asc(path: &str) -> Self {
        OrderField::new(path, true)
    }

    /// Descending key on `path`.
    pub fn desc(path: &str) -> Self {
        OrderField::new(path, false)
    }
}

/// Split a segment token into its field path text and direction.
///
/// A case-insensitive `DESC` suffix, whitespace-separated or directly
/// appended, means descending; anything else is ascending.
pub(crate) fn split_direction(token: &str) -> (&str, bool) {
    let upper = token.to_ascii_uppercase();
    if upper.ends_with("DESC") {
        (token[..token.len() - 4].trim_end(), false)
    } else {
        (token, true)
    }
}

/// Parse an order-by expression into sort keys.
///
/// The expression is a comma-separated list of field-path tokens, each
/// optionally suffixed with a case-insensitive `DESC` marker. Segments are
/// trimmed of surrounding whitespace before and after marker stripping. The
/// empty string yields an empty list, meaning no ordering constraint.
///
/// No path-syntax validation happens here: a malformed segment (for example a
/// blank path left by a trailing comma) becomes a key that resolves to no
/// value on every item and therefore never distinguishes two items. Strict
/// callers can reject such input with [`crate::validate_order_by`] first.
///
/// # Example
///
/// ```
/// use ordered_view::parse_order_by;
///
/// let fields = parse_order_by("rank desc, user.name");
/// assert_eq!(fields.len(), 2);
/// assert_eq!(fields[0].path, vec!["rank"]);
/// assert!(!fields[0].ascending);
/// assert_eq!(fields[1].path, vec!["user", "name"]);
/// assert!(fields[1].ascending);
/// ```
pub fn parse_order_by(expression: &str) -> Vec<OrderField> {
    if expression.is_empty() {
        return Vec::new();
    }
    expression
        .split(',')
        .map(|segment| {
            let (path, ascending) = split_direction(segment.trim());
            OrderField::new(path, ascending)
        })
        .collect()
}

/// Format sort keys back into an order-by expression.
///
/// Round-trips [`parse_order_by`] for canonical input (single spaces, upper
/// case `DESC`).
///
/// # Example
///
/// ```
/// use ordered_view::{format_order_by, OrderField};
///
/// let fields = vec![OrderField::desc("rank"), OrderField::asc("user.name")];
/// assert_eq!(format_order_by(&fields), "rank DESC, user.name");
/// ```
pub fn format_order_by(order_by: &[OrderField]) -> String {
    order_by
        .iter()
        .map(|field| {
            let path = format_field_path(&field.path);
            if field.ascending {
                path
            } else {
                format!("{path} DESC")
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_ascending() {
        let fields = parse_order_by("id");
        assert_eq!(fields, vec![OrderField::asc("id")]);
    }

    #[test]
    fn test_parse_single_descending() {
        let fields = parse_order_by("id DESC");
        assert_eq!(fields, vec![OrderField::desc("id")]);
    }

    #[test]
    fn test_parse_direction_per_segment() {
        let fields = parse_order_by("a DESC, b");
        assert_eq!(fields.len(), 2);
        assert!(!fields[0].ascending);
        assert!(fields[1].ascending);
    }

    #[test]
    fn test_parse_marker_case_insensitive() {
        for expr in ["id desc", "id Desc", "id dEsC", "id DESC"] {
            let fields = parse_order_by(expr);
            assert_eq!(fields, vec![OrderField::desc("id")], "expr: {expr:?}");
        }
    }

    #[test]
    fn test_parse_marker_directly_appended() {
        let fields = parse_order_by("idDESC");
        assert_eq!(fields, vec![OrderField::desc("id")]);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let fields = parse_order_by("  a  ,  b   DESC  ");
        assert_eq!(
            fields,
            vec![OrderField::asc("a"), OrderField::desc("b")]
        );
    }

    #[test]
    fn test_parse_nested_path() {
        let fields = parse_order_by("user.address.city DESC");
        assert_eq!(fields[0].path, vec!["user", "address", "city"]);
        assert!(!fields[0].ascending);
    }

    #[test]
    fn test_parse_empty_expression() {
        assert_eq!(parse_order_by(""), Vec::new());
    }

    #[test]
    fn test_parse_trailing_comma_keeps_blank_key() {
        // Permissive: the blank segment becomes a key that never resolves,
        // i.e. a tie on every item.
        let fields = parse_order_by("a,");
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[1].path, vec![""]);
        assert!(fields[1].ascending);
    }

    #[test]
    fn test_parse_bare_marker_is_blank_key() {
        let fields = parse_order_by("DESC");
        assert_eq!(fields, vec![OrderField::desc("")]);
    }

    #[test]
    fn test_format_roundtrip() {
        for expr in ["id", "id DESC", "a DESC, b", "user.name, rank DESC"] {
            let fields = parse_order_by(expr);
            assert_eq!(format_order_by(&fields), expr, "roundtrip: {expr:?}");
        }
    }
}
