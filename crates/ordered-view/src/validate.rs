//! Validation functions for order-by expressions.
//!
//! [`crate::parse_order_by`] is deliberately permissive: malformed segments
//! degrade into no-op keys instead of failing. Callers that prefer loud
//! rejection run the expression through [`validate_order_by`] first.

use ordered_view_field_path::{validate_field_path, FieldPathError};
use thiserror::Error;

use crate::order_by::split_direction;

/// Maximum allowed expression string length.
const MAX_EXPRESSION_LENGTH: usize = 4096;

/// Maximum allowed number of sort keys.
const MAX_ORDER_FIELDS: usize = 16;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderByError {
    #[error("EXPRESSION_TOO_LONG")]
    ExpressionTooLong,
    #[error("TOO_MANY_FIELDS")]
    TooManyFields,
    #[error("segment {segment}: blank field path")]
    BlankSegment { segment: usize },
    #[error("segment {segment}: {source}")]
    InvalidPath {
        segment: usize,
        source: FieldPathError,
    },
}

/// Validate an order-by expression.
///
/// The empty expression is valid (no ordering constraint).
///
/// # Errors
///
/// Returns an error if:
/// - The expression exceeds the maximum length (4096 characters)
/// - The expression has more than the maximum number of keys (16)
/// - Any segment's field path is blank after trimming and marker stripping
/// - Any segment's field path fails [`validate_field_path`]
///
/// # Example
///
/// ```
/// use ordered_view::validate_order_by;
///
/// validate_order_by("").unwrap();
/// validate_order_by("rank DESC, user.name").unwrap();
/// validate_order_by("a,").unwrap_err();   // trailing blank segment
/// validate_order_by("a..b").unwrap_err(); // empty path segment
/// ```
pub fn validate_order_by(expression: &str) -> Result<(), OrderByError> {
    if expression.is_empty() {
        return Ok(());
    }
    if expression.len() > MAX_EXPRESSION_LENGTH {
        return Err(OrderByError::ExpressionTooLong);
    }
    let mut count = 0;
    for (segment, token) in expression.split(',').enumerate() {
        count += 1;
        if count > MAX_ORDER_FIELDS {
            return Err(OrderByError::TooManyFields);
        }
        let (path, _) = split_direction(token.trim());
        if path.is_empty() {
            return Err(OrderByError::BlankSegment { segment });
        }
        validate_field_path(path).map_err(|source| OrderByError::InvalidPath { segment, source })?;
    }
    Ok(())
}
