//! Validation functions for field paths.
//!
//! Resolution itself is permissive (an invalid path just resolves to no
//! value); these checkers are for callers that want to reject bad input up
//! front.

use thiserror::Error;

/// Maximum allowed path string length.
const MAX_PATH_LENGTH: usize = 1024;

/// Maximum allowed path depth.
const MAX_PATH_DEPTH: usize = 32;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldPathError {
    #[error("PATH_EMPTY")]
    PathEmpty,
    #[error("PATH_TOO_LONG")]
    PathTooLong,
    #[error("PATH_TOO_DEEP")]
    PathTooDeep,
    #[error("EMPTY_SEGMENT")]
    EmptySegment,
}

/// Validate a field path string.
///
/// # Errors
///
/// Returns an error if:
/// - The path is empty
/// - The path exceeds the maximum length (1024 characters)
/// - The path has more than the maximum number of segments (32)
/// - Any segment is empty (leading, trailing, or doubled dots)
///
/// # Example
///
/// ```
/// use ordered_view_field_path::validate_field_path;
///
/// validate_field_path("user.name").unwrap();
/// validate_field_path("").unwrap_err();
/// validate_field_path("a..b").unwrap_err();
/// ```
pub fn validate_field_path(path: &str) -> Result<(), FieldPathError> {
    if path.is_empty() {
        return Err(FieldPathError::PathEmpty);
    }
    if path.len() > MAX_PATH_LENGTH {
        return Err(FieldPathError::PathTooLong);
    }
    let mut depth = 0;
    for segment in path.split('.') {
        if segment.is_empty() {
            return Err(FieldPathError::EmptySegment);
        }
        depth += 1;
    }
    if depth > MAX_PATH_DEPTH {
        return Err(FieldPathError::PathTooDeep);
    }
    Ok(())
}
