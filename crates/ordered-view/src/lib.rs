//! ordered-view — keep a UI container's children ordered by a declarative
//! multi-key sort expression.
//!
//! List and table widgets use this to insert new rows at the correct sorted
//! position without a full re-render, and to re-sort an existing list with
//! the minimum number of container move operations when the sort key changes.
//!
//! The engine owns no UI state. The host supplies three things per call: a
//! [`Container`] implementation (the placement seam), a mutable mirror
//! `Vec<Handle>` tracking the current child order, and a mapping function
//! from an opaque handle to the item record the comparators read. Everything
//! else (expression parsing, field resolution, comparison, placement) is
//! pure and synchronous.
//!
//! # Example
//!
//! ```
//! use ordered_view::{insert, parse_order_by, resort, Container, ListContainer};
//! use ordered_view_field_path::FieldValue;
//! use serde_json::json;
//!
//! let rows = vec![
//!     json!({"id": 5, "type": "foo"}),
//!     json!({"id": 6, "type": "bar"}),
//!     json!({"id": 3, "type": "bar"}),
//! ];
//! let to_item = |handle: &usize| FieldValue::from(&rows[*handle]);
//!
//! let mut container: ListContainer<usize> = ListContainer::new();
//! let mut ordered: Vec<usize> = Vec::new();
//!
//! // Rows arrive out of order; each lands at its sorted position.
//! let order_by = parse_order_by("id");
//! insert(&mut container, &mut ordered, &[0, 1, 2], &order_by, to_item);
//! assert_eq!(container.children(), vec![2, 0, 1]); // ids 3, 5, 6
//!
//! // The sort key changes; the existing children are migrated in place.
//! let order_by = parse_order_by("type, id DESC");
//! resort(&mut container, &mut ordered, &order_by, to_item);
//! assert_eq!(container.children(), vec![1, 2, 0]); // bar 6, bar 3, foo 5
//! ```

pub mod compare;
pub mod container;
pub mod insert;
pub mod order_by;
pub mod resort;
pub mod validate;

// Re-export the core public API
pub use compare::{compare_by, compare_field, is_ordered};
pub use container::{Container, ListContainer};
pub use insert::{find_insert_index, insert, try_insert};
pub use order_by::{format_order_by, parse_order_by, OrderField};
pub use resort::{resort, try_resort};
pub use validate::{validate_order_by, OrderByError};

pub use ordered_view_field_path::FieldValue;
