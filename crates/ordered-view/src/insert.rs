//! Incremental insertion into an already-sorted child sequence.

use std::cmp::Ordering;
use std::convert::Infallible;

use ordered_view_field_path::FieldValue;

use crate::compare::compare_by;
use crate::container::Container;
use crate::order_by::OrderField;

/// Find the index at which `new_item` belongs inside sorted `items`.
///
/// Forward scan: the first index whose existing item orders after the new one
/// wins; if no existing item does (including the empty-key-list case, where
/// every comparison ties) the new item goes at the end. Appending on ties
/// keeps equal items in arrival order.
///
/// # Example
///
/// ```
/// use ordered_view::{find_insert_index, parse_order_by};
/// use ordered_view_field_path::FieldValue;
/// use serde_json::json;
///
/// let order_by = parse_order_by("id");
/// let items: Vec<FieldValue> = [1, 3, 5]
///     .iter()
///     .map(|id| FieldValue::from(json!({"id": id})))
///     .collect();
///
/// let four = FieldValue::from(json!({"id": 4}));
/// assert_eq!(find_insert_index(&items, &four, &order_by), 2);
///
/// let nine = FieldValue::from(json!({"id": 9}));
/// assert_eq!(find_insert_index(&items, &nine, &order_by), 3);
/// ```
pub fn find_insert_index(
    items: &[FieldValue],
    new_item: &FieldValue,
    order_by: &[OrderField],
) -> usize {
    items
        .iter()
        .position(|existing| compare_by(new_item, existing, order_by) == Ordering::Less)
        .unwrap_or(items.len())
}

/// Insert `new_handles` into a sorted container, keeping it sorted.
///
/// `ordered` is the caller-owned mirror of the container's child order and
/// must already be sorted under `order_by` when mapped through `to_item`.
/// Each new handle, in the given arrival order, is mapped to its item record,
/// placed at its sorted position in the container, and spliced into the
/// mirror, so later arrivals in the same call see an up-to-date, still
/// sorted sequence. With an empty `order_by` every handle is appended,
/// preserving arrival order.
///
/// Item records are recomputed from scratch on every call; nothing is cached
/// across operations. Cost is O(k·n) comparisons for k new handles into n
/// existing ones, which is fine for the incremental, low-volume insertions
/// this is meant for; a changed key set calls for [`crate::resort()`] instead.
pub fn insert<C, F>(
    container: &mut C,
    ordered: &mut Vec<C::Handle>,
    new_handles: &[C::Handle],
    order_by: &[OrderField],
    mut to_item: F,
) where
    C: Container,
    F: FnMut(&C::Handle) -> FieldValue,
{
    let result: Result<(), Infallible> =
        try_insert(container, ordered, new_handles, order_by, |handle| {
            Ok(to_item(handle))
        });
    match result {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

/// Fallible-mapper form of [`insert`].
///
/// A mapper error propagates immediately. Handles processed before the
/// failure stay inserted; there is no rollback. A caller that needs
/// atomicity snapshots the container and mirror first.
pub fn try_insert<C, F, E>(
    container: &mut C,
    ordered: &mut Vec<C::Handle>,
    new_handles: &[C::Handle],
    order_by: &[OrderField],
    mut to_item: F,
) -> Result<(), E>
where
    C: Container,
    F: FnMut(&C::Handle) -> Result<FieldValue, E>,
{
    // Item mirror of `ordered`, maintained in lock-step below.
    let mut items: Vec<FieldValue> = Vec::with_capacity(ordered.len() + new_handles.len());
    for handle in ordered.iter() {
        items.push(to_item(handle)?);
    }

    for handle in new_handles {
        let item = to_item(handle)?;
        let index = find_insert_index(&items, &item, order_by);
        match ordered.get(index) {
            Some(reference) => container.insert_before(handle.clone(), Some(reference)),
            None => container.append_child(handle.clone()),
        }
        ordered.insert(index, handle.clone());
        items.insert(index, item);
    }
    Ok(())
}
