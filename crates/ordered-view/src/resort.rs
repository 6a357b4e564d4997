//! Full re-sort of an existing child sequence with minimal moves.

use std::convert::Infallible;

use ordered_view_field_path::FieldValue;

use crate::compare::compare_by;
use crate::container::Container;
use crate::order_by::OrderField;

/// Re-sort the container's children under a new key list.
///
/// `ordered` is the caller-owned mirror of the current child order; it does
/// not need to be sorted under `order_by`: this re-establishes the ordering
/// invariant from scratch and rewrites the mirror to the new order, so a
/// following [`crate::insert()`] sees a valid precondition.
///
/// Every handle's item record is recomputed, tagged with its original index
/// in a carrier pair, and the carriers are sorted with the multi-key
/// comparator (stably, so ties keep their previous relative order). The
/// resulting permutation is then replayed against the live container in one
/// backward pass: the handle for the last target position moves to the end,
/// and each earlier round moves its handle to immediately precede the handle
/// placed the round before. That is exactly n−1 `insert_before` calls for
/// n ≥ 1 children, independent of how far the old and new orders differ,
/// and the handle landing at position 0 is never touched. No node is removed
/// and re-added; only existing placement migrates, so node-hosted UI state
/// (focus, scroll, selection) survives.
///
/// # Example
///
/// ```
/// use ordered_view::{parse_order_by, resort, Container, ListContainer};
/// use ordered_view_field_path::FieldValue;
/// use serde_json::json;
///
/// let mut container = ListContainer::new();
/// for id in [9, 6, 5] {
///     container.append_child(id);
/// }
/// let mut ordered: Vec<i64> = vec![9, 6, 5];
///
/// let order_by = parse_order_by("id");
/// resort(&mut container, &mut ordered, &order_by, |id| {
///     FieldValue::from(json!({"id": id}))
/// });
///
/// assert_eq!(container.children(), vec![5, 6, 9]);
/// assert_eq!(ordered, vec![5, 6, 9]);
/// ```
pub fn resort<C, F>(
    container: &mut C,
    ordered: &mut Vec<C::Handle>,
    order_by: &[OrderField],
    mut to_item: F,
) where
    C: Container,
    F: FnMut(&C::Handle) -> FieldValue,
{
    let result: Result<(), Infallible> =
        try_resort(container, ordered, order_by, |handle| Ok(to_item(handle)));
    match result {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

/// Fallible-mapper form of [`resort`].
///
/// All items are mapped before any placement command is issued, so a mapper
/// error leaves both the container and the mirror untouched.
pub fn try_resort<C, F, E>(
    container: &mut C,
    ordered: &mut Vec<C::Handle>,
    order_by: &[OrderField],
    mut to_item: F,
) -> Result<(), E>
where
    C: Container,
    F: FnMut(&C::Handle) -> Result<FieldValue, E>,
{
    // Carrier pairs: item record tagged with its original index.
    let mut tagged: Vec<(usize, FieldValue)> = Vec::with_capacity(ordered.len());
    for (index, handle) in ordered.iter().enumerate() {
        tagged.push((index, to_item(handle)?));
    }

    tagged.sort_by(|a, b| compare_by(&a.1, &b.1, order_by));

    // Backward pass over target positions n-1 .. 1. The first round's
    // reference is the "append at end" sentinel.
    let mut reference: Option<C::Handle> = None;
    for (original_index, _) in tagged.iter().skip(1).rev() {
        let handle = ordered[*original_index].clone();
        container.insert_before(handle.clone(), reference.as_ref());
        reference = Some(handle);
    }

    let new_order: Vec<C::Handle> = tagged
        .iter()
        .map(|(original_index, _)| ordered[*original_index].clone())
        .collect();
    *ordered = new_order;
    Ok(())
}
