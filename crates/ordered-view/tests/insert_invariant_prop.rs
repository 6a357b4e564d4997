use proptest::prelude::*;

use ordered_view::{insert, is_ordered, parse_order_by, Container, ListContainer};
use ordered_view_field_path::FieldValue;
use serde_json::{json, Value};

fn row(id: Option<i64>, rank: i64) -> Value {
    match id {
        Some(id) => json!({ "id": id, "rank": rank }),
        None => json!({ "rank": rank }),
    }
}

proptest! {
    /// After any sequence of single-handle inserts under a fixed key list,
    /// the mapped mirror has no adjacent inversion and the mirror matches
    /// the container's child order.
    #[test]
    fn inserts_preserve_sortedness(
        arrivals in prop::collection::vec((prop::option::of(0i64..20), 0i64..10), 0..32),
    ) {
        let rows: Vec<Value> = arrivals
            .iter()
            .map(|(id, rank)| row(*id, *rank))
            .collect();
        let order_by = parse_order_by("id DESC, rank");

        let mut container: ListContainer<usize> = ListContainer::new();
        let mut ordered: Vec<usize> = Vec::new();
        for handle in 0..rows.len() {
            insert(&mut container, &mut ordered, &[handle], &order_by, |h| {
                FieldValue::from(&rows[*h])
            });
        }

        let items: Vec<FieldValue> =
            ordered.iter().map(|h| FieldValue::from(&rows[*h])).collect();
        prop_assert!(is_ordered(&items, &order_by));
        prop_assert_eq!(container.children(), ordered);
    }

    /// With no keys at all, insertion degenerates to append: arrival order
    /// is the final order.
    #[test]
    fn empty_key_list_preserves_arrival_order(count in 0usize..24) {
        let rows: Vec<Value> = (0..count).map(|n| row(Some(n as i64), 0)).collect();

        let mut container: ListContainer<usize> = ListContainer::new();
        let mut ordered: Vec<usize> = Vec::new();
        for handle in 0..count {
            insert(&mut container, &mut ordered, &[handle], &[], |h| {
                FieldValue::from(&rows[*h])
            });
        }

        let expected: Vec<usize> = (0..count).collect();
        prop_assert_eq!(ordered, expected);
    }
}
