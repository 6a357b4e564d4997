use std::cmp::Ordering;

use ordered_view::{
    compare_by, insert, parse_order_by, resort, Container, ListContainer, OrderField,
};
use ordered_view_field_path::FieldValue;
use serde_json::{json, Value};

/// Counting wrapper: every placement command is one container move.
struct CountingContainer {
    inner: ListContainer<usize>,
    moves: usize,
}

impl CountingContainer {
    fn new() -> Self {
        CountingContainer {
            inner: ListContainer::new(),
            moves: 0,
        }
    }
}

impl Container for CountingContainer {
    type Handle = usize;

    fn append_child(&mut self, child: usize) {
        self.moves += 1;
        self.inner.append_child(child);
    }

    fn insert_before(&mut self, child: usize, reference: Option<&usize>) {
        self.moves += 1;
        self.inner.insert_before(child, reference);
    }

    fn children(&self) -> Vec<usize> {
        self.inner.children()
    }
}

fn random_rows(rng: &mut Lcg, count: usize) -> Vec<Value> {
    (0..count)
        .map(|_| {
            let id = rng.range(40) as i64;
            match rng.range(8) {
                // A slice of rows misses the field or carries null, so the
                // absent/null policy is exercised alongside the typed path.
                0 => json!({ "group": rng.range(4) }),
                1 => json!({ "id": null, "group": rng.range(4) }),
                _ => json!({ "id": id, "group": rng.range(4) }),
            }
        })
        .collect()
}

/// Reference order: stable sort of the handle list under the comparator.
fn reference_order(rows: &[Value], handles: &[usize], order_by: &[OrderField]) -> Vec<usize> {
    let items: Vec<FieldValue> = rows.iter().map(FieldValue::from).collect();
    let mut sorted = handles.to_vec();
    sorted.sort_by(|a, b| compare_by(&items[*a], &items[*b], order_by));
    sorted
}

fn mapped(rows: &[Value], handles: &[usize]) -> Vec<FieldValue> {
    handles.iter().map(|h| FieldValue::from(&rows[*h])).collect()
}

#[test]
fn differential_resort_matches_stable_sort() {
    let mut rng = Lcg::new(0xA11CE);
    for round in 0..64 {
        let count = rng.range(24) as usize;
        let rows = random_rows(&mut rng, count);
        let order_by = parse_order_by("group DESC, id");

        let mut container = CountingContainer::new();
        for handle in 0..count {
            container.append_child(handle);
        }
        let mut ordered: Vec<usize> = (0..count).collect();
        container.moves = 0;

        resort(&mut container, &mut ordered, &order_by, |h| {
            FieldValue::from(&rows[*h])
        });

        let expected = reference_order(&rows, &(0..count).collect::<Vec<_>>(), &order_by);
        assert_eq!(container.children(), expected, "round {round}");
        assert_eq!(ordered, expected, "round {round}: mirror out of step");
        assert_eq!(
            container.moves,
            count.saturating_sub(1),
            "round {round}: expected minimal moves for {count} children"
        );
    }
}

#[test]
fn differential_incremental_insert_matches_stable_sort() {
    let mut rng = Lcg::new(0xBEEF);
    for round in 0..64 {
        let count = rng.range(24) as usize;
        let rows = random_rows(&mut rng, count);
        let order_by = parse_order_by("group, id DESC");

        let mut container = ListContainer::new();
        let mut ordered: Vec<usize> = Vec::new();
        for handle in 0..count {
            insert(&mut container, &mut ordered, &[handle], &order_by, |h| {
                FieldValue::from(&rows[*h])
            });
        }

        // Appending on ties makes per-arrival insertion agree with the
        // stable sort of the arrival sequence.
        let expected = reference_order(&rows, &(0..count).collect::<Vec<_>>(), &order_by);
        assert_eq!(container.children(), expected, "round {round}");
        assert_eq!(ordered, expected, "round {round}: mirror out of step");
    }
}

#[test]
fn differential_insert_then_resort_roundtrip() {
    let mut rng = Lcg::new(0xC0FFEE);
    for round in 0..32 {
        let count = rng.range(16) as usize;
        let rows = random_rows(&mut rng, count);
        let first = parse_order_by("id");
        let second = parse_order_by("group, id");

        let mut container = ListContainer::new();
        let mut ordered: Vec<usize> = Vec::new();
        let all: Vec<usize> = (0..count).collect();
        insert(&mut container, &mut ordered, &all, &first, |h| {
            FieldValue::from(&rows[*h])
        });

        resort(&mut container, &mut ordered, &second, |h| {
            FieldValue::from(&rows[*h])
        });

        let items = mapped(&rows, &ordered);
        for pair in items.windows(2) {
            assert_ne!(
                compare_by(&pair[0], &pair[1], &second),
                Ordering::Greater,
                "round {round}: inversion after resort"
            );
        }
        assert_eq!(container.children(), ordered, "round {round}");
    }
}

struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    fn range(&mut self, n: u64) -> u64 {
        if n == 0 {
            0
        } else {
            self.next_u64() % n
        }
    }
}
