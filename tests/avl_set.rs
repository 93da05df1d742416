use std::collections::BTreeSet;

use avl_arena::{AvlSet, Config, InsertStatus};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 2_000;

#[derive(Debug, Clone)]
enum SetOp {
    Insert(u16),
    Remove(u16),
    Contains(u16),
}

fn set_op_strategy() -> impl Strategy<Value = SetOp> {
    prop_oneof![
        3 => (0u16..400).prop_map(SetOp::Insert),
        2 => (0u16..400).prop_map(SetOp::Remove),
        1 => (0u16..400).prop_map(SetOp::Contains),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn set_ops_match_btreeset(ops in proptest::collection::vec(set_op_strategy(), TEST_SIZE)) {
        let mut avl = AvlSet::with_capacity(2);
        let mut model = BTreeSet::new();

        for op in &ops {
            match *op {
                SetOp::Insert(v) => {
                    prop_assert_eq!(avl.insert(v).is_inserted(), model.insert(v), "insert({})", v);
                }
                SetOp::Remove(v) => {
                    prop_assert_eq!(avl.remove(&v), model.remove(&v), "remove({})", v);
                }
                SetOp::Contains(v) => {
                    prop_assert_eq!(avl.contains(&v), model.contains(&v), "contains({})", v);
                }
            }
            prop_assert_eq!(avl.len(), model.len());
        }

        prop_assert_eq!(avl.first(), model.first());
        prop_assert_eq!(avl.last(), model.last());
        prop_assert!(avl.iter().eq(model.iter()));
    }

    /// Every permutation of the same items produces the same set.
    #[test]
    fn insertion_order_does_not_matter(items in Just((0..128).collect::<Vec<u8>>()).prop_shuffle()) {
        let shuffled: AvlSet<u8> = items.into_iter().collect();
        let ordered: AvlSet<u8> = (0..128).collect();
        prop_assert_eq!(&shuffled, &ordered);
        prop_assert_eq!(shuffled.len(), 128);
        prop_assert!(shuffled.height() <= 9);
    }

    /// Inserting anything twice changes nothing the second time.
    #[test]
    fn duplicate_inserts_are_idempotent(items in proptest::collection::vec(any::<i16>(), 0..300)) {
        let mut set = AvlSet::new();
        for &item in &items {
            let _ = set.insert(item);
        }
        let before = set.clone();
        for &item in &items {
            prop_assert_eq!(set.insert(item), InsertStatus::Rejected { key: item, value: () });
        }
        prop_assert_eq!(set, before);
    }
}

#[test]
fn names_scenario() {
    let mut names = AvlSet::new();
    for name in ["alice", "bob", "carl", "david", "eve"] {
        assert!(names.insert(name).is_inserted());
    }
    assert_eq!(names.len(), 5);

    assert!(names.remove("carl"));
    assert_eq!(names.len(), 4);
    assert!(!names.contains("carl"));

    assert!(names.remove("alice"));
    assert_eq!(names.len(), 3);

    assert!(names.insert("carl").is_inserted());
    assert_eq!(names.len(), 4);

    let sorted: Vec<&str> = names.iter().copied().collect();
    assert_eq!(sorted, ["bob", "carl", "david", "eve"]);
}

#[test]
fn missing_item_removal_is_a_no_op() {
    let mut set = AvlSet::from([1, 2, 3]);
    assert!(!set.remove(&7));
    assert_eq!(set.take(&7), None);
    assert_eq!(set.len(), 3);
}

#[test]
fn two_child_removal_keeps_order() {
    // A perfect tree of height four: every internal node has two children.
    let mut set: AvlSet<u32> = (1..=15).collect();
    assert_eq!(set.height(), 4);

    for target in [8, 4, 12, 2] {
        assert_eq!(set.take(&target), Some(target));
        assert!(!set.contains(&target));
    }

    let remaining: Vec<u32> = set.iter().copied().collect();
    assert_eq!(remaining, [1, 3, 5, 6, 7, 9, 10, 11, 13, 14, 15]);
}

#[test]
fn freed_slots_are_reused_before_growth() {
    let mut set = AvlSet::with_config(Config::default().with_reserve(4));
    for item in 0..4 {
        let _ = set.insert(item);
    }
    assert_eq!(set.capacity(), 4);

    for round in 0..100 {
        assert!(set.remove(&(round % 4)));
        assert!(set.insert(round % 4).is_inserted());
    }
    assert_eq!(set.capacity(), 4);

    let _ = set.insert(4);
    assert_eq!(set.capacity(), 8);
}

#[test]
fn get_returns_the_stored_item() {
    let set = AvlSet::from([String::from("apple"), String::from("pear")]);
    assert_eq!(set.get("pear").map(String::as_str), Some("pear"));
    assert_eq!(set.get("plum"), None);
}

#[test]
fn pop_ends_and_iterate_backwards() {
    let mut set = AvlSet::from([5, 1, 4, 2, 3]);
    assert_eq!(set.iter().rev().copied().collect::<Vec<_>>(), [5, 4, 3, 2, 1]);
    assert_eq!(set.pop_first(), Some(1));
    assert_eq!(set.pop_last(), Some(5));
    assert_eq!(set.into_iter().collect::<Vec<_>>(), [2, 3, 4]);
}

#[test]
fn debug_lists_items_in_order() {
    let set = AvlSet::from(['c', 'a', 'b']);
    assert_eq!(format!("{set:?}"), "{'a', 'b', 'c'}");
}
