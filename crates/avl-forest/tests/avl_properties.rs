use std::collections::BTreeSet;

use avl_forest::{AvlError, AvlSet, TraversalOrder};
use proptest::prelude::*;

fn height_bound(n: usize) -> i32 {
    (1.44 * ((n + 2) as f64).log2()).ceil() as i32
}

#[derive(Clone, Debug)]
enum Op {
    Add(i16),
    Remove(i16),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<i16>().prop_map(|v| Op::Add(v % 64)),
        2 => any::<i16>().prop_map(|v| Op::Remove(v % 64)),
    ]
}

proptest! {
    /// Property: in-order traversal of distinct inserted values is their ascending sort
    #[test]
    fn prop_in_order_is_sorted(values in prop::collection::btree_set(any::<i32>(), 0..300)) {
        let mut shuffled: Vec<i32> = values.iter().copied().collect();
        shuffled.reverse();
        let shift = shuffled.len() / 3;
        shuffled.rotate_left(shift);

        let mut set = AvlSet::new();
        for v in &shuffled {
            prop_assert!(set.add(*v).is_ok());
        }
        let sorted: Vec<i32> = set.traverse(TraversalOrder::InOrder).copied().collect();
        let expected: Vec<i32> = values.into_iter().collect();
        prop_assert_eq!(sorted, expected);
    }

    /// Property: every operation keeps the AVL invariants and the height bound
    #[test]
    fn prop_mixed_operations_stay_balanced(ops in prop::collection::vec(arb_op(), 0..400)) {
        let mut set = AvlSet::new();
        let mut model = BTreeSet::new();
        for op in ops {
            match op {
                Op::Add(v) => {
                    let expected = if model.insert(v) { Ok(()) } else { Err(AvlError::DuplicateKey) };
                    prop_assert_eq!(set.add(v), expected);
                }
                Op::Remove(v) => {
                    let expected = if model.remove(&v) { Ok(()) } else { Err(AvlError::NotFound) };
                    prop_assert_eq!(set.remove(&v), expected);
                }
            }
            prop_assert!(set.is_balanced());
            prop_assert_eq!(set.assert_valid(), Ok(()));
            prop_assert!(set.height() <= height_bound(set.size()));
            prop_assert_eq!(set.size(), model.len());
        }
        let contents: Vec<i16> = set.iter().copied().collect();
        let expected: Vec<i16> = model.into_iter().collect();
        prop_assert_eq!(contents, expected);
    }

    /// Property: failed add/remove leave the traversal unchanged
    #[test]
    fn prop_failed_operations_are_no_ops(
        values in prop::collection::btree_set(-500i32..500, 1..100),
        probe in -600i32..600,
    ) {
        let mut set: AvlSet<i32> = values.iter().copied().collect();
        let before: Vec<i32> = set.iter().copied().collect();
        if values.contains(&probe) {
            prop_assert_eq!(set.add(probe), Err(AvlError::DuplicateKey));
        } else {
            prop_assert_eq!(set.remove(&probe), Err(AvlError::NotFound));
        }
        let after: Vec<i32> = set.iter().copied().collect();
        prop_assert_eq!(before, after);
    }

    /// Property: add(v) then remove(v) for an absent v restores the contents
    #[test]
    fn prop_add_remove_round_trip(
        values in prop::collection::btree_set(-500i32..500, 0..100),
        probe in -600i32..600,
    ) {
        prop_assume!(!values.contains(&probe));
        let mut set: AvlSet<i32> = values.iter().copied().collect();
        let before: Vec<i32> = set.iter().copied().collect();
        prop_assert!(set.add(probe).is_ok());
        prop_assert!(set.remove(&probe).is_ok());
        let after: Vec<i32> = set.iter().copied().collect();
        prop_assert_eq!(before, after);
        prop_assert!(set.is_balanced());
    }
}
