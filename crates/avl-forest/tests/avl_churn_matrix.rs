use std::collections::BTreeSet;

use avl_forest::avl::{insert, remove};
use avl_forest::{Arena, AvlNode, AvlSet};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

fn height_bound(n: usize) -> i32 {
    (1.44 * ((n + 2) as f64).log2()).ceil() as i32
}

#[test]
fn avl_churn_matches_btree_set_matrix() {
    for seed in [1u64, 7, 42, 2024] {
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
        let mut set = AvlSet::new();
        let mut model = BTreeSet::new();

        for step in 0..5_000 {
            let v: i32 = rng.gen_range(-1_000..1_000);
            if rng.gen_bool(0.6) {
                assert_eq!(set.add(v).is_ok(), model.insert(v), "seed {seed} step {step}");
            } else {
                assert_eq!(set.remove(&v).is_ok(), model.remove(&v), "seed {seed} step {step}");
            }
            if step % 250 == 0 {
                set.assert_valid().unwrap();
            }
            assert!(set.height() <= height_bound(set.size()));
        }

        set.assert_valid().unwrap();
        let contents: Vec<i32> = set.iter().copied().collect();
        let expected: Vec<i32> = model.into_iter().collect();
        assert_eq!(contents, expected);
    }
}

#[test]
fn avl_ladder_insert_delete_matrix() {
    let mut set = AvlSet::new();
    for i in 0..300 {
        set.add(i).unwrap();
        set.assert_valid().unwrap();
    }
    assert_eq!(set.size(), 300);

    for i in (0..300).step_by(3) {
        set.remove(&i).unwrap();
        set.assert_valid().unwrap();
    }

    for i in 0..300 {
        assert_eq!(set.has(&i), i % 3 != 0);
    }

    for i in (0..300).rev() {
        if i % 3 != 0 {
            set.remove(&i).unwrap();
            assert!(set.is_balanced());
        }
    }
    assert!(set.is_empty());
    set.assert_valid().unwrap();
}

#[test]
fn avl_churn_reuses_arena_slots_matrix() {
    let cmp = |a: &i32, b: &i32| a.cmp(b);
    let mut arena: Arena<AvlNode<i32>> = Arena::new();
    let mut root = None;
    for v in 0..100 {
        root = Some(insert(&mut arena, root, v, &cmp).unwrap());
    }
    assert_eq!(arena.slot_count(), 100);

    let mut rng = Xoshiro256StarStar::seed_from_u64(99);
    for _ in 0..1_000 {
        let v = rng.gen_range(0..100);
        root = remove(&mut arena, root, &v, &cmp).unwrap();
        root = Some(insert(&mut arena, root, v, &cmp).unwrap());
    }
    assert_eq!(arena.len(), 100);
    assert_eq!(arena.slot_count(), 100);
}

#[test]
fn avl_drop_releases_every_value_once_matrix() {
    use std::rc::Rc;

    type Tracked = (i32, Rc<()>);

    let tracker = Rc::new(());
    let mut set = AvlSet::<Tracked, _>::with_comparator(|a: &Tracked, b: &Tracked| a.0.cmp(&b.0));
    for i in 0..64 {
        set.add((i, Rc::clone(&tracker))).unwrap();
    }
    assert_eq!(Rc::strong_count(&tracker), 65);

    for i in 0..16 {
        set.remove(&(i * 4, Rc::clone(&tracker))).unwrap();
    }
    assert_eq!(Rc::strong_count(&tracker), 49);

    assert!(set.add((5, Rc::clone(&tracker))).is_err());
    assert_eq!(Rc::strong_count(&tracker), 49);

    drop(set);
    assert_eq!(Rc::strong_count(&tracker), 1);
}
