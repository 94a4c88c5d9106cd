extern crate ordered_trees;
extern crate rand;

use ordered_trees::avl_tree::AvlTree;
use rand::Rng;
use std::collections::BTreeSet;

fn assert_sorted(tree: &AvlTree<u32>) {
    let values = tree.in_order();
    for window in values.windows(2) {
        assert!(window[0] < window[1]);
    }
}

#[test]
fn int_test_avl_tree() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut tree = AvlTree::new();
    let mut expected = BTreeSet::new();
    for _ in 0..10000 {
        let value = rng.gen_range(0, 2000);

        if rng.gen::<bool>() {
            assert_eq!(tree.insert(value), expected.insert(value));
        } else {
            assert_eq!(tree.remove(&value), expected.remove(&value));
        }
        assert_eq!(tree.len(), expected.len());
    }

    assert!(tree.is_balanced());
    assert_sorted(&tree);
    assert_eq!(tree.into_iter().collect::<Vec<u32>>(), expected.into_iter().collect::<Vec<u32>>());
}

#[test]
fn int_test_avl_tree_balanced_after_every_operation() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([2, 3, 5, 7]);
    let mut tree = AvlTree::new();
    for _ in 0..2000 {
        let value = rng.gen_range(0, 300);
        if rng.gen_weighted_bool(3) {
            tree.remove(&value);
        } else {
            tree.insert(value);
        }
        assert!(tree.is_balanced());
        assert_sorted(&tree);
    }
}

#[test]
fn int_test_avl_tree_membership() {
    let mut tree = AvlTree::new();
    for value in 0..500u32 {
        tree.insert(value * 2);
    }
    for value in 0..250u32 {
        assert!(tree.remove(&(value * 4)));
    }
    for value in 0..1000u32 {
        let present = value % 2 == 0 && value % 4 != 0;
        assert_eq!(tree.contains(&value), present);
    }
}

#[test]
fn int_test_avl_tree_duplicate_insert() {
    let mut tree: AvlTree<u32> = (0..100).collect();
    let before = tree.pre_order().into_iter().cloned().collect::<Vec<u32>>();
    for value in 0..100 {
        assert!(!tree.insert(value));
    }
    assert_eq!(tree.len(), 100);
    assert_eq!(tree.pre_order().into_iter().cloned().collect::<Vec<u32>>(), before);
}

#[test]
fn int_test_avl_tree_insert_remove_inverse() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([4, 4, 4, 4]);
    let mut tree = AvlTree::new();
    for _ in 0..500 {
        tree.insert(rng.gen_range(0, 10000) * 2);
    }
    let before = tree.in_order().into_iter().cloned().collect::<Vec<u32>>();
    for _ in 0..100 {
        let value = rng.gen_range(0, 10000) * 2 + 1;
        assert!(tree.insert(value));
        assert!(tree.remove(&value));
    }
    assert_eq!(tree.in_order().into_iter().cloned().collect::<Vec<u32>>(), before);
}
