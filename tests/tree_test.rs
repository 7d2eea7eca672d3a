//! Structural tests: construction, arity bound, parent lookup

use rstest::rstest;

use karytree::domain::{BinaryTree, Index, KaryTree, TreeError};
use karytree::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn children_values<T: Clone, const K: usize>(tree: &KaryTree<T, K>, idx: Index) -> Vec<T> {
    tree.get_node(idx)
        .unwrap()
        .children()
        .iter()
        .map(|&child| tree.get_node(child).unwrap().value().clone())
        .collect()
}

// ============================================================
// Arity bound
// ============================================================

#[rstest]
#[case::one_extra(1)]
#[case::several_extra(3)]
fn given_full_parent_when_adding_child_then_children_unchanged(#[case] extra: i32) {
    let mut tree: KaryTree<i32, 2> = KaryTree::new();
    let root = tree.add_root(0);
    tree.add_sub_node(&0, 10);
    tree.add_sub_node(&0, 20);
    let before = children_values(&tree, root);

    for i in 0..extra {
        tree.add_sub_node(&0, 100 + i);
    }

    assert_eq!(children_values(&tree, root), before);
    assert_eq!(tree.len(), 3);
}

#[test]
fn given_full_parent_when_strictly_adding_then_arity_exceeded() {
    let mut tree: KaryTree<i32, 3> = KaryTree::new();
    tree.add_root(0);
    for child in 1..=3 {
        tree.try_add_sub_node(&0, child).unwrap();
    }

    let err = tree.try_add_sub_node(&0, 4).unwrap_err();
    assert_eq!(
        err,
        TreeError::ArityExceeded {
            parent: "0".to_string(),
            arity: 3
        }
    );
    assert_eq!(tree.len(), 4);
}

#[test]
fn given_tree_when_reading_arity_then_matches_const_parameter() {
    let binary: BinaryTree<u8> = BinaryTree::new();
    let quinary: KaryTree<u8, 5> = KaryTree::default();
    assert_eq!(binary.arity(), 2);
    assert_eq!(quinary.arity(), 5);
}

// ============================================================
// Parent lookup
// ============================================================

#[test]
fn given_absent_parent_when_adding_then_tree_unchanged() {
    let mut tree = BinaryTree::new();
    tree.add_root(1);
    tree.add_sub_node(&1, 2);
    let before: Vec<i32> = tree.iter_pre_order().copied().collect();

    tree.add_sub_node(&42, 3);

    assert_eq!(tree.iter_pre_order().copied().collect::<Vec<_>>(), before);
    assert!(!tree.contains(&3));
    assert_eq!(
        tree.try_add_sub_node(&42, 3),
        Err(TreeError::ParentNotFound("42".to_string()))
    );
}

#[test]
fn given_empty_tree_when_adding_sub_node_then_noop() {
    let mut tree: BinaryTree<i32> = BinaryTree::new();
    tree.add_sub_node(&1, 2);
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.root(), None);
}

#[test]
fn given_duplicate_values_when_adding_then_first_pre_order_match_receives_child() {
    //        1
    //      /   \
    //     7     2
    //           |
    //           7
    let mut tree = BinaryTree::new();
    tree.add_root(1);
    tree.add_sub_node(&1, 7);
    tree.add_sub_node(&1, 2);
    let deep_seven = tree.try_add_sub_node(&2, 7).unwrap();

    tree.add_sub_node(&7, 99);

    let shallow_seven = tree.find(&7).unwrap();
    assert_ne!(shallow_seven, deep_seven);
    assert_eq!(children_values(&tree, shallow_seven), vec![99]);
    assert!(children_values(&tree, deep_seven).is_empty());
}

#[test]
fn given_duplicate_in_earlier_subtree_when_adding_then_deeper_left_node_wins() {
    //        1
    //      /   \
    //     3     5
    //     |
    //     5
    // pre-order meets the left-hand 5 before the root's second child
    let mut tree = BinaryTree::new();
    tree.add_root(1);
    tree.add_sub_node(&1, 3);
    tree.add_sub_node(&1, 5);
    let left_five = tree.try_add_sub_node(&3, 5).unwrap();

    tree.add_sub_node(&5, 6);

    assert_eq!(children_values(&tree, left_five), vec![6]);
    assert_eq!(tree.iter_pre_order().copied().collect::<Vec<_>>(), vec![1, 3, 5, 6, 5]);
}

// ============================================================
// Root replacement and clear
// ============================================================

#[test]
fn given_existing_tree_when_adding_root_then_previous_graph_released() {
    let mut tree = BinaryTree::new();
    tree.add_root("old");
    tree.add_sub_node(&"old", "child");

    tree.add_root("new");

    assert_eq!(tree.len(), 1);
    assert_eq!(tree.iter_bfs().copied().collect::<Vec<_>>(), vec!["new"]);
    assert!(tree.find(&"child").is_none());
}

#[test]
fn given_tree_when_cleared_then_every_traversal_is_empty() {
    let mut tree = BinaryTree::new();
    tree.add_root(1);
    tree.add_sub_node(&1, 2);

    tree.clear();

    assert!(tree.is_empty());
    assert!(tree.begin_pre_order() == tree.end_pre_order());
    assert!(tree.begin_in_order() == tree.end_in_order());
    assert_eq!(tree.iter_heap().count(), 0);
}

#[test]
fn given_caller_value_when_added_then_tree_holds_its_own_copy() {
    let mut label = String::from("root");
    let mut tree: BinaryTree<String> = BinaryTree::new();
    tree.add_root(label.clone());

    label.push_str("-changed");

    assert_eq!(tree.iter_pre_order().next().map(String::as_str), Some("root"));
}

// ============================================================
// Queries
// ============================================================

#[test]
fn given_tree_when_querying_depth_and_leaves_then_reflects_shape() {
    let mut tree: KaryTree<i32, 3> = KaryTree::new();
    tree.add_root(1);
    for (parent, child) in [(1, 2), (1, 3), (2, 4), (4, 5)] {
        tree.add_sub_node(&parent, child);
    }

    assert_eq!(tree.depth(), 4);
    assert_eq!(tree.leaf_values(), vec![&5, &3]);
    let five = tree.find(&5).unwrap();
    let four = tree.find(&4).unwrap();
    assert_eq!(tree.get_node(five).unwrap().parent(), Some(four));
    assert!(tree.get_node(five).unwrap().is_leaf());
}
