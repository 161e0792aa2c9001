//! Unit tests for RecursiveBinarySearchTree.
//!
//! These tests cover duplicate handling, lookup, the edge-count depth
//! convention and in-order traversal.

use edu_collections::collections::{BinarySearchTree, RecursiveBinarySearchTree};
use rstest::{fixture, rstest};

#[fixture]
fn balanced() -> RecursiveBinarySearchTree<i32> {
    [50, 30, 70, 20, 40, 60, 80].into_iter().collect()
}

// =============================================================================
// insert
// =============================================================================

#[rstest]
fn test_new_tree_is_empty() {
    let tree: RecursiveBinarySearchTree<i32> = RecursiveBinarySearchTree::new();
    assert_eq!(tree.size(), 0);
    assert_eq!(tree.depth(), 0);
    assert!(tree.is_empty());
}

#[rstest]
fn test_insert_reports_new_values() {
    let mut tree = RecursiveBinarySearchTree::new();
    assert!(tree.insert(10));
    assert!(tree.insert(5));
    assert!(tree.insert(15));
    assert_eq!(tree.size(), 3);
}

#[rstest]
fn test_duplicate_insert_is_noop(mut balanced: RecursiveBinarySearchTree<i32>) {
    let depth = balanced.depth();
    assert!(!balanced.insert(40));
    assert_eq!(balanced.size(), 7);
    assert_eq!(balanced.depth(), depth);
    for value in [50, 30, 70, 20, 40, 60, 80] {
        assert!(balanced.contains(&value));
    }
}

// =============================================================================
// contains
// =============================================================================

#[rstest]
#[case(50, true)]
#[case(20, true)]
#[case(80, true)]
#[case(45, false)]
#[case(0, false)]
#[case(100, false)]
fn test_contains(
    balanced: RecursiveBinarySearchTree<i32>,
    #[case] element: i32,
    #[case] expected: bool,
) {
    assert_eq!(balanced.contains(&element), expected);
}

#[rstest]
fn test_contains_on_empty() {
    let tree: RecursiveBinarySearchTree<i32> = RecursiveBinarySearchTree::new();
    assert!(!tree.contains(&1));
}

// =============================================================================
// depth
// =============================================================================

#[rstest]
fn test_single_node_depth_is_zero() {
    let mut tree = RecursiveBinarySearchTree::new();
    tree.insert("root");
    assert_eq!(tree.depth(), 0);
}

#[rstest]
fn test_balanced_depth(balanced: RecursiveBinarySearchTree<i32>) {
    assert_eq!(balanced.depth(), 2);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(10)]
#[case(500)]
fn test_increasing_inserts_form_chain(#[case] count: u32) {
    let tree: RecursiveBinarySearchTree<u32> = (0..count).collect();
    assert_eq!(tree.size(), count as usize);
    assert_eq!(tree.depth(), count as usize - 1);
}

#[rstest]
fn test_depth_follows_longest_branch() {
    let tree: RecursiveBinarySearchTree<i32> = [10, 5, 20, 25, 30, 27].into_iter().collect();
    // 10 -> 20 -> 25 -> 30 -> 27
    assert_eq!(tree.depth(), 4);
}

// =============================================================================
// in_order_traversal
// =============================================================================

#[rstest]
fn test_in_order_traversal_is_sorted(balanced: RecursiveBinarySearchTree<i32>) {
    let mut visited = Vec::new();
    balanced.in_order_traversal(|value| visited.push(*value));
    assert_eq!(visited, vec![20, 30, 40, 50, 60, 70, 80]);
}

#[rstest]
fn test_in_order_traversal_on_empty_visits_nothing() {
    let tree: RecursiveBinarySearchTree<i32> = RecursiveBinarySearchTree::new();
    let mut calls = 0;
    tree.in_order_traversal(|_| calls += 1);
    assert_eq!(calls, 0);
}

#[rstest]
fn test_in_order_traversal_of_strings() {
    let tree: RecursiveBinarySearchTree<String> = ["pear", "apple", "fig", "apple"]
        .into_iter()
        .map(String::from)
        .collect();
    let mut visited = Vec::new();
    tree.in_order_traversal(|value| visited.push(value.clone()));
    assert_eq!(visited, vec!["apple", "fig", "pear"]);
}

// =============================================================================
// Trait use
// =============================================================================

fn describe<S: BinarySearchTree<i32>>(tree: &S) -> (usize, usize, Vec<i32>) {
    let mut values = Vec::new();
    tree.in_order_traversal(|value| values.push(*value));
    (tree.size(), tree.depth(), values)
}

#[rstest]
fn test_generic_over_trait(balanced: RecursiveBinarySearchTree<i32>) {
    let (size, depth, values) = describe(&balanced);
    assert_eq!(size, 7);
    assert_eq!(depth, 2);
    assert_eq!(values.len(), 7);
}
