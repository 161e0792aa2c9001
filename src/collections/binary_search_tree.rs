//! Unbalanced, recursive binary search tree.
//!
//! This module provides [`RecursiveBinarySearchTree`], a set of distinct
//! ordered values. Every operation descends from the root by comparison, one
//! call per level, and no rebalancing ever happens: the shape of the tree,
//! and therefore its depth, depends only on insertion order.
//!
//! For every node, all values in its left subtree compare less than its own
//! value and all values in its right subtree compare greater. Inserting a
//! value that compares equal to a stored one is a no-op.
//!
//! Recursion depth is bounded by the tree depth, which degenerates to the
//! number of values when they arrive in sorted order. [`iter`] and `Drop`
//! walk the tree with an explicit stack instead.
//!
//! [`iter`]: RecursiveBinarySearchTree::iter
//!
//! # Examples
//!
//! ```rust
//! use edu_collections::collections::RecursiveBinarySearchTree;
//!
//! let tree: RecursiveBinarySearchTree<i32> = [5, 3, 8, 3].into_iter().collect();
//! assert_eq!(tree.size(), 3);
//! assert_eq!(tree.depth(), 1);
//!
//! let sorted: Vec<&i32> = tree.iter().collect();
//! assert_eq!(sorted, vec![&3, &5, &8]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use super::BinarySearchTree;

struct Node<T> {
    value: T,
    left: Option<Box<Self>>,
    right: Option<Box<Self>>,
}

impl<T> Node<T> {
    const fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Number of nodes on the longest path starting at `node`.
    fn height(node: Option<&Self>) -> usize {
        node.map_or(0, |node| {
            1 + Self::height(node.left.as_deref()).max(Self::height(node.right.as_deref()))
        })
    }

    fn in_order<F>(node: Option<&Self>, visit: &mut F)
    where
        F: FnMut(&T),
    {
        if let Some(node) = node {
            Self::in_order(node.left.as_deref(), visit);
            visit(&node.value);
            Self::in_order(node.right.as_deref(), visit);
        }
    }
}

impl<T: Ord> Node<T> {
    /// Attaches `element` below `slot`, returning `false` on a duplicate.
    fn insert_into(slot: &mut Option<Box<Self>>, element: T) -> bool {
        match slot {
            None => {
                *slot = Some(Box::new(Self::leaf(element)));
                true
            }
            Some(node) => match element.cmp(&node.value) {
                Ordering::Greater => Self::insert_into(&mut node.right, element),
                Ordering::Less => Self::insert_into(&mut node.left, element),
                Ordering::Equal => false,
            },
        }
    }

    fn find<'a>(node: Option<&'a Self>, element: &T) -> Option<&'a Self> {
        let node = node?;
        match element.cmp(&node.value) {
            Ordering::Greater => Self::find(node.right.as_deref(), element),
            Ordering::Less => Self::find(node.left.as_deref(), element),
            Ordering::Equal => Some(node),
        }
    }
}

/// An unbalanced binary search tree holding distinct values.
///
/// # Time Complexity
///
/// | Operation            | Complexity |
/// |----------------------|------------|
/// | `insert`             | O(depth)   |
/// | `contains`           | O(depth)   |
/// | `size`               | O(1)       |
/// | `depth`              | O(n)       |
/// | `in_order_traversal` | O(n)       |
pub struct RecursiveBinarySearchTree<T> {
    root: Option<Box<Node<T>>>,
    size: usize,
}

impl<T> RecursiveBinarySearchTree<T> {
    /// Creates a new empty tree.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Returns the number of distinct values stored.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree holds no values.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of edges on the longest root-to-leaf path.
    ///
    /// The empty tree and a single node both have depth 0; `n` values
    /// inserted in increasing order form a chain of depth `n - 1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use edu_collections::collections::RecursiveBinarySearchTree;
    ///
    /// let chain: RecursiveBinarySearchTree<i32> = (1..=4).collect();
    /// assert_eq!(chain.depth(), 3);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        // Height counts nodes on the path; depth counts the edges between them.
        Node::height(self.root.as_deref()).saturating_sub(1)
    }

    /// Calls `visit` on every value in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use edu_collections::collections::RecursiveBinarySearchTree;
    ///
    /// let tree: RecursiveBinarySearchTree<i32> = [2, 1, 3].into_iter().collect();
    /// let mut sum = 0;
    /// tree.in_order_traversal(|value| sum += value);
    /// assert_eq!(sum, 6);
    /// ```
    pub fn in_order_traversal<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        Node::in_order(self.root.as_deref(), &mut visit);
    }

    /// Returns an iterator over the values in ascending order.
    #[must_use]
    pub fn iter(&self) -> BinarySearchTreeIterator<'_, T> {
        let mut iterator = BinarySearchTreeIterator {
            pending: Vec::new(),
            remaining: self.size,
        };
        iterator.descend_left(self.root.as_deref());
        iterator
    }
}

impl<T: Ord> RecursiveBinarySearchTree<T> {
    /// Inserts `element`, returning `true` if it was not already present.
    ///
    /// The size grows only when `true` is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use edu_collections::collections::RecursiveBinarySearchTree;
    ///
    /// let mut tree = RecursiveBinarySearchTree::new();
    /// assert!(tree.insert("m"));
    /// assert!(!tree.insert("m"));
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        let inserted = Node::insert_into(&mut self.root, element);
        if inserted {
            self.size += 1;
        }
        inserted
    }

    /// Returns `true` if a value equal to `element` is stored.
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        Node::find(self.root.as_deref(), element).is_some()
    }
}

impl<T: Ord> BinarySearchTree<T> for RecursiveBinarySearchTree<T> {
    fn insert(&mut self, element: T) -> bool {
        Self::insert(self, element)
    }

    fn contains(&self, element: &T) -> bool {
        Self::contains(self, element)
    }

    fn size(&self) -> usize {
        Self::size(self)
    }

    fn depth(&self) -> usize {
        Self::depth(self)
    }

    fn in_order_traversal<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        Self::in_order_traversal(self, visit);
    }
}

impl<T> Drop for RecursiveBinarySearchTree<T> {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An in-order iterator over references to values of a
/// [`RecursiveBinarySearchTree`].
pub struct BinarySearchTreeIterator<'a, T> {
    /// Nodes whose left subtree has been yielded but whose value has not.
    pending: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> BinarySearchTreeIterator<'a, T> {
    fn descend_left(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(current) = node {
            self.pending.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for BinarySearchTreeIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;
        self.descend_left(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for BinarySearchTreeIterator<'_, T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for RecursiveBinarySearchTree<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for RecursiveBinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for RecursiveBinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<'a, T> IntoIterator for &'a RecursiveBinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = BinarySearchTreeIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for RecursiveBinarySearchTree<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}
