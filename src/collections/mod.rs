//! Mutable, exclusively-owned containers.
//!
//! This module provides four independent containers, each with a thin
//! textbook algorithm behind it:
//!
//! - [`LinkedQueue`]: FIFO queue over singly linked nodes
//! - [`LinkedList`]: Singly linked list with O(1) access to both ends
//! - [`ArrayList`]: List over a contiguous buffer with linear growth
//! - [`RecursiveBinarySearchTree`]: Unbalanced binary search tree
//!
//! The shared contracts live in the [`Queue`], [`List`] and
//! [`BinarySearchTree`] traits so callers can stay generic over the
//! representation.
//!
//! # Ownership
//!
//! Every container exclusively owns its first node (or its buffer), and
//! every node exclusively owns its successors. Dropping a container
//! releases the whole chain.
//!
//! # Examples
//!
//! ## `LinkedQueue`
//!
//! ```rust
//! use edu_collections::collections::{LinkedQueue, Queue};
//!
//! let mut queue = LinkedQueue::new();
//! queue.add(1);
//! queue.add(2);
//! assert_eq!(queue.poll(), Some(1));
//! assert_eq!(queue.size(), 1);
//! ```
//!
//! ## `List` implementations
//!
//! ```rust
//! use edu_collections::collections::{ArrayList, LinkedList, List};
//!
//! fn fill<L: List<&'static str>>(list: &mut L) {
//!     list.insert(0, "a").unwrap();
//!     list.insert(1, "c").unwrap();
//!     list.insert(1, "b").unwrap();
//! }
//!
//! let mut linked = LinkedList::new();
//! let mut array = ArrayList::new();
//! fill(&mut linked);
//! fill(&mut array);
//! assert_eq!(linked.to_string(), "[a, b, c]");
//! assert_eq!(array.to_string(), "[a, b, c]");
//! ```
//!
//! ## `RecursiveBinarySearchTree`
//!
//! ```rust
//! use edu_collections::collections::{BinarySearchTree, RecursiveBinarySearchTree};
//!
//! let mut tree = RecursiveBinarySearchTree::new();
//! assert!(tree.insert(2));
//! assert!(tree.insert(1));
//! assert!(!tree.insert(2));
//!
//! let mut visited = Vec::new();
//! tree.in_order_traversal(|value| visited.push(*value));
//! assert_eq!(visited, vec![1, 2]);
//! ```

use crate::error::CollectionError;

#[cfg(feature = "array-list")]
mod array_list;
#[cfg(feature = "bst")]
mod binary_search_tree;
#[cfg(feature = "linked-list")]
mod linked_list;
#[cfg(feature = "queue")]
mod linked_queue;

#[cfg(feature = "array-list")]
pub use array_list::{
    ArrayList, ArrayListIntoIterator, ArrayListIterator, DEFAULT_CAPACITY, DEFAULT_GROWTH,
};
#[cfg(feature = "bst")]
pub use binary_search_tree::{BinarySearchTreeIterator, RecursiveBinarySearchTree};
#[cfg(feature = "linked-list")]
pub use linked_list::{LinkedList, LinkedListIntoIterator, LinkedListIterator};
#[cfg(feature = "queue")]
pub use linked_queue::{LinkedQueue, LinkedQueueIntoIterator, LinkedQueueIterator};

// =============================================================================
// Queue
// =============================================================================

/// A first-in-first-out queue.
pub trait Queue<T> {
    /// Adds an element to the end of the queue.
    fn add(&mut self, element: T);

    /// Removes and returns the element at the head of the queue.
    ///
    /// Returns `None` if the queue is empty.
    fn poll(&mut self) -> Option<T>;

    /// Returns the number of elements in the queue.
    fn size(&self) -> usize;

    /// Returns `true` if the queue holds no elements.
    fn is_empty(&self) -> bool;
}

// =============================================================================
// List
// =============================================================================

/// An index-addressed sequence.
///
/// Valid indices for [`get`](List::get), [`set`](List::set) and
/// [`remove`](List::remove) are `[0, size)`. [`insert`](List::insert)
/// additionally accepts `size`, which appends.
pub trait List<T> {
    /// Appends an element to the end of the list.
    fn add(&mut self, element: T);

    /// Inserts an element at `index`, shifting later elements right.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] if `index > size`.
    fn insert(&mut self, index: usize, element: T) -> Result<(), CollectionError>;

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] if `index >= size`.
    fn set(&mut self, index: usize, element: T) -> Result<T, CollectionError>;

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] if `index >= size`.
    fn get(&self, index: usize) -> Result<&T, CollectionError>;

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::NoSuchElement`] if the list is empty.
    fn get_first(&self) -> Result<&T, CollectionError>;

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::NoSuchElement`] if the list is empty.
    fn get_last(&self) -> Result<&T, CollectionError>;

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] if `index >= size`.
    fn remove(&mut self, index: usize) -> Result<T, CollectionError>;

    /// Returns `true` if an element equal to `element` is stored.
    fn contains(&self, element: &T) -> bool
    where
        T: PartialEq;

    /// Returns `true` if the list holds no elements.
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the list.
    fn size(&self) -> usize;

    /// Removes every element.
    fn clear(&mut self);
}

// =============================================================================
// BinarySearchTree
// =============================================================================

/// A set of distinct ordered values kept in a binary search tree.
pub trait BinarySearchTree<T: Ord> {
    /// Inserts `element`, returning `false` if an equal value is present.
    fn insert(&mut self, element: T) -> bool;

    /// Returns `true` if a value equal to `element` is stored.
    fn contains(&self, element: &T) -> bool;

    /// Returns the number of stored values.
    fn size(&self) -> usize;

    /// Returns the number of edges on the longest root-to-leaf path.
    ///
    /// Both the empty tree and a single-node tree have depth 0.
    fn depth(&self) -> usize;

    /// Visits every value in ascending order.
    fn in_order_traversal<F>(&self, visit: F)
    where
        F: FnMut(&T);
}
