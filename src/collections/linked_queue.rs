#![allow(unsafe_code)]
//! FIFO queue over singly linked nodes.
//!
//! This module provides [`LinkedQueue`], a queue that keeps references to
//! both ends of its node chain so that [`add`](LinkedQueue::add) and
//! [`poll`](LinkedQueue::poll) run in constant time.
//!
//! # Safety
//!
//! The queue owns its nodes through the `head` chain of `Box`es. `tail` is a
//! non-owning pointer to the last node of that chain. The following
//! invariants are maintained:
//! - `head` and `tail` are both `None` exactly when the queue is empty
//! - when present, `tail` points to the node whose `next` is `None`
//! - `tail` is only dereferenced through `&mut self`, so no other borrow of
//!   the chain is alive at that point
//!
//! # Examples
//!
//! ```rust
//! use edu_collections::collections::LinkedQueue;
//!
//! let mut queue = LinkedQueue::new();
//! assert!(queue.is_empty());
//!
//! queue.add(1);
//! queue.add(2);
//! queue.add(3);
//! assert_eq!(queue.poll(), Some(1));
//! assert_eq!(queue.size(), 2);
//! ```

use std::fmt;
use std::iter::FromIterator;
use std::ptr::NonNull;

use super::Queue;

struct Node<T> {
    element: T,
    next: Option<Box<Self>>,
}

/// A FIFO queue backed by singly linked nodes.
///
/// # Time Complexity
///
/// | Operation  | Complexity |
/// |------------|------------|
/// | `add`      | O(1)       |
/// | `poll`     | O(1)       |
/// | `peek`     | O(1)       |
/// | `size`     | O(1)       |
/// | `is_empty` | O(1)       |
pub struct LinkedQueue<T> {
    head: Option<Box<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    size: usize,
}

// SAFETY: the queue exclusively owns every node it points to; `tail` never
// aliases memory outside the chain, so moving or sharing the queue is as
// safe as moving or sharing the elements themselves.
unsafe impl<T: Send> Send for LinkedQueue<T> {}
unsafe impl<T: Sync> Sync for LinkedQueue<T> {}

impl<T> LinkedQueue<T> {
    /// Creates a new empty queue.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            size: 0,
        }
    }

    /// Adds an element to the end of the queue.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use edu_collections::collections::LinkedQueue;
    ///
    /// let mut queue = LinkedQueue::new();
    /// queue.add("first");
    /// queue.add("second");
    /// assert_eq!(queue.peek(), Some(&"first"));
    /// ```
    pub fn add(&mut self, element: T) {
        let mut node = Box::new(Node {
            element,
            next: None,
        });
        let new_tail = NonNull::from(&mut *node);

        match self.tail {
            // SAFETY: `tail` points to the last node of the chain owned by
            // `self.head`, and `&mut self` guarantees exclusive access.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }

        self.tail = Some(new_tail);
        self.size += 1;
    }

    /// Removes and returns the element at the head of the queue.
    ///
    /// Returns `None` if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use edu_collections::collections::LinkedQueue;
    ///
    /// let mut queue: LinkedQueue<i32> = [1, 2].into_iter().collect();
    /// assert_eq!(queue.poll(), Some(1));
    /// assert_eq!(queue.poll(), Some(2));
    /// assert_eq!(queue.poll(), None);
    /// ```
    pub fn poll(&mut self) -> Option<T> {
        self.head.take().map(|head| {
            let Node { element, next } = *head;
            self.head = next;
            if self.head.is_none() {
                self.tail = None;
            }
            self.size -= 1;
            element
        })
    }

    /// Returns a reference to the element at the head without removing it.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.element)
    }

    /// Returns the number of elements in the queue.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns an iterator over the elements from head to tail.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> LinkedQueueIterator<'_, T> {
        LinkedQueueIterator {
            current: self.head.as_deref(),
            remaining: self.size,
        }
    }
}

impl<T> Queue<T> for LinkedQueue<T> {
    fn add(&mut self, element: T) {
        Self::add(self, element);
    }

    fn poll(&mut self) -> Option<T> {
        Self::poll(self)
    }

    fn size(&self) -> usize {
        Self::size(self)
    }

    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }
}

impl<T> Drop for LinkedQueue<T> {
    fn drop(&mut self) {
        // Unlink node by node so long chains do not recurse in `Box`'s drop.
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
        self.tail = None;
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of a [`LinkedQueue`].
pub struct LinkedQueueIterator<'a, T> {
    current: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for LinkedQueueIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_deref();
            self.remaining -= 1;
            &node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for LinkedQueueIterator<'_, T> {}

/// An owning iterator that polls a [`LinkedQueue`] until it is empty.
pub struct LinkedQueueIntoIterator<T> {
    queue: LinkedQueue<T>,
}

impl<T> Iterator for LinkedQueueIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.poll()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.size, Some(self.queue.size))
    }
}

impl<T> ExactSizeIterator for LinkedQueueIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for LinkedQueue<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for LinkedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<T> IntoIterator for LinkedQueue<T> {
    type Item = T;
    type IntoIter = LinkedQueueIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        LinkedQueueIntoIterator { queue: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedQueue<T> {
    type Item = &'a T;
    type IntoIter = LinkedQueueIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> Clone for LinkedQueue<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedQueue<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_queue_is_empty() {
        let queue: LinkedQueue<i32> = LinkedQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.size(), 0);
        assert!(queue.head.is_none());
        assert!(queue.tail.is_none());
    }

    #[rstest]
    fn test_add_single_sets_head_and_tail() {
        let mut queue = LinkedQueue::new();
        queue.add(7);
        assert_eq!(queue.peek(), Some(&7));
        assert!(queue.tail.is_some());
        assert_eq!(queue.size(), 1);
    }

    #[rstest]
    fn test_poll_last_clears_tail() {
        let mut queue = LinkedQueue::new();
        queue.add(1);
        assert_eq!(queue.poll(), Some(1));
        assert!(queue.head.is_none());
        assert!(queue.tail.is_none());
        assert!(queue.is_empty());
    }

    #[rstest]
    fn test_add_after_drain_reuses_empty_state() {
        let mut queue = LinkedQueue::new();
        queue.add(1);
        queue.poll();
        queue.add(2);
        queue.add(3);
        assert_eq!(queue.poll(), Some(2));
        assert_eq!(queue.poll(), Some(3));
        assert_eq!(queue.poll(), None);
    }

    #[rstest]
    fn test_iter_yields_fifo_order() {
        let queue: LinkedQueue<i32> = (1..=4).collect();
        let collected: Vec<&i32> = queue.iter().collect();
        assert_eq!(collected, vec![&1, &2, &3, &4]);
        assert_eq!(queue.iter().len(), 4);
    }

    #[rstest]
    fn test_debug() {
        let queue: LinkedQueue<i32> = (1..=3).collect();
        assert_eq!(format!("{queue:?}"), "[1, 2, 3]");
    }

    #[rstest]
    fn test_clone_is_independent() {
        let mut queue: LinkedQueue<i32> = (1..=3).collect();
        let cloned = queue.clone();
        queue.poll();
        assert_eq!(cloned.size(), 3);
        assert_eq!(queue.size(), 2);
    }

    #[rstest]
    fn test_drop_long_chain() {
        let queue: LinkedQueue<usize> = (0..200_000).collect();
        drop(queue);
    }
}
