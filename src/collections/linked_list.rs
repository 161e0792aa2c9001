#![allow(unsafe_code)]
//! Singly linked list with constant-time access to both ends.
//!
//! This module provides [`LinkedList`], a general-purpose list built from
//! singly linked nodes.
//!
//! # Overview
//!
//! `LinkedList` keeps references to its first and last nodes, so it offers:
//!
//! - O(1) append and prepend
//! - O(1) access to the first and last elements
//! - O(n) access to interior indices
//! - O(n) removal, except at index 0
//!
//! # Safety
//!
//! Nodes are owned through the `head` chain of `Box`es. `tail` is a
//! non-owning pointer kept alongside it. The following invariants are
//! maintained:
//! - `head` and `tail` are both `None` exactly when the list is empty
//! - when present, `tail` points to the node reachable from `head` whose
//!   `next` is `None`
//! - `size` equals the number of nodes reachable from `head`
//! - `tail` is dereferenced mutably only through `&mut self`, and shared
//!   references derived from it never outlive the `&self` borrow
//!
//! # Examples
//!
//! ```rust
//! use edu_collections::collections::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.insert(0, "a").unwrap();
//! list.insert(1, "c").unwrap();
//! list.insert(1, "b").unwrap();
//! assert_eq!(list.to_string(), "[a, b, c]");
//!
//! assert_eq!(list.remove(1), Ok("b"));
//! assert_eq!(list.get_last(), Ok(&"c"));
//! ```

use std::fmt;
use std::iter::FromIterator;
use std::mem;
use std::ptr::NonNull;

use super::List;
use crate::error::CollectionError;

/// Internal node structure for the linked list.
struct Node<T> {
    /// The element stored in this node.
    element: T,
    /// The exclusively owned successor (if any).
    next: Option<Box<Self>>,
}

/// A singly linked list.
///
/// # Time Complexity
///
/// | Operation              | Complexity            |
/// |------------------------|-----------------------|
/// | `add`                  | O(1)                  |
/// | `insert`               | O(1) at ends, else O(n) |
/// | `get` / `set`          | O(1) at ends, else O(n) |
/// | `get_first`/`get_last` | O(1)                  |
/// | `remove`               | O(1) at 0, else O(n)  |
/// | `contains`             | O(n)                  |
/// | `size` / `is_empty`    | O(1)                  |
/// | `clear`                | O(n)                  |
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    size: usize,
}

// SAFETY: the list exclusively owns every node it points to; `tail` never
// aliases memory outside the chain.
unsafe impl<T: Send> Send for LinkedList<T> {}
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T> LinkedList<T> {
    /// Creates a new empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use edu_collections::collections::LinkedList;
    ///
    /// let list: LinkedList<i32> = LinkedList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            size: 0,
        }
    }

    /// Appends an element to the end of the list.
    ///
    /// # Complexity
    ///
    /// O(1)
    pub fn add(&mut self, element: T) {
        let mut node = Box::new(Node {
            element,
            next: None,
        });
        let new_tail = NonNull::from(&mut *node);

        match self.tail {
            // SAFETY: `tail` points to the last node of the chain owned by
            // `self.head`; `&mut self` guarantees exclusive access.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }

        self.tail = Some(new_tail);
        self.size += 1;
    }

    /// Inserts an element at `index`, shifting later elements right.
    ///
    /// Index 0 prepends and index `size` appends, both in constant time.
    /// Interior indices walk to the predecessor node.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] if `index > size`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use edu_collections::collections::LinkedList;
    ///
    /// let mut list: LinkedList<i32> = [1, 3].into_iter().collect();
    /// list.insert(1, 2).unwrap();
    /// assert_eq!(list.get(1), Ok(&2));
    /// assert!(list.insert(10, 4).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, element: T) -> Result<(), CollectionError> {
        CollectionError::check_position(index, self.size)?;

        if index == self.size {
            self.add(element);
        } else if index == 0 {
            self.head = Some(Box::new(Node {
                element,
                next: self.head.take(),
            }));
            self.size += 1;
        } else {
            let size = self.size;
            let predecessor = self
                .node_at_mut(index - 1)
                .ok_or(CollectionError::IndexOutOfBounds { index, size })?;
            let successor = predecessor.next.take();
            predecessor.next = Some(Box::new(Node {
                element,
                next: successor,
            }));
            self.size += 1;
        }
        Ok(())
    }

    /// Replaces the element at `index`, returning the previous element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] if `index >= size`.
    pub fn set(&mut self, index: usize, element: T) -> Result<T, CollectionError> {
        CollectionError::check_index(index, self.size)?;
        let size = self.size;

        let slot = if index == size - 1 {
            self.last_mut()
        } else {
            self.node_at_mut(index).map(|node| &mut node.element)
        };

        slot.map(|slot| mem::replace(slot, element))
            .ok_or(CollectionError::IndexOutOfBounds { index, size })
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] if `index >= size`.
    pub fn get(&self, index: usize) -> Result<&T, CollectionError> {
        CollectionError::check_index(index, self.size)?;

        let element = if index == self.size - 1 {
            self.last()
        } else {
            self.node_at(index).map(|node| &node.element)
        };

        element.ok_or(CollectionError::IndexOutOfBounds {
            index,
            size: self.size,
        })
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::NoSuchElement`] if the list is empty.
    pub fn get_first(&self) -> Result<&T, CollectionError> {
        self.head
            .as_ref()
            .map(|node| &node.element)
            .ok_or(CollectionError::NoSuchElement)
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::NoSuchElement`] if the list is empty.
    pub fn get_last(&self) -> Result<&T, CollectionError> {
        self.last().ok_or(CollectionError::NoSuchElement)
    }

    /// Removes and returns the element at `index`.
    ///
    /// Removing index 0 is O(1). Any other index walks to the predecessor,
    /// which becomes the new last node when the removed one was last.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] if `index >= size`.
    pub fn remove(&mut self, index: usize) -> Result<T, CollectionError> {
        CollectionError::check_index(index, self.size)?;
        let size = self.size;
        let out_of_bounds = CollectionError::IndexOutOfBounds { index, size };

        if index == 0 {
            return self.pop_front().ok_or(out_of_bounds);
        }

        let predecessor = self.node_at_mut(index - 1).ok_or(out_of_bounds.clone())?;
        let mut removed = predecessor.next.take().ok_or(out_of_bounds)?;
        predecessor.next = removed.next.take();
        let new_tail = predecessor.next.is_none().then(|| NonNull::from(predecessor));

        if new_tail.is_some() {
            self.tail = new_tail;
        }
        self.size -= 1;
        Ok(removed.element)
    }

    /// Returns `true` if an element equal to `element` is stored.
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|candidate| candidate == element)
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of elements in the list.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Removes every element, releasing all nodes.
    pub fn clear(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
        self.tail = None;
        self.size = 0;
    }

    /// Returns an iterator over references to the elements in index order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use edu_collections::collections::LinkedList;
    ///
    /// let list: LinkedList<i32> = (1..=3).collect();
    /// let collected: Vec<&i32> = list.iter().collect();
    /// assert_eq!(collected, vec![&1, &2, &3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> LinkedListIterator<'_, T> {
        LinkedListIterator {
            current: self.head.as_deref(),
            remaining: self.size,
        }
    }

    fn pop_front(&mut self) -> Option<T> {
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

    fn last(&self) -> Option<&T> {
        // SAFETY: `tail` points into the chain owned by `self`; the returned
        // reference is bounded by the `&self` borrow.
        self.tail.map(|tail| unsafe { &tail.as_ref().element })
    }

    fn last_mut(&mut self) -> Option<&mut T> {
        // SAFETY: as in `last`, with exclusivity guaranteed by `&mut self`.
        self.tail.map(|mut tail| unsafe { &mut tail.as_mut().element })
    }

    fn node_at(&self, index: usize) -> Option<&Node<T>> {
        let mut current = self.head.as_deref();
        for _ in 0..index {
            current = current?.next.as_deref();
        }
        current
    }

    fn node_at_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        let mut current = self.head.as_deref_mut();
        for _ in 0..index {
            current = current?.next.as_deref_mut();
        }
        current
    }
}

impl<T> List<T> for LinkedList<T> {
    fn add(&mut self, element: T) {
        Self::add(self, element);
    }

    fn insert(&mut self, index: usize, element: T) -> Result<(), CollectionError> {
        Self::insert(self, index, element)
    }

    fn set(&mut self, index: usize, element: T) -> Result<T, CollectionError> {
        Self::set(self, index, element)
    }

    fn get(&self, index: usize) -> Result<&T, CollectionError> {
        Self::get(self, index)
    }

    fn get_first(&self) -> Result<&T, CollectionError> {
        Self::get_first(self)
    }

    fn get_last(&self) -> Result<&T, CollectionError> {
        Self::get_last(self)
    }

    fn remove(&mut self, index: usize) -> Result<T, CollectionError> {
        Self::remove(self, index)
    }

    fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        Self::contains(self, element)
    }

    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    fn size(&self) -> usize {
        Self::size(self)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of a [`LinkedList`].
pub struct LinkedListIterator<'a, T> {
    current: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for LinkedListIterator<'a, T> {
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

impl<T> ExactSizeIterator for LinkedListIterator<'_, T> {}

/// An owning iterator over elements of a [`LinkedList`].
pub struct LinkedListIntoIterator<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for LinkedListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.size, Some(self.list.size))
    }
}

impl<T> ExactSizeIterator for LinkedListIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for LinkedList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = LinkedListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        LinkedListIntoIterator { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = LinkedListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

/// Creates a [`LinkedList`] containing the given elements in order.
///
/// # Examples
///
/// ```rust
/// use edu_collections::linked_list;
///
/// let list = linked_list![1, 2, 3];
/// assert_eq!(list.size(), 3);
/// assert_eq!(list.get_last(), Ok(&3));
/// ```
#[macro_export]
macro_rules! linked_list {
    () => {
        $crate::collections::LinkedList::new()
    };
    ($($element:expr),+ $(,)?) => {{
        let mut list = $crate::collections::LinkedList::new();
        $(list.add($element);)+
        list
    }};
}
