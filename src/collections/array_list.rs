//! List over a contiguous, linearly growing buffer.
//!
//! This module provides [`ArrayList`], a list whose elements live in a
//! boxed slice of slots. Slots `[0, size)` hold live elements and the rest
//! are empty. When an insertion would overflow the buffer, a new buffer
//! [`DEFAULT_GROWTH`] slots larger is allocated and the live elements are
//! moved into it in order.
//!
//! Growth is linear, not geometric: appending is O(1) until the buffer is
//! full and O(n) on every growth event.
//!
//! # Examples
//!
//! ```rust
//! use edu_collections::collections::{ArrayList, DEFAULT_CAPACITY};
//!
//! let mut list = ArrayList::new();
//! for value in 0..=DEFAULT_CAPACITY {
//!     list.add(value);
//! }
//! assert_eq!(list.size(), DEFAULT_CAPACITY + 1);
//! assert_eq!(list.get(DEFAULT_CAPACITY), Ok(&DEFAULT_CAPACITY));
//! ```

use std::fmt;
use std::iter::{self, FromIterator};

use tracing::trace;

use super::List;
use crate::error::CollectionError;

/// Capacity of the buffer allocated by [`ArrayList::new`].
pub const DEFAULT_CAPACITY: usize = 5;

/// Number of slots added to the buffer on every growth event.
pub const DEFAULT_GROWTH: usize = DEFAULT_CAPACITY;

/// A list backed by a contiguous buffer.
///
/// # Time Complexity
///
/// | Operation              | Complexity                 |
/// |------------------------|----------------------------|
/// | `add`                  | O(1), O(n) when growing    |
/// | `insert`               | O(n)                       |
/// | `get` / `set`          | O(1)                       |
/// | `get_first`/`get_last` | O(1)                       |
/// | `remove`               | O(n)                       |
/// | `contains`             | O(n)                       |
/// | `clear`                | O(n)                       |
#[derive(Clone)]
pub struct ArrayList<T> {
    /// Backing slots; only `[0, size)` are occupied.
    buffer: Box<[Option<T>]>,
    /// Number of live elements.
    size: usize,
}

impl<T> ArrayList<T> {
    /// Creates an empty list with [`DEFAULT_CAPACITY`] slots.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: allocate(DEFAULT_CAPACITY),
            size: 0,
        }
    }

    /// Creates an empty list with `capacity` slots.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidCapacity`] if `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use edu_collections::CollectionError;
    /// use edu_collections::collections::ArrayList;
    ///
    /// let list: ArrayList<i32> = ArrayList::with_capacity(10).unwrap();
    /// assert_eq!(list.capacity(), 10);
    ///
    /// assert_eq!(
    ///     ArrayList::<i32>::with_capacity(0).err(),
    ///     Some(CollectionError::InvalidCapacity { capacity: 0 })
    /// );
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self, CollectionError> {
        if capacity == 0 {
            return Err(CollectionError::InvalidCapacity { capacity });
        }
        Ok(Self {
            buffer: allocate(capacity),
            size: 0,
        })
    }

    /// Returns the number of slots in the backing buffer.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Appends an element, growing the buffer if it is full.
    pub fn add(&mut self, element: T) {
        self.ensure_capacity();
        self.buffer[self.size] = Some(element);
        self.size += 1;
    }

    /// Inserts an element at `index`, shifting `[index, size)` one slot right.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] if `index > size`.
    pub fn insert(&mut self, index: usize, element: T) -> Result<(), CollectionError> {
        CollectionError::check_position(index, self.size)?;
        self.ensure_capacity();

        // The empty slot at `size` rotates down to `index`.
        self.buffer[index..=self.size].rotate_right(1);
        self.buffer[index] = Some(element);
        self.size += 1;
        Ok(())
    }

    /// Replaces the element at `index`, returning the previous element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] if `index >= size`.
    pub fn set(&mut self, index: usize, element: T) -> Result<T, CollectionError> {
        CollectionError::check_index(index, self.size)?;
        self.buffer[index]
            .replace(element)
            .ok_or(CollectionError::IndexOutOfBounds {
                index,
                size: self.size,
            })
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] if `index >= size`.
    pub fn get(&self, index: usize) -> Result<&T, CollectionError> {
        CollectionError::check_index(index, self.size)?;
        self.buffer[index]
            .as_ref()
            .ok_or(CollectionError::IndexOutOfBounds {
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
        if self.is_empty() {
            return Err(CollectionError::NoSuchElement);
        }
        self.get(0)
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::NoSuchElement`] if the list is empty.
    pub fn get_last(&self) -> Result<&T, CollectionError> {
        if self.is_empty() {
            return Err(CollectionError::NoSuchElement);
        }
        self.get(self.size - 1)
    }

    /// Removes and returns the element at `index`.
    ///
    /// Elements `[index + 1, size)` shift one slot left and the vacated
    /// trailing slot is left empty, so the buffer keeps no stale element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] if `index >= size`.
    pub fn remove(&mut self, index: usize) -> Result<T, CollectionError> {
        CollectionError::check_index(index, self.size)?;
        let removed = self.buffer[index]
            .take()
            .ok_or(CollectionError::IndexOutOfBounds {
                index,
                size: self.size,
            })?;

        self.buffer[index..self.size].rotate_left(1);
        self.size -= 1;
        Ok(removed)
    }

    /// Returns `true` if an element equal to `element` is stored.
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
        self.size == 0
    }

    /// Returns the number of elements in the list.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Removes every element, keeping the allocated buffer.
    ///
    /// Every occupied slot is emptied so removed elements are dropped now
    /// rather than retained by the buffer.
    pub fn clear(&mut self) {
        for slot in &mut self.buffer[..self.size] {
            *slot = None;
        }
        self.size = 0;
    }

    /// Returns an iterator over references to the elements in index order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> ArrayListIterator<'_, T> {
        ArrayListIterator {
            slots: self.buffer[..self.size].iter(),
        }
    }

    fn ensure_capacity(&mut self) {
        if self.size < self.buffer.len() {
            return;
        }

        let old_capacity = self.buffer.len();
        let new_capacity = old_capacity + DEFAULT_GROWTH;
        let mut grown = allocate(new_capacity);
        for (target, source) in grown.iter_mut().zip(&mut self.buffer[..self.size]) {
            *target = source.take();
        }
        self.buffer = grown;

        trace!(
            old_capacity,
            new_capacity,
            size = self.size,
            "array list buffer grown"
        );
    }
}

fn allocate<T>(capacity: usize) -> Box<[Option<T>]> {
    iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> List<T> for ArrayList<T> {
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

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of an [`ArrayList`].
pub struct ArrayListIterator<'a, T> {
    slots: std::slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for ArrayListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for ArrayListIterator<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().and_then(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for ArrayListIterator<'_, T> {}

/// An owning iterator over elements of an [`ArrayList`].
pub struct ArrayListIntoIterator<T> {
    slots: std::vec::IntoIter<Option<T>>,
}

impl<T> Iterator for ArrayListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().flatten()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> ExactSizeIterator for ArrayListIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for ArrayList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = ArrayListIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut slots = self.buffer.into_vec();
        slots.truncate(self.size);
        ArrayListIntoIterator {
            slots: slots.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = ArrayListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.buffer[..self.size] == other.buffer[..other.size]
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ArrayList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (position, element) in self.iter().enumerate() {
            if position > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

/// Creates an [`ArrayList`] containing the given elements in order.
///
/// The buffer is sized to fit the elements exactly.
///
/// # Examples
///
/// ```rust
/// use edu_collections::array_list;
///
/// let list = array_list![1, 2, 3];
/// assert_eq!(list.capacity(), 3);
/// assert_eq!(list.get(1), Ok(&2));
/// ```
#[macro_export]
macro_rules! array_list {
    () => {
        $crate::collections::ArrayList::new()
    };
    ($($element:expr),+ $(,)?) => {{
        let elements = [$($element),+];
        let mut list =
            $crate::collections::ArrayList::with_capacity(elements.len()).unwrap_or_default();
        list.extend(elements);
        list
    }};
}
