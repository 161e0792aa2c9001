//! # edu-collections
//!
//! Textbook mutable containers for Rust.
//!
//! ## Overview
//!
//! This library implements the classic containers taught in a first data
//! structures course, each as a small, self-contained type with explicit
//! error reporting:
//!
//! - **Queue**: FIFO queue over singly linked nodes
//! - **Linked List**: Singly linked list with O(1) access to both ends
//! - **Array List**: Contiguous buffer that grows by a fixed increment
//! - **Binary Search Tree**: Unbalanced, recursive search tree
//! - **Resources**: Whole-file text loading from a search path
//!
//! ## Feature Flags
//!
//! - `queue`: [`LinkedQueue`](collections::LinkedQueue)
//! - `linked-list`: [`LinkedList`](collections::LinkedList)
//! - `array-list`: [`ArrayList`](collections::ArrayList)
//! - `bst`: [`RecursiveBinarySearchTree`](collections::RecursiveBinarySearchTree)
//! - `resource`: [`ResourceReader`](resource::ResourceReader)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use edu_collections::prelude::*;
//!
//! let mut list = ArrayList::new();
//! list.add(1);
//! list.add(3);
//! list.insert(1, 2)?;
//! assert_eq!(list.get(1), Ok(&2));
//!
//! assert_eq!(
//!     list.get(3),
//!     Err(CollectionError::IndexOutOfBounds { index: 3, size: 3 })
//! );
//! # Ok::<(), CollectionError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers, their traits and the error types.
///
/// # Usage
///
/// ```rust
/// use edu_collections::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collections::*;
    pub use crate::error::*;

    #[cfg(feature = "resource")]
    pub use crate::resource::ResourceReader;
}

pub mod collections;
pub mod error;

#[cfg(feature = "resource")]
pub mod resource;

pub use error::{CollectionError, ResourceError};
