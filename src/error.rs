//! Error types shared by the containers in this crate.
//!
//! Every index-taking or end-accessing operation reports its precondition
//! violations through [`CollectionError`]. A rejected operation never leaves
//! the container partially modified.

use std::path::PathBuf;

/// Errors raised by the list and array containers.
///
/// # Examples
///
/// ```rust
/// use edu_collections::CollectionError;
///
/// let error = CollectionError::IndexOutOfBounds { index: 3, size: 3 };
/// assert_eq!(format!("{error}"), "index 3 is out of bounds for size 3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CollectionError {
    /// The index lies outside the range accepted by the operation.
    #[error("index {index} is out of bounds for size {size}")]
    IndexOutOfBounds {
        /// The rejected index.
        index: usize,
        /// The size of the container when the index was rejected.
        size: usize,
    },
    /// The container holds no element to return.
    #[error("no such element: the container is empty")]
    NoSuchElement,
    /// A buffer capacity that cannot hold any element was requested.
    #[error("invalid capacity {capacity}: capacity must be positive")]
    InvalidCapacity {
        /// The rejected capacity.
        capacity: usize,
    },
}

impl CollectionError {
    /// Checks `index` against the half-open range `[0, size)`.
    ///
    /// Used by `get`, `set` and `remove`.
    pub(crate) const fn check_index(index: usize, size: usize) -> Result<(), Self> {
        if index < size {
            Ok(())
        } else {
            Err(Self::IndexOutOfBounds { index, size })
        }
    }

    /// Checks `index` against the closed range `[0, size]`.
    ///
    /// Used by positional insertion, where `index == size` appends.
    pub(crate) const fn check_position(index: usize, size: usize) -> Result<(), Self> {
        if index <= size {
            Ok(())
        } else {
            Err(Self::IndexOutOfBounds { index, size })
        }
    }
}

/// Errors raised while locating or reading a text resource.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ResourceError {
    /// No search directory contains a file with the requested name.
    #[error("can't find resource `{name}` in {} search path(s)", .searched.len())]
    NotFound {
        /// The requested resource name.
        name: String,
        /// Directories that were searched, in order.
        searched: Vec<PathBuf>,
    },
    /// The resource name escapes its search directory.
    #[error("invalid resource name `{name}`: must be a relative path without `..`")]
    InvalidName {
        /// The rejected resource name.
        name: String,
    },
    /// The resource was found but could not be opened or read.
    #[error("can't open or read resource {}", .path.display())]
    Io {
        /// The resolved path of the resource.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}
