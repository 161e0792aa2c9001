//! Whole-file text resources located on a search path.
//!
//! [`ResourceReader`] resolves a relative resource name against an ordered
//! list of directories and loads the first match as text. Lines are joined
//! with a single `\n`, so line endings are normalized and the result never
//! ends with a newline.
//!
//! # Configuration
//!
//! The search path is either given explicitly or read from the
//! [`RESOURCE_PATH_VARIABLE`] environment variable, which uses the
//! platform's path-list syntax (`:` on Unix, `;` on Windows).
//!
//! # Examples
//!
//! ```rust,no_run
//! use edu_collections::resource::ResourceReader;
//!
//! let reader = ResourceReader::new(["fixtures", "/usr/share/edu"]);
//! let text = reader.read_whole_file("simple.txt")?;
//! println!("{text}");
//! # Ok::<(), edu_collections::ResourceError>(())
//! ```

use std::env;
use std::ffi::OsStr;
use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::ResourceError;

/// Environment variable holding the default resource search path.
pub const RESOURCE_PATH_VARIABLE: &str = "EDU_RESOURCE_PATH";

/// Loads text resources from an ordered list of directories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceReader {
    search_paths: Vec<PathBuf>,
}

impl ResourceReader {
    /// Creates a reader that searches `search_paths` in order.
    pub fn new<I, P>(search_paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            search_paths: search_paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a reader from a platform path list such as `a:b:c`.
    pub fn from_path_list(path_list: &OsStr) -> Self {
        Self::new(env::split_paths(path_list).filter(|path| !path.as_os_str().is_empty()))
    }

    /// Creates a reader from [`RESOURCE_PATH_VARIABLE`].
    ///
    /// An unset variable yields a reader with an empty search path, on which
    /// every lookup fails with [`ResourceError::NotFound`].
    pub fn from_env() -> Self {
        env::var_os(RESOURCE_PATH_VARIABLE)
            .map(|path_list| Self::from_path_list(&path_list))
            .unwrap_or_default()
    }

    /// Returns the directories searched, in order.
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Returns the path of the first file named `name` on the search path.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidName`] if `name` is empty, absolute or
    /// contains `..`, and [`ResourceError::NotFound`] if no search directory
    /// holds a matching file.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, ResourceError> {
        let relative = Path::new(name);
        if !is_contained(relative) {
            return Err(ResourceError::InvalidName {
                name: name.to_string(),
            });
        }

        let found = self
            .search_paths
            .iter()
            .map(|directory| directory.join(relative))
            .find(|candidate| candidate.is_file());

        match found {
            Some(path) => {
                debug!(resource = name, path = %path.display(), "resource resolved");
                Ok(path)
            }
            None => Err(ResourceError::NotFound {
                name: name.to_string(),
                searched: self.search_paths.clone(),
            }),
        }
    }

    /// Reads the whole resource `name` as text, joining its lines with `\n`.
    ///
    /// # Errors
    ///
    /// Fails as [`resolve`](Self::resolve) does, and with
    /// [`ResourceError::Io`] if the file cannot be read as UTF-8 text.
    pub fn read_whole_file(&self, name: &str) -> Result<String, ResourceError> {
        let path = self.resolve(name)?;
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(source) => return Err(ResourceError::Io { path, source }),
        };
        Ok(contents.lines().collect::<Vec<_>>().join("\n"))
    }
}

/// Reads the resource `name` using the search path from the environment.
///
/// # Errors
///
/// See [`ResourceReader::read_whole_file`].
pub fn read_whole_file(name: &str) -> Result<String, ResourceError> {
    ResourceReader::from_env().read_whole_file(name)
}

fn is_contained(relative: &Path) -> bool {
    !relative.as_os_str().is_empty()
        && relative
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("simple.txt", true)]
    #[case("nested/lines.txt", true)]
    #[case("./simple.txt", true)]
    #[case("", false)]
    #[case("../secret.txt", false)]
    #[case("nested/../../secret.txt", false)]
    #[case("/etc/passwd", false)]
    fn test_is_contained(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_contained(Path::new(name)), expected);
    }

    #[rstest]
    fn test_from_path_list_skips_empty_entries() {
        let joined = env::join_paths(["first", "", "second"]).unwrap();
        let reader = ResourceReader::from_path_list(&joined);
        assert_eq!(
            reader.search_paths(),
            &[PathBuf::from("first"), PathBuf::from("second")]
        );
    }

    #[rstest]
    fn test_empty_search_path_reports_not_found() {
        let reader = ResourceReader::default();
        assert!(matches!(
            reader.resolve("simple.txt"),
            Err(ResourceError::NotFound { searched, .. }) if searched.is_empty()
        ));
    }
}
