//! Module search path registration.
//!
//! Notebooks conventionally live one level below the project root, so the
//! modules they import sit in the parent of the working directory.
//! Registration appends that parent to a caller-owned search path list
//! exactly once; re-running the bootstrap cell is a no-op.

use std::env;
use std::io::{self, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::NotebookError;

/// Ordered list of directories consulted when resolving importable modules.
///
/// The host environment owns the list for the lifetime of the process; the
/// helpers only read it and conditionally append to it. Entries are never
/// duplicated by [`add_parent_dir_to_path`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPath {
    entries: Vec<String>,
}

impl SearchPath {
    /// Create an empty search path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a search path from existing entries, preserving their order.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `dir` is already registered.
    pub fn contains(&self, dir: &str) -> bool {
        self.entries.iter().any(|entry| entry == dir)
    }

    /// Registered directories, in registration order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of registered directories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no directory has been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, dir: String) {
        self.entries.push(dir);
    }
}

/// Register the parent of the process working directory in `search_path`.
///
/// Prints a confirmation to stdout when a new entry is added. Returns the
/// registered directory, or `None` when it was already present.
pub fn add_parent_dir_to_path(
    search_path: &mut SearchPath,
) -> Result<Option<String>, NotebookError> {
    let cwd = env::current_dir().map_err(NotebookError::CurrentDir)?;
    add_parent_dir_to_path_with(search_path, &cwd, &mut io::stdout())
}

/// Register the parent of `cwd`, writing the confirmation to `out`.
///
/// Core of [`add_parent_dir_to_path`] with the working directory and the
/// output sink injected. Nothing is appended on any failure path.
pub fn add_parent_dir_to_path_with(
    search_path: &mut SearchPath,
    cwd: &Path,
    out: &mut impl Write,
) -> Result<Option<String>, NotebookError> {
    let parent = cwd
        .parent()
        .ok_or_else(|| NotebookError::NoParentDir(cwd.to_path_buf()))?;
    let dir = parent.to_string_lossy().into_owned();

    if search_path.contains(&dir) {
        debug!("Parent directory {} already registered, skipping", dir);
        return Ok(None);
    }

    writeln!(out, "Added parent directory {} to module search path", dir)
        .map_err(NotebookError::Write)?;
    search_path.push(dir.clone());
    Ok(Some(dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn registers_parent_of_notebook_dir() {
        let mut search_path = SearchPath::from_entries(["/usr/lib"]);
        let mut out = Vec::new();

        let added = add_parent_dir_to_path_with(
            &mut search_path,
            Path::new("/home/user/project/notebooks"),
            &mut out,
        )
        .unwrap();

        assert_eq!(added.as_deref(), Some("/home/user/project"));
        assert_eq!(search_path.entries(), ["/usr/lib", "/home/user/project"]);

        let message = String::from_utf8(out).unwrap();
        assert!(message.contains("/home/user/project"));
    }

    #[test]
    fn second_registration_is_silent() {
        let mut search_path = SearchPath::new();
        let mut out = Vec::new();
        let cwd = Path::new("/home/user/project/notebooks");

        add_parent_dir_to_path_with(&mut search_path, cwd, &mut out).unwrap();
        let repeat = add_parent_dir_to_path_with(&mut search_path, cwd, &mut out).unwrap();

        assert_eq!(repeat, None);
        assert_eq!(search_path.len(), 1);
        // Confirmation printed exactly once across both calls
        let message = String::from_utf8(out).unwrap();
        assert_eq!(message.matches("/home/user/project").count(), 1);
    }

    #[test]
    fn root_directory_has_no_parent() {
        let mut search_path = SearchPath::new();
        let mut out = Vec::new();

        let err = add_parent_dir_to_path_with(&mut search_path, Path::new("/"), &mut out)
            .unwrap_err();

        assert!(matches!(err, NotebookError::NoParentDir(_)));
        assert!(search_path.is_empty());
        assert!(out.is_empty());
    }

    #[test]
    fn registers_directories_that_exist_on_disk() {
        let project = TempDir::new().unwrap();
        let notebooks = project.path().join("notebooks");
        std::fs::create_dir(&notebooks).unwrap();

        let mut search_path = SearchPath::new();
        let mut out = Vec::new();
        let added = add_parent_dir_to_path_with(&mut search_path, &notebooks, &mut out)
            .unwrap()
            .unwrap();

        assert_eq!(added, project.path().to_string_lossy().into_owned());
        assert!(search_path.contains(&added));
    }

    #[test]
    fn convenience_wrapper_uses_process_working_directory() {
        let mut search_path = SearchPath::new();
        let added = add_parent_dir_to_path(&mut search_path).unwrap();

        let expected = env::current_dir()
            .unwrap()
            .parent()
            .unwrap()
            .to_string_lossy()
            .into_owned();
        assert_eq!(added.as_deref(), Some(expected.as_str()));
        assert!(search_path.contains(&expected));
    }

    #[test]
    fn search_path_serde_round_trip() {
        let search_path = SearchPath::from_entries(["/usr/lib", "/home/user/project"]);
        let json = serde_json::to_string(&search_path).unwrap();
        let restored: SearchPath = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, search_path);
    }

    proptest! {
        /// PROPERTY: registration is idempotent for any working directory
        #[test]
        fn prop_registration_idempotent(segments in proptest::collection::vec("[a-z]{1,8}", 1..5)) {
            let mut cwd = PathBuf::from("/");
            for segment in &segments {
                cwd.push(segment);
            }

            let mut search_path = SearchPath::new();
            let mut out = Vec::new();
            for _ in 0..3 {
                add_parent_dir_to_path_with(&mut search_path, &cwd, &mut out).unwrap();
            }

            prop_assert_eq!(search_path.len(), 1);
        }

        /// PROPERTY: pre-existing entries are preserved in order
        #[test]
        fn prop_existing_entries_untouched(existing in proptest::collection::vec("/[a-z]{1,8}", 0..4)) {
            let mut search_path = SearchPath::from_entries(existing.clone());
            let mut out = Vec::new();
            add_parent_dir_to_path_with(
                &mut search_path,
                Path::new("/home/user/project/notebooks"),
                &mut out,
            )
            .unwrap();

            prop_assert_eq!(&search_path.entries()[..existing.len()], &existing[..]);
        }
    }
}
