//! Working collection of discovered paths.

use std::path::{Path, PathBuf};

/// Paths accumulated during discovery, consolidated before export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileList {
    paths: Vec<PathBuf>,
}

impl FileList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: impl Into<PathBuf>) {
        self.paths.push(path.into());
    }

    pub fn extend(&mut self, paths: impl IntoIterator<Item = PathBuf>) {
        self.paths.extend(paths);
    }

    /// Drop every entry equal to `path`. Returns true if any was removed.
    pub fn remove(&mut self, path: &Path) -> bool {
        let before = self.paths.len();
        self.paths.retain(|candidate| candidate.as_os_str() != path.as_os_str());
        self.paths.len() != before
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Deduplicate by exact path string and sort by path bytes.
    ///
    /// Ordering compares the whole path string, not path components, so
    /// `a.b` sorts before `a/b`.
    pub fn consolidate(mut self) -> Vec<PathBuf> {
        self.paths
            .sort_by(|left, right| left.as_os_str().cmp(right.as_os_str()));
        self.paths.dedup_by(|left, right| left.as_os_str() == right.as_os_str());
        self.paths
    }
}
