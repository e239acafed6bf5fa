//! Candidate discovery: directory scans and explicit reference lists.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use globset::{GlobBuilder, GlobMatcher};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::core::extension::{Extension, ExtensionFilter};
use crate::core::file_list::FileList;
use crate::core::reference::FileReference;
use crate::error::AggregateError;

/// One extension whose directory scan failed, fully or in part.
#[derive(Debug)]
pub struct ScanFailure {
    pub extension: Extension,
    pub error: anyhow::Error,
}

/// Result of scanning a root for every extension in a filter.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub files: FileList,
    pub failures: Vec<ScanFailure>,
}

/// Matches for one extension plus the walk errors hit along the way.
#[derive(Debug, Default)]
pub struct Enumeration {
    pub found: Vec<PathBuf>,
    pub errors: Vec<anyhow::Error>,
}

/// Lists the files under a root that match one extension.
pub trait Enumerate {
    fn enumerate(
        &mut self,
        root: &Path,
        extension: Extension,
        recurse: bool,
    ) -> Result<Enumeration>;
}

impl<F> Enumerate for F
where
    F: FnMut(&Path, Extension, bool) -> Result<Enumeration>,
{
    fn enumerate(
        &mut self,
        root: &Path,
        extension: Extension,
        recurse: bool,
    ) -> Result<Enumeration> {
        self(root, extension, recurse)
    }
}

/// Enumerates with a `walkdir` traversal of the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkEnumerator;

impl Enumerate for WalkEnumerator {
    fn enumerate(
        &mut self,
        root: &Path,
        extension: Extension,
        recurse: bool,
    ) -> Result<Enumeration> {
        enumerate_extension(root, extension, recurse)
    }
}

/// Canonicalize `root`; it must exist and be a directory.
pub fn resolve_root(root: &Path) -> Result<PathBuf, AggregateError> {
    let resolved = fs::canonicalize(root).map_err(|source| AggregateError::RootPath {
        path: root.to_path_buf(),
        source,
    })?;
    if !resolved.is_dir() {
        return Err(AggregateError::RootNotDirectory { path: resolved });
    }
    Ok(resolved)
}

/// Scan `root` once per extension.
///
/// Matches found before or after a walk error are kept; the errors for an
/// extension are recorded as one failure and the next extension is scanned.
pub fn scan_root(
    root: &Path,
    filter: &ExtensionFilter,
    recurse: bool,
    enumerator: &mut dyn Enumerate,
) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();
    for extension in filter.iter() {
        match enumerator.enumerate(root, extension, recurse) {
            Ok(enumeration) => {
                debug!(%extension, count = enumeration.found.len(), "extension enumerated");
                outcome.files.extend(enumeration.found);
                if let Some(error) = combine_errors(root, extension, enumeration.errors) {
                    warn!(
                        %extension,
                        root = %root.display(),
                        "enumeration incomplete: {error:#}"
                    );
                    outcome.failures.push(ScanFailure { extension, error });
                }
            }
            Err(error) => {
                warn!(%extension, root = %root.display(), "enumeration failed: {error:#}");
                outcome.failures.push(ScanFailure { extension, error });
            }
        }
    }
    outcome
}

/// Files under `root` whose name matches `*.<extension>`, ignoring case.
///
/// Only the root's direct children are considered unless `recurse` is set.
/// Entries that cannot be read are collected as errors; the walk continues.
pub fn enumerate_extension(
    root: &Path,
    extension: Extension,
    recurse: bool,
) -> Result<Enumeration> {
    let matcher = build_matcher(extension)?;
    let max_depth = if recurse { usize::MAX } else { 1 };
    let mut enumeration = Enumeration::default();
    for entry in WalkDir::new(root).min_depth(1).max_depth(max_depth) {
        match entry {
            Ok(entry) => {
                if is_file_entry(&entry) && matcher.is_match(entry.file_name()) {
                    enumeration.found.push(entry.into_path());
                }
            }
            Err(err) => enumeration.errors.push(err.into()),
        }
    }
    Ok(enumeration)
}

fn combine_errors(
    root: &Path,
    extension: Extension,
    mut errors: Vec<anyhow::Error>,
) -> Option<anyhow::Error> {
    match errors.len() {
        0 => None,
        1 => errors
            .pop()
            .map(|err| err.context(format!("walk {} for {}", root.display(), extension.glob()))),
        count => {
            let first = errors.swap_remove(0);
            Some(first.context(format!(
                "walk {} for {}: {} entries unreadable, first shown",
                root.display(),
                extension.glob(),
                count
            )))
        }
    }
}

/// Keep references whose extension is in `filter`; others are skipped.
pub fn select_references(references: &[FileReference], filter: &ExtensionFilter) -> FileList {
    let mut files = FileList::new();
    for reference in references {
        if filter.accepts(&reference.extension) {
            files.push(reference.path.clone());
        } else {
            debug!(
                path = %reference.path.display(),
                extension = %reference.extension,
                "reference skipped: extension not in filter"
            );
        }
    }
    files
}

fn build_matcher(extension: Extension) -> Result<GlobMatcher> {
    let glob = GlobBuilder::new(&extension.glob())
        .case_insensitive(true)
        .literal_separator(true)
        .build()
        .with_context(|| format!("compile glob {}", extension.glob()))?;
    Ok(glob.compile_matcher())
}

/// Regular files, including symlinks that resolve to one.
fn is_file_entry(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}
