//! Test-only helpers for building scratch directory trees.

use std::fs;
use std::path::{Path, PathBuf};

/// Write `(relative path, contents)` pairs under `root`, creating directories.
pub fn write_files(root: &Path, files: &[(&str, &str)]) {
    for (relative, contents) in files {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, contents).expect("write fixture file");
    }
}

/// Read an output document as UTF-8.
pub fn read_output(path: &Path) -> String {
    fs::read_to_string(path).expect("read output document")
}

/// Expected section text for `path` with `contents` written verbatim.
pub fn expected_section(path: &Path, contents: &str) -> String {
    format!("\n\n=== File: {} ===\n{}", path.display(), contents)
}

/// Scratch directory whose path has symlinks resolved, matching scanned paths.
pub fn canonical_tempdir() -> (tempfile::TempDir, PathBuf) {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = fs::canonicalize(temp.path()).expect("canonicalize tempdir");
    (temp, root)
}
