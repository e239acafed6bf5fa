//! The single destination file of a run.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::AggregateError;

/// Output file, truncated on open and appended to one section at a time.
#[derive(Debug)]
pub struct OutputDocument {
    path: PathBuf,
    file: File,
}

impl OutputDocument {
    /// Resolve `path`, create missing ancestors, then create or truncate the file.
    pub fn reset(path: &Path) -> Result<Self, AggregateError> {
        let path = resolve_output_path(path)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| AggregateError::Initialization {
                path: path.clone(),
                source,
            })?;
        }
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .map_err(|source| AggregateError::Initialization {
                path: path.clone(),
                source,
            })?;
        debug!(path = %path.display(), "output reset");
        Ok(Self { path, file })
    }

    /// Absolute path of the document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&mut self, bytes: impl AsRef<[u8]>) -> io::Result<()> {
        self.file.write_all(bytes.as_ref())
    }
}

/// Absolute output path; a bare file name resolves against the current directory.
pub fn resolve_output_path(path: &Path) -> Result<PathBuf, AggregateError> {
    let output_error = |source: io::Error| AggregateError::OutputPath {
        path: path.to_path_buf(),
        source,
    };
    let file_name = path.file_name().ok_or_else(|| {
        output_error(io::Error::new(
            io::ErrorKind::InvalidInput,
            "output path has no file name",
        ))
    })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::path::absolute(parent).map_err(output_error)?
        }
        _ => std::env::current_dir().map_err(output_error)?,
    };
    Ok(parent.join(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_truncates_existing_content() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("out.txt");
        fs::write(&path, "stale content").expect("seed");

        let doc = OutputDocument::reset(&path).expect("reset");
        assert_eq!(doc.path(), path.as_path());
        assert_eq!(fs::read(&path).expect("read"), b"");
    }

    #[test]
    fn reset_creates_missing_ancestors() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("a").join("b").join("out.txt");

        let mut doc = OutputDocument::reset(&path).expect("reset");
        doc.append("x\n").expect("append");
        doc.append("y\n").expect("append");
        assert_eq!(fs::read_to_string(&path).expect("read"), "x\ny\n");
    }

    #[test]
    fn reset_fails_when_parent_is_a_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "").expect("seed");

        let err = OutputDocument::reset(&blocker.join("out.txt")).unwrap_err();
        assert!(matches!(err, AggregateError::Initialization { .. }));
    }

    #[test]
    fn bare_file_name_resolves_against_current_dir() {
        let resolved = resolve_output_path(Path::new("output.txt")).expect("resolve");
        let cwd = std::env::current_dir().expect("cwd");
        assert_eq!(resolved, cwd.join("output.txt"));
    }

    #[test]
    fn path_without_file_name_is_rejected() {
        let err = resolve_output_path(Path::new("/")).unwrap_err();
        assert!(matches!(err, AggregateError::OutputPath { .. }));
    }
}
