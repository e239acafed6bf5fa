//! File references: a path plus its inferred extension.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::extension::normalize;

/// A file selected either by a directory scan or by an external listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawReference")]
pub struct FileReference {
    pub path: PathBuf,
    /// Lower-case extension without the leading dot; empty when the path has none.
    pub extension: String,
}

impl FileReference {
    /// Build a reference, inferring the extension from the path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = absolutize(path.into());
        let extension = infer_extension(&path);
        Self { path, extension }
    }

    /// Build a reference with an explicitly supplied extension.
    pub fn with_extension(path: impl Into<PathBuf>, extension: &str) -> Self {
        Self {
            path: absolutize(path.into()),
            extension: normalize(extension),
        }
    }
}

#[derive(Deserialize)]
struct RawReference {
    path: PathBuf,
    #[serde(default)]
    extension: Option<String>,
}

impl From<RawReference> for FileReference {
    fn from(raw: RawReference) -> Self {
        match raw.extension {
            Some(ext) => FileReference::with_extension(raw.path, &ext),
            None => FileReference::new(raw.path),
        }
    }
}

pub fn infer_extension(path: &Path) -> String {
    path.extension()
        .map(|ext| normalize(&ext.to_string_lossy()))
        .unwrap_or_default()
}

/// Make `path` absolute against the current directory without touching the file.
///
/// Falls back to the path as given when the current directory is unavailable.
fn absolutize(path: PathBuf) -> PathBuf {
    std::path::absolute(&path).unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_lowercase_extension() {
        let reference = FileReference::new("/tmp/Build.PS1");
        assert_eq!(reference.extension, "ps1");
        assert_eq!(reference.path, PathBuf::from("/tmp/Build.PS1"));
    }

    #[test]
    fn missing_extension_is_empty() {
        let reference = FileReference::new("/tmp/Makefile");
        assert_eq!(reference.extension, "");
    }

    #[test]
    fn relative_paths_become_absolute() {
        let reference = FileReference::new("scripts/run.sh");
        assert!(reference.path.is_absolute());
        assert!(reference.path.ends_with("scripts/run.sh"));
    }

    #[test]
    fn deserializes_with_and_without_extension() {
        let refs: Vec<FileReference> = serde_json::from_str(
            r#"[{"path": "/a/notes.txt", "extension": ".MD"}, {"path": "/a/tool.py"}]"#,
        )
        .expect("parse json");
        assert_eq!(refs[0].extension, "md");
        assert_eq!(refs[1].extension, "py");
    }
}
