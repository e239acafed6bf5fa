//! Optional defaults read from `filecat.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use crate::core::extension::ExtensionFilter;

/// File looked up in the current directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "filecat.toml";

/// Run defaults (TOML). Command-line flags take precedence over every field.
///
/// Missing fields fall back to the built-in defaults. The file is only read,
/// never written.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FilecatConfig {
    /// Destination file.
    pub output: PathBuf,

    /// Extension filter, e.g. `["ps1", "md"]`.
    pub extensions: Vec<String>,

    /// Descend into subdirectories in path-scan mode.
    pub recurse: bool,

    /// Prompt before exporting each file.
    pub confirm: bool,
}

impl Default for FilecatConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("output.txt"),
            extensions: vec!["ps1".to_string()],
            recurse: false,
            confirm: false,
        }
    }
}

impl FilecatConfig {
    pub fn validate(&self) -> Result<()> {
        if self.output.as_os_str().is_empty() {
            return Err(anyhow!("output must not be empty"));
        }
        self.extension_filter()?;
        Ok(())
    }

    pub fn extension_filter(&self) -> Result<ExtensionFilter> {
        ExtensionFilter::parse(self.extensions.as_slice()).context("invalid extensions")
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `FilecatConfig::default()`.
pub fn load_config(path: &Path) -> Result<FilecatConfig> {
    if !path.exists() {
        return Ok(FilecatConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: FilecatConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, FilecatConfig::default());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("filecat.toml");
        fs::write(&path, "extensions = [\"md\", \"*.PY\"]\nrecurse = true\n").expect("write");

        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.output, PathBuf::from("output.txt"));
        assert!(cfg.recurse);
        assert!(!cfg.confirm);
        assert_eq!(cfg.extension_filter().expect("filter").to_string(), "*.md, *.py");
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("filecat.toml");
        fs::write(&path, "extensions = [\"exe\"]\n").expect("write");

        let err = load_config(&path).unwrap_err();
        assert!(format!("{err:#}").contains("unsupported extension 'exe'"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("filecat.toml");
        fs::write(&path, "recursive = true\n").expect("write");

        assert!(load_config(&path).is_err());
    }
}
