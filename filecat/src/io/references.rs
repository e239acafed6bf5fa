//! Reading externally supplied file reference lists.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::core::reference::FileReference;

/// Encoding of a reference list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// One path per line; blank lines and `#` comments are ignored.
    #[default]
    Lines,
    /// JSON array of `{ "path": ..., "extension": ... }` objects.
    Json,
}

/// Read a reference list from `source`, or from stdin when `source` is `-`.
pub fn read_references(source: &Path, format: ListFormat) -> Result<Vec<FileReference>> {
    let raw = if source == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read reference list from stdin")?;
        buf
    } else {
        fs::read_to_string(source).with_context(|| format!("read {}", source.display()))?
    };
    parse_references(&raw, format)
        .with_context(|| format!("parse reference list {}", source.display()))
}

pub fn parse_references(raw: &str, format: ListFormat) -> Result<Vec<FileReference>> {
    match format {
        ListFormat::Lines => Ok(raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(FileReference::new)
            .collect()),
        ListFormat::Json => serde_json::from_str(raw).context("parse json reference list"),
    }
}
