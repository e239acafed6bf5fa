//! Closed extension vocabulary and the filter built from it.

use std::fmt;
use std::str::FromStr;

use crate::error::AggregateError;

/// File extensions the aggregator accepts as filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Extension {
    Ps1,
    Md,
    Tf,
    Sh,
    Py,
    Bat,
    Yml,
}

impl Extension {
    pub const ALL: [Extension; 7] = [
        Extension::Ps1,
        Extension::Md,
        Extension::Tf,
        Extension::Sh,
        Extension::Py,
        Extension::Bat,
        Extension::Yml,
    ];

    /// Lower-case suffix without the leading dot.
    pub fn as_str(self) -> &'static str {
        match self {
            Extension::Ps1 => "ps1",
            Extension::Md => "md",
            Extension::Tf => "tf",
            Extension::Sh => "sh",
            Extension::Py => "py",
            Extension::Bat => "bat",
            Extension::Yml => "yml",
        }
    }

    /// Glob matched against file names during directory scans.
    pub fn glob(self) -> String {
        format!("*.{}", self.as_str())
    }

    /// True when `ext` (any case, with or without a leading dot) names this extension.
    pub fn matches(self, ext: &str) -> bool {
        normalize(ext) == self.as_str()
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Extension {
    type Err = AggregateError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(value);
        Extension::ALL
            .into_iter()
            .find(|ext| ext.as_str() == normalized)
            .ok_or_else(|| AggregateError::UnsupportedExtension {
                value: value.to_string(),
            })
    }
}

/// Lower-case `value` and strip a leading `*` and `.` (`*.PS1` -> `ps1`).
pub fn normalize(value: &str) -> String {
    let trimmed = value.trim();
    let trimmed = trimmed.strip_prefix('*').unwrap_or(trimmed);
    let trimmed = trimmed.strip_prefix('.').unwrap_or(trimmed);
    trimmed.to_ascii_lowercase()
}

/// Non-empty, duplicate-free set of extensions in the order first given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    extensions: Vec<Extension>,
}

impl ExtensionFilter {
    pub fn new(extensions: impl IntoIterator<Item = Extension>) -> Result<Self, AggregateError> {
        let mut unique = Vec::new();
        for ext in extensions {
            if !unique.contains(&ext) {
                unique.push(ext);
            }
        }
        if unique.is_empty() {
            return Err(AggregateError::EmptyExtensionFilter);
        }
        Ok(Self { extensions: unique })
    }

    /// Parse caller-supplied values. Each value may hold a comma-separated list.
    pub fn parse<S: AsRef<str>>(values: &[S]) -> Result<Self, AggregateError> {
        let mut parsed = Vec::new();
        for value in values {
            for part in value.as_ref().split(',') {
                if part.trim().is_empty() {
                    continue;
                }
                parsed.push(part.parse::<Extension>()?);
            }
        }
        Self::new(parsed)
    }

    pub fn iter(&self) -> impl Iterator<Item = Extension> + '_ {
        self.extensions.iter().copied()
    }

    /// True when `ext` matches any extension in the filter.
    pub fn accepts(&self, ext: &str) -> bool {
        self.iter().any(|candidate| candidate.matches(ext))
    }

    pub fn globs(&self) -> Vec<String> {
        self.iter().map(Extension::glob).collect()
    }
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        Self {
            extensions: vec![Extension::Ps1],
        }
    }
}

impl fmt::Display for ExtensionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.globs().join(", "))
    }
}
