//! One aggregation run: reset output, discover, consolidate, export.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::core::extension::{Extension, ExtensionFilter};
use crate::core::file_list::FileList;
use crate::core::reference::FileReference;
use crate::core::section;
use crate::error::AggregateError;
use crate::io::confirm::{AlwaysConfirm, Confirm};
use crate::io::discovery::{Enumerate, WalkEnumerator, resolve_root, scan_root, select_references};
use crate::io::output::OutputDocument;

/// Where the candidate files come from. Resolved once, before the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Scan `root` for each extension, descending only when `recurse` is set.
    ByPath {
        root: PathBuf,
        extensions: ExtensionFilter,
        recurse: bool,
    },
    /// Use a pre-selected list, keeping references whose extension matches.
    ByReferences {
        files: Vec<FileReference>,
        extensions: ExtensionFilter,
    },
}

impl Input {
    pub fn extensions(&self) -> &ExtensionFilter {
        match self {
            Input::ByPath { extensions, .. } | Input::ByReferences { extensions, .. } => {
                extensions
            }
        }
    }
}

/// A recoverable problem. The run continues after each one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Scanning for one extension failed; other extensions were still scanned.
    Enumeration { extension: Extension, message: String },
    /// A file could not be read or appended; its section holds the placeholder.
    FileExport { path: PathBuf, message: String },
    /// Nothing matched; the output is left empty.
    NoMatches { extensions: ExtensionFilter },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::Enumeration { extension, message } => {
                write!(f, "enumeration of {} failed: {}", extension.glob(), message)
            }
            Warning::FileExport { path, message } => {
                write!(f, "export of {} failed: {}", path.display(), message)
            }
            Warning::NoMatches { extensions } => {
                write!(f, "no files found matching {}", extensions)
            }
        }
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateReport {
    /// Absolute path of the output document.
    pub output: PathBuf,
    /// Unique paths left after consolidation.
    pub discovered: usize,
    /// Files whose content was written.
    pub exported: Vec<PathBuf>,
    /// Files whose section holds the error placeholder.
    pub failed: Vec<PathBuf>,
    /// Files skipped because confirmation was refused.
    pub declined: Vec<PathBuf>,
    pub warnings: Vec<Warning>,
}

impl AggregateReport {
    fn new(output: PathBuf, discovered: usize, warnings: Vec<Warning>) -> Self {
        Self {
            output,
            discovered,
            exported: Vec::new(),
            failed: Vec::new(),
            declined: Vec::new(),
            warnings,
        }
    }

    /// Number of sections written to the output.
    pub fn sections(&self) -> usize {
        self.exported.len() + self.failed.len()
    }
}

/// Run without confirmation: every discovered file is exported.
pub fn aggregate(input: &Input, output: &Path) -> Result<AggregateReport, AggregateError> {
    aggregate_with(input, output, &mut AlwaysConfirm)
}

/// Run, asking `confirm` before each file is written.
///
/// Fatal errors (output path, output initialization, root resolution) abort
/// the run. Everything else is recorded on the report and the run continues.
pub fn aggregate_with(
    input: &Input,
    output: &Path,
    confirm: &mut dyn Confirm,
) -> Result<AggregateReport, AggregateError> {
    aggregate_using(input, output, confirm, &mut WalkEnumerator)
}

/// Like [`aggregate_with`], listing files in path-scan mode through `enumerator`.
pub fn aggregate_using(
    input: &Input,
    output: &Path,
    confirm: &mut dyn Confirm,
    enumerator: &mut dyn Enumerate,
) -> Result<AggregateReport, AggregateError> {
    let mut document = OutputDocument::reset(output)?;
    info!(output = %document.path().display(), "output reset");

    let mut warnings = Vec::new();
    let mut files = match input {
        Input::ByPath {
            root,
            extensions,
            recurse,
        } => {
            let root = resolve_root(root)?;
            info!(root = %root.display(), %extensions, recurse, "scanning");
            let outcome = scan_root(&root, extensions, *recurse, enumerator);
            warnings.extend(outcome.failures.into_iter().map(|failure| {
                Warning::Enumeration {
                    extension: failure.extension,
                    message: format!("{:#}", failure.error),
                }
            }));
            outcome.files
        }
        Input::ByReferences { files, extensions } => {
            info!(references = files.len(), %extensions, "filtering references");
            select_references(files, extensions)
        }
    };
    exclude_output(&mut files, document.path());

    let paths = files.consolidate();
    let mut report = AggregateReport::new(document.path().to_path_buf(), paths.len(), warnings);
    if paths.is_empty() {
        let extensions = input.extensions().clone();
        warn!(%extensions, "no files found");
        report.warnings.push(Warning::NoMatches { extensions });
        return Ok(report);
    }

    info!(files = paths.len(), "exporting");
    for path in paths {
        export_file(&mut document, path, confirm, &mut report);
    }
    Ok(report)
}

/// The output document is never part of its own input.
fn exclude_output(files: &mut FileList, output: &Path) {
    let mut removed = files.remove(output);
    if let Ok(canonical) = fs::canonicalize(output) {
        removed |= files.remove(&canonical);
    }
    if removed {
        debug!(output = %output.display(), "output document excluded from inputs");
    }
}

fn export_file(
    document: &mut OutputDocument,
    path: PathBuf,
    confirm: &mut dyn Confirm,
    report: &mut AggregateReport,
) {
    if !confirm.confirm(&path) {
        info!(path = %path.display(), "declined, skipping");
        report.declined.push(path);
        return;
    }
    match write_section(document, &path) {
        Ok(()) => {
            debug!(path = %path.display(), "exported");
            report.exported.push(path);
        }
        Err(err) => {
            warn!(path = %path.display(), "export failed, writing placeholder: {err:#}");
            if let Err(placeholder_err) = document.append(section::placeholder()) {
                warn!(path = %path.display(), "placeholder write failed: {placeholder_err}");
            }
            report.warnings.push(Warning::FileExport {
                path: path.clone(),
                message: format!("{err:#}"),
            });
            report.failed.push(path);
        }
    }
}

fn write_section(document: &mut OutputDocument, path: &Path) -> Result<()> {
    document
        .append(section::header(path))
        .with_context(|| format!("write header for {}", path.display()))?;
    let content = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    document
        .append(section::body(&content))
        .with_context(|| format!("append content of {}", path.display()))?;
    Ok(())
}
