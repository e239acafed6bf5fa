//! Fatal errors that abort an aggregation run.
//!
//! Recoverable conditions (a failed extension scan, an unreadable file, an
//! empty result) are not errors; they are reported as
//! [`Warning`](crate::aggregate::Warning)s on the run report.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("unsupported extension '{value}' (allowed: ps1, md, tf, sh, py, bat, yml)")]
    UnsupportedExtension { value: String },

    #[error("at least one extension is required")]
    EmptyExtensionFilter,

    #[error("cannot resolve output path {}", path.display())]
    OutputPath {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot create or truncate output file {}", path.display())]
    Initialization {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot resolve root path {}", path.display())]
    RootPath {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("root path {} is not a directory", path.display())]
    RootNotDirectory { path: PathBuf },
}
