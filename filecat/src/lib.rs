//! Concatenate files matching an extension filter into one annotated output file.
//!
//! A run resets the output document, discovers candidate files (by scanning a
//! root directory or by filtering a supplied reference list), deduplicates and
//! sorts them, then writes one section per file: a `=== File: <path> ===`
//! header followed by the file's lines.
//!
//! - **[`core`]**: Pure logic (extension vocabulary, path consolidation,
//!   section layout). No I/O.
//! - **[`io`]**: Filesystem and terminal side effects (discovery, output
//!   document, config file, confirmation prompt).
//!
//! [`aggregate()`] ties the two together and is what the `filecat` binary calls.

pub mod aggregate;
pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use aggregate::{AggregateReport, Input, Warning, aggregate, aggregate_using, aggregate_with};
pub use error::AggregateError;
