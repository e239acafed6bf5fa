//! Stable exit codes for the filecat CLI.

/// Run completed, including runs that matched no files.
pub const OK: i32 = 0;
/// Run aborted: invalid configuration, unresolvable paths, or an output file
/// that could not be created.
pub const FATAL: i32 = 1;
