//! Diagnostic tracing for the aggregator.
//!
//! Warnings (failed scans, unreadable files, empty results) are always shown.
//! `--verbose` and `--debug` raise the level; `RUST_LOG` overrides both.
//! Output goes to stderr so it never mixes with the output document or the
//! summary line on stdout.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Diagnostic level selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verbosity {
    #[default]
    Warn,
    Info,
    Debug,
}

impl Verbosity {
    pub fn from_flags(verbose: bool, debug: bool) -> Self {
        if debug {
            Verbosity::Debug
        } else if verbose {
            Verbosity::Info
        } else {
            Verbosity::Warn
        }
    }

    fn directive(self) -> &'static str {
        match self {
            Verbosity::Warn => "warn",
            Verbosity::Info => "info",
            Verbosity::Debug => "debug",
        }
    }
}

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG` env var. Falls back to `verbosity` if unset.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=filecat=debug filecat -e md -r docs
/// ```
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_flag_wins_over_verbose() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(true, false), Verbosity::Info);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Warn);
    }
}
