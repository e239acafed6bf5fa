//! Concatenate matching files into one annotated output file.
//!
//! Scans a root directory (or reads a list of file references), then writes
//! every matching file into the output preceded by a `=== File: <path> ===`
//! header.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use filecat::core::extension::ExtensionFilter;
use filecat::exit_codes;
use filecat::io::config::{DEFAULT_CONFIG_FILE, FilecatConfig, load_config};
use filecat::io::confirm::PromptConfirm;
use filecat::io::references::{ListFormat, read_references};
use filecat::logging::{self, Verbosity};
use filecat::{AggregateReport, Input, aggregate, aggregate_with};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "filecat",
    version,
    about = "Concatenate files matching an extension filter into one output file"
)]
struct Cli {
    /// Root directory to scan [default: .]
    #[arg(conflicts_with = "files_from")]
    root: Option<PathBuf>,

    /// Output file, truncated at the start of every run [default: output.txt]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Extension to include (ps1, md, tf, sh, py, bat, yml). Repeatable or comma-separated.
    #[arg(short, long = "extension", value_name = "EXT", value_delimiter = ',')]
    extensions: Vec<String>,

    /// Descend into subdirectories.
    #[arg(short, long, conflicts_with = "files_from", overrides_with = "no_recurse")]
    recurse: bool,

    /// Scan the root only, even when the config sets `recurse = true`.
    #[arg(long, conflicts_with = "files_from", overrides_with = "recurse")]
    no_recurse: bool,

    /// Read file references from a list instead of scanning (`-` for stdin).
    #[arg(long, value_name = "PATH")]
    files_from: Option<PathBuf>,

    /// Format of the `--files-from` list.
    #[arg(long, value_enum, default_value_t = ListFormat::Lines)]
    list_format: ListFormat,

    /// Ask before exporting each file.
    #[arg(long)]
    confirm: bool,

    /// Log progress at info level.
    #[arg(short, long)]
    verbose: bool,

    /// Log at debug level.
    #[arg(long)]
    debug: bool,

    /// TOML file with default settings [default: ./filecat.toml if present]
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::FATAL);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(Verbosity::from_flags(cli.verbose, cli.debug));

    let config = load_cli_config(cli.config.as_deref())?;
    let input = build_input(&cli, &config)?;
    let output = cli.output.clone().unwrap_or_else(|| config.output.clone());
    debug!(?input, output = %output.display(), "input resolved");

    let report = if cli.confirm || config.confirm {
        aggregate_with(&input, &output, &mut PromptConfirm)
    } else {
        aggregate(&input, &output)
    }
    .context("filecat")?;

    println!("{}", summary_line(&report));
    Ok(())
}

/// An explicitly named config must exist; the default one is optional.
fn load_cli_config(path: Option<&Path>) -> Result<FilecatConfig> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(anyhow!("config file not found: {}", path.display()));
            }
            load_config(path)
        }
        None => load_config(Path::new(DEFAULT_CONFIG_FILE)),
    }
}

/// Resolve the input mode. Extensions are validated here, before any file is touched.
fn build_input(cli: &Cli, config: &FilecatConfig) -> Result<Input> {
    let extensions = if cli.extensions.is_empty() {
        config.extension_filter()?
    } else {
        ExtensionFilter::parse(cli.extensions.as_slice())?
    };

    if let Some(list) = &cli.files_from {
        let files = read_references(list, cli.list_format)?;
        return Ok(Input::ByReferences { files, extensions });
    }

    Ok(Input::ByPath {
        root: cli.root.clone().unwrap_or_else(|| PathBuf::from(".")),
        extensions,
        recurse: !cli.no_recurse && (cli.recurse || config.recurse),
    })
}

fn summary_line(report: &AggregateReport) -> String {
    format!(
        "filecat: output={} sections={} failed={} declined={}",
        report.output.display(),
        report.sections(),
        report.failed.len(),
        report.declined.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use filecat::core::extension::Extension;

    #[test]
    fn parse_defaults() {
        let cli = Cli::parse_from(["filecat"]);
        let input = build_input(&cli, &FilecatConfig::default()).expect("input");
        assert_eq!(
            input,
            Input::ByPath {
                root: PathBuf::from("."),
                extensions: ExtensionFilter::default(),
                recurse: false,
            }
        );
        assert!(cli.output.is_none());
    }

    #[test]
    fn parse_repeated_and_comma_separated_extensions() {
        let cli = Cli::parse_from(["filecat", "-e", "md,py", "--extension", "*.SH", "-r", "src"]);
        let input = build_input(&cli, &FilecatConfig::default()).expect("input");
        let Input::ByPath {
            root,
            extensions,
            recurse,
        } = input
        else {
            panic!("expected path mode");
        };
        assert_eq!(root, PathBuf::from("src"));
        assert!(recurse);
        let exts: Vec<Extension> = extensions.iter().collect();
        assert_eq!(exts, vec![Extension::Md, Extension::Py, Extension::Sh]);
    }

    #[test]
    fn cli_extensions_override_config() {
        let config = FilecatConfig {
            extensions: vec!["tf".to_string()],
            recurse: true,
            ..FilecatConfig::default()
        };
        let cli = Cli::parse_from(["filecat", "-e", "bat"]);
        let input = build_input(&cli, &config).expect("input");
        assert_eq!(input.extensions().to_string(), "*.bat");
        assert!(matches!(input, Input::ByPath { recurse: true, .. }));
    }

    #[test]
    fn no_recurse_overrides_config() {
        let config = FilecatConfig {
            recurse: true,
            ..FilecatConfig::default()
        };
        let cli = Cli::parse_from(["filecat", "--no-recurse"]);
        let input = build_input(&cli, &config).expect("input");
        assert!(matches!(input, Input::ByPath { recurse: false, .. }));
    }

    #[test]
    fn last_recurse_flag_wins() {
        let config = FilecatConfig::default();
        let cli = Cli::parse_from(["filecat", "-r", "--no-recurse"]);
        let input = build_input(&cli, &config).expect("input");
        assert!(matches!(input, Input::ByPath { recurse: false, .. }));

        let cli = Cli::parse_from(["filecat", "--no-recurse", "-r"]);
        let input = build_input(&cli, &config).expect("input");
        assert!(matches!(input, Input::ByPath { recurse: true, .. }));
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let cli = Cli::parse_from(["filecat", "-e", "exe"]);
        let err = build_input(&cli, &FilecatConfig::default()).unwrap_err();
        assert!(err.to_string().contains("unsupported extension 'exe'"));
    }

    #[test]
    fn files_from_conflicts_with_root_and_recurse() {
        assert!(Cli::try_parse_from(["filecat", "--files-from", "list.txt", "src"]).is_err());
        assert!(Cli::try_parse_from(["filecat", "--files-from", "list.txt", "-r"]).is_err());
    }

    #[test]
    fn files_from_builds_reference_input() {
        let temp = tempfile::tempdir().expect("tempdir");
        let list = temp.path().join("list.txt");
        std::fs::write(&list, "/r/a.md\n/r/b.py\n").expect("write list");

        let cli = Cli::parse_from([
            "filecat",
            "--files-from",
            list.to_str().expect("utf-8"),
            "-e",
            "md",
        ]);
        let input = build_input(&cli, &FilecatConfig::default()).expect("input");
        let Input::ByReferences { files, .. } = input else {
            panic!("expected reference mode");
        };
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = load_cli_config(Some(&temp.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }
}
