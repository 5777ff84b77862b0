//! CLI argument parsing for osgi-validator.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// osgi-validator: keep a module's packages inside its own namespace.
///
/// Sources must live under a package prefix derived from the module's
/// groupId and artifactId, and the bundle manifest must not export or
/// import packages containing prohibited tokens such as `internal`.
#[derive(Parser, Debug)]
#[command(name = "osgi-validator")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for osgi-validator.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a module's source tree and manifest.
    ///
    /// Settings come from `osgi-validator.yaml` in the project directory
    /// (or `--config`), overridden by the flags below.
    Validate(ValidateArgs),

    /// Print the allowed package prefixes for a groupId/artifactId pair.
    Prefixes(PrefixesArgs),
}

/// Output format for validation reports.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Log lines only.
    #[default]
    Text,
    /// Additionally print a JSON report to stdout.
    Json,
}

/// Arguments for the `validate` command.
#[derive(Parser, Debug, Default)]
pub struct ValidateArgs {
    /// Module directory; relative config paths are resolved against it.
    #[arg(long, default_value = ".")]
    pub project_dir: PathBuf,

    /// Config file (default: `<project-dir>/osgi-validator.yaml` if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Module group identifier.
    #[arg(long)]
    pub group_id: Option<String>,

    /// Module artifact identifier.
    #[arg(long)]
    pub artifact_id: Option<String>,

    /// Packaging type (`pom` modules are skipped).
    #[arg(long)]
    pub packaging: Option<String>,

    /// Source roots to scan (replaces configured roots).
    #[arg(long = "source-root")]
    pub source_roots: Vec<PathBuf>,

    /// Also scan the test source roots.
    #[arg(long)]
    pub test_sources: bool,

    /// Glob patterns exempt from validation (replaces configured list).
    #[arg(long = "skip-file", value_delimiter = ',')]
    pub skipped_files: Vec<String>,

    /// Prohibited package-name tokens (replaces configured list).
    #[arg(long = "prohibited-token", value_delimiter = ',')]
    pub prohibited_tokens: Vec<String>,

    /// Naming fragments that may be elided from the prefix (replaces configured list).
    #[arg(long = "skip-package-part", value_delimiter = ',')]
    pub package_parts_to_skip: Vec<String>,

    /// Only warn about misplaced sources instead of failing.
    #[arg(long)]
    pub no_fail: bool,

    /// Manifest location (default: target/classes/META-INF/MANIFEST.MF).
    #[arg(long, conflicts_with = "no_manifest")]
    pub manifest: Option<PathBuf>,

    /// Skip the manifest check.
    #[arg(long)]
    pub no_manifest: bool,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the `prefixes` command.
#[derive(Parser, Debug)]
pub struct PrefixesArgs {
    /// Module group identifier.
    #[arg(long)]
    pub group_id: String,

    /// Module artifact identifier.
    #[arg(long)]
    pub artifact_id: String,

    /// Naming fragments that may be elided from the prefix.
    #[arg(long = "skip-package-part", value_delimiter = ',', default_value = "commons")]
    pub package_parts_to_skip: Vec<String>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
