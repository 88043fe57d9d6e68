//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for `capgen`.
#[derive(Debug, Parser)]
#[command(
    name = "capgen",
    version,
    about = "Match tasks against capability requirements and generate Rust task types"
)]
pub struct Cli {
    /// Configuration file (defaults to $CAPGEN_CONFIG, then ./capgen.yaml).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log pipeline stages to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Registry locations overriding the configuration file.
#[derive(Debug, Clone, Default, Args)]
pub struct RegistryArgs {
    /// Requirement registry document.
    #[arg(long, value_name = "PATH")]
    pub requirements: Option<PathBuf>,

    /// Task registry document.
    #[arg(long, value_name = "PATH")]
    pub tasks: Option<PathBuf>,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Canonicalize the registries and write the generated units.
    Generate {
        /// Registry overrides.
        #[command(flatten)]
        registries: RegistryArgs,

        /// Write nothing; fail if any document or unit is out of date.
        #[arg(long)]
        check: bool,
    },
    /// Canonicalize the registry documents only.
    Fmt {
        /// Registry overrides.
        #[command(flatten)]
        registries: RegistryArgs,

        /// Write nothing; fail if a document is not canonical.
        #[arg(long)]
        check: bool,
    },
    /// Show which requirements each task satisfies.
    Matrix {
        /// Registry overrides.
        #[command(flatten)]
        registries: RegistryArgs,
    },
}
