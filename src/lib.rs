//! Core library entry for the `capgen` CLI.
//!
//! `capgen` reads a requirement registry and a task registry, decides which
//! tasks structurally satisfy which requirements, and emits Rust source for
//! capability contracts, task types with validated constructors, and
//! baseline tests.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod emit;
pub mod error;
pub mod matcher;
pub mod naming;
pub mod pipeline;
pub mod ports;
pub mod registry;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "CAPGEN_LOG";

/// Run the CLI with the provided arguments.
///
/// Help and version requests print to stdout and succeed.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    init_logging(cli.verbose);
    commands::dispatch(&cli)
}

/// Installs the stderr subscriber; `CAPGEN_LOG` overrides the default filter.
///
/// Later calls keep the first subscriber.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "capgen=debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
