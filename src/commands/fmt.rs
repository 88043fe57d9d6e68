//! `capgen fmt` command.

use crate::config::GeneratorConfig;
use crate::context::ServiceContext;
use crate::pipeline::{self, RunMode};

/// Execute the `fmt` command.
///
/// # Errors
///
/// Returns an error string if a registry cannot be loaded or written, or if
/// `check` finds a document that is not canonical.
pub fn run(ctx: &ServiceContext, config: &GeneratorConfig, check: bool) -> Result<(), String> {
    let mode = if check { RunMode::Check } else { RunMode::Write };
    let rewritten = pipeline::fmt(ctx, config, mode).map_err(|e| e.to_string())?;
    if rewritten.is_empty() {
        println!("Registries already canonical.");
    }
    for path in &rewritten {
        println!("Rewrote {}", path.display());
    }
    Ok(())
}
