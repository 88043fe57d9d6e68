//! `capgen generate` command.

use crate::config::GeneratorConfig;
use crate::context::ServiceContext;
use crate::pipeline::{self, RunMode};

/// Execute the `generate` command.
///
/// Canonicalizes both registries, then writes the contracts, tasks and
/// tests units. With `check`, nothing is written and the command fails if
/// any of those files is out of date.
///
/// # Errors
///
/// Returns an error string if loading, rendering or writing fails, or if
/// `check` finds stale files.
pub fn run(ctx: &ServiceContext, config: &GeneratorConfig, check: bool) -> Result<(), String> {
    let mode = if check { RunMode::Check } else { RunMode::Write };
    let summary = pipeline::generate(ctx, config, mode).map_err(|e| e.to_string())?;
    if check {
        println!("Up to date: {summary}");
    } else {
        println!("Generated: {summary}");
        for path in summary.rewritten.iter().chain(&summary.written) {
            println!("  {}", path.display());
        }
    }
    Ok(())
}
