//! `capgen matrix` command.

use crate::config::GeneratorConfig;
use crate::context::ServiceContext;
use crate::{matcher, pipeline};

/// Execute the `matrix` command.
///
/// # Errors
///
/// Returns an error string if a registry cannot be loaded.
pub fn run(ctx: &ServiceContext, config: &GeneratorConfig) -> Result<(), String> {
    let matches = pipeline::matrix(ctx, config).map_err(|e| e.to_string())?;
    println!("{}", matcher::format_matrix(&matches));
    Ok(())
}
