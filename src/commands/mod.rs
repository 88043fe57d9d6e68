//! Command dispatch and handlers.

pub mod fmt;
pub mod generate;
pub mod matrix;

use crate::cli::{Cli, Command, RegistryArgs};
use crate::config::GeneratorConfig;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler against the real filesystem.
///
/// # Errors
///
/// Returns an error string if the configuration cannot be loaded or the
/// selected command handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    dispatch_with_context(cli, &ServiceContext::live())
}

/// Dispatch a command with the given service context.
///
/// # Errors
///
/// Returns an error string if the configuration cannot be loaded or the
/// selected command handler fails.
pub fn dispatch_with_context(cli: &Cli, ctx: &ServiceContext) -> Result<(), String> {
    let config = GeneratorConfig::load(ctx, cli.config.as_deref()).map_err(|e| e.to_string())?;
    match &cli.command {
        Command::Generate { registries, check } => {
            generate::run(ctx, &with_overrides(config, registries), *check)
        }
        Command::Fmt { registries, check } => {
            fmt::run(ctx, &with_overrides(config, registries), *check)
        }
        Command::Matrix { registries } => matrix::run(ctx, &with_overrides(config, registries)),
    }
}

fn with_overrides(config: GeneratorConfig, registries: &RegistryArgs) -> GeneratorConfig {
    config.with_registries(registries.requirements.clone(), registries.tasks.clone())
}
