//! End-to-end generation runs: load, match, emit, write.
//!
//! Every artifact is rendered in memory before the first one is written, so
//! a failing run never leaves a partial set of units behind.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::GeneratorConfig;
use crate::context::ServiceContext;
use crate::emit::Emitter;
use crate::error::GenerateError;
use crate::matcher::{self, TaskMatches};
use crate::registry::{self, LoadMode};

/// Whether a run may touch the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Rewrite documents and write artifacts.
    Write,
    /// Write nothing; fail if anything would change.
    Check,
}

impl From<RunMode> for LoadMode {
    fn from(mode: RunMode) -> Self {
        match mode {
            RunMode::Write => Self::Rewrite,
            RunMode::Check => Self::Check,
        }
    }
}

/// Outcome of a successful `generate` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Number of requirements loaded.
    pub requirements: usize,
    /// Number of tasks loaded.
    pub tasks: usize,
    /// Adapter constructors emitted across all tasks.
    pub adapters: usize,
    /// Registry documents rewritten in canonical form.
    pub rewritten: Vec<PathBuf>,
    /// Artifacts whose contents changed.
    pub written: Vec<PathBuf>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} requirements, {} tasks, {} adapters; {} documents rewritten, {} artifacts written",
            self.requirements,
            self.tasks,
            self.adapters,
            self.rewritten.len(),
            self.written.len()
        )
    }
}

/// Runs the full pipeline.
///
/// # Errors
///
/// Returns the first load, template or write failure. In [`RunMode::Check`]
/// returns [`GenerateError::Stale`] listing every document and artifact a
/// write run would change.
pub fn generate(
    ctx: &ServiceContext,
    config: &GeneratorConfig,
    mode: RunMode,
) -> Result<Summary, GenerateError> {
    let outcome = registry::load(ctx, &config.requirements, &config.tasks, mode.into())?;
    let mut registries = outcome.registries;
    matcher::stamp(&mut registries);

    let artifacts = Emitter::new(config.paths.clone())?.emit(&registries)?;

    let mut changed = Vec::new();
    for (path, contents) in [
        (&config.output.contracts, &artifacts.contracts),
        (&config.output.tasks, &artifacts.tasks),
        (&config.output.tests, &artifacts.tests),
    ] {
        if is_current(ctx, path, contents)? {
            debug!(path = %path.display(), "artifact unchanged");
            continue;
        }
        changed.push((path, contents));
    }

    if mode == RunMode::Check {
        let mut stale = outcome.non_canonical.clone();
        stale.extend(changed.iter().map(|(path, _)| path.to_path_buf()));
        if !stale.is_empty() {
            return Err(GenerateError::Stale(stale));
        }
    }

    let mut written = Vec::new();
    if mode == RunMode::Write {
        for (path, contents) in changed {
            ctx.fs
                .write(path, contents)
                .map_err(|source| GenerateError::Write { path: path.clone(), source })?;
            info!(path = %path.display(), "wrote artifact");
            written.push(path.clone());
        }
    }

    let summary = Summary {
        requirements: registries.requirements.len(),
        tasks: registries.tasks.len(),
        adapters: registries.tasks.values().map(|t| t.satisfied_requirements.len()).sum(),
        rewritten: if mode == RunMode::Write { outcome.non_canonical } else { Vec::new() },
        written,
    };
    info!(%summary, "generation finished");
    Ok(summary)
}

/// Canonicalizes both registry documents without generating anything.
///
/// Returns the documents that were (or, in check mode, would be) rewritten.
///
/// # Errors
///
/// Returns load failures, or [`GenerateError::Stale`] in check mode when a
/// document is not canonical.
pub fn fmt(
    ctx: &ServiceContext,
    config: &GeneratorConfig,
    mode: RunMode,
) -> Result<Vec<PathBuf>, GenerateError> {
    let outcome = registry::load(ctx, &config.requirements, &config.tasks, mode.into())?;
    if mode == RunMode::Check && !outcome.non_canonical.is_empty() {
        return Err(GenerateError::Stale(outcome.non_canonical));
    }
    Ok(outcome.non_canonical)
}

/// Loads both registries read-only and computes the full match matrix.
///
/// # Errors
///
/// Returns load failures.
pub fn matrix(
    ctx: &ServiceContext,
    config: &GeneratorConfig,
) -> Result<Vec<TaskMatches>, GenerateError> {
    let outcome = registry::load(ctx, &config.requirements, &config.tasks, LoadMode::Check)?;
    Ok(matcher::matrix(&outcome.registries))
}

fn is_current(ctx: &ServiceContext, path: &Path, contents: &str) -> Result<bool, GenerateError> {
    if !ctx.fs.exists(path) {
        return Ok(false);
    }
    let current = ctx
        .fs
        .read_to_string(path)
        .map_err(|source| GenerateError::Read { path: path.to_path_buf(), source })?;
    Ok(current == contents)
}
