//! Registry loading, normalization and canonical rewrite.
//!
//! Loading is also a formatter: every document that is not already in
//! canonical form (keys sorted, lists sorted and deduplicated, two-space
//! indentation) is written back in that form.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use super::names::{check_constructors, check_requirements, check_tasks};
use super::{sort_dedup, DocumentFormat, Registries, RequirementSpec, TaskSpec};
use crate::context::ServiceContext;
use crate::error::GenerateError;

/// Whether the loader may rewrite non-canonical documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// Overwrite non-canonical documents with their canonical form.
    Rewrite,
    /// Leave documents untouched and only report which are non-canonical.
    Check,
}

/// Result of loading both registries.
#[derive(Debug)]
pub struct LoadOutcome {
    /// Normalized registries with names stamped from their keys.
    pub registries: Registries,
    /// Documents that were not canonical: rewritten in [`LoadMode::Rewrite`],
    /// merely reported in [`LoadMode::Check`].
    pub non_canonical: Vec<PathBuf>,
}

/// A parsed, normalized document together with its canonical text.
struct Document<T> {
    path: PathBuf,
    original: String,
    canonical: String,
    entries: BTreeMap<String, T>,
}

/// Loads, normalizes and validates both registries, then rewrites them.
///
/// Both documents are parsed and validated before either is written, so a
/// malformed document never leaves the other one half-processed.
///
/// # Errors
///
/// Returns an error if a document cannot be read, parsed, validated,
/// serialized or written back.
pub fn load(
    ctx: &ServiceContext,
    requirements_path: &Path,
    tasks_path: &Path,
    mode: LoadMode,
) -> Result<LoadOutcome, GenerateError> {
    let requirements =
        read_document(ctx, requirements_path, normalize_requirement, check_requirements)?;
    let tasks = read_document(ctx, tasks_path, normalize_task, check_tasks)?;
    check_constructors(&requirements.entries, &tasks.entries)
        .map_err(|message| GenerateError::Invalid { path: tasks.path.clone(), message })?;
    debug!(
        requirements = requirements.entries.len(),
        tasks = tasks.entries.len(),
        "registries loaded"
    );

    let mut non_canonical = Vec::new();
    for (path, original, canonical) in [
        (&requirements.path, &requirements.original, &requirements.canonical),
        (&tasks.path, &tasks.original, &tasks.canonical),
    ] {
        if original == canonical {
            continue;
        }
        if mode == LoadMode::Rewrite {
            ctx.fs
                .write(path, canonical)
                .map_err(|source| GenerateError::Write { path: path.clone(), source })?;
            info!(path = %path.display(), "rewrote registry in canonical form");
        }
        non_canonical.push(path.clone());
    }

    Ok(LoadOutcome {
        registries: Registries { requirements: requirements.entries, tasks: tasks.entries },
        non_canonical,
    })
}

fn read_document<T, N, C>(
    ctx: &ServiceContext,
    path: &Path,
    normalize: N,
    check: C,
) -> Result<Document<T>, GenerateError>
where
    T: DeserializeOwned + Serialize,
    N: Fn(&str, &mut T),
    C: Fn(&BTreeMap<String, T>) -> Result<(), String>,
{
    let original = ctx
        .fs
        .read_to_string(path)
        .map_err(|source| GenerateError::Read { path: path.to_path_buf(), source })?;
    let format = DocumentFormat::from_path(path);

    let mut entries = format
        .parse::<T>(&original)
        .map_err(|message| GenerateError::Parse { path: path.to_path_buf(), message })?
        .0;
    for (name, entry) in &mut entries {
        normalize(name.as_str(), entry);
    }
    check(&entries)
        .map_err(|message| GenerateError::Invalid { path: path.to_path_buf(), message })?;

    let canonical = format
        .render(&entries)
        .map_err(|message| GenerateError::Serialize { path: path.to_path_buf(), message })?;

    Ok(Document { path: path.to_path_buf(), original, canonical, entries })
}

fn normalize_requirement(name: &str, requirement: &mut RequirementSpec) {
    requirement.name = name.to_string();
    sort_dedup(&mut requirement.value);
}

fn normalize_task(name: &str, task: &mut TaskSpec) {
    task.name = name.to_string();
    sort_dedup(&mut task.input);
    sort_dedup(&mut task.output);
}
