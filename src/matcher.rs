//! Satisfaction matching between tasks and requirements.
//!
//! A task satisfies a requirement when every capability the requirement
//! names is among the task's inputs or outputs. The test is a strict subset
//! check; there is no partial satisfaction.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::registry::{Registries, RequirementSpec, TaskSpec};

/// Returns `true` if `requirement.value ⊆ input(task) ∪ output(task)`.
#[must_use]
pub fn satisfies(task: &TaskSpec, requirement: &RequirementSpec) -> bool {
    let capability = task.capability();
    requirement.value.iter().all(|value| capability.contains(value.as_str()))
}

/// Names of the requirements `task` satisfies, sorted by name.
#[must_use]
pub fn satisfied_requirements(
    task: &TaskSpec,
    requirements: &BTreeMap<String, RequirementSpec>,
) -> Vec<String> {
    let mut satisfied: Vec<String> = requirements
        .values()
        .filter(|requirement| satisfies(task, requirement))
        .map(|requirement| requirement.name.clone())
        .collect();
    // Emission order must not depend on how the registry is iterated.
    satisfied.sort();
    satisfied
}

/// Stamps `satisfied_requirements` on every task.
pub fn stamp(registries: &mut Registries) {
    for requirement in registries.requirements.values().filter(|r| r.value.is_empty()) {
        warn!(
            requirement = %requirement.name,
            "requirement has no value and is satisfied by every task"
        );
    }
    for task in registries.tasks.values_mut() {
        task.satisfied_requirements = satisfied_requirements(task, &registries.requirements);
        debug!(task = %task.name, satisfied = ?task.satisfied_requirements, "matched");
    }
}

/// Match outcome of one (task, requirement) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Requirement name.
    pub requirement: String,
    /// Requirement capabilities the task does not hold; empty when satisfied.
    pub missing: Vec<String>,
}

impl Verdict {
    /// Returns `true` if the task satisfies the requirement.
    #[must_use]
    pub fn satisfied(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Every requirement verdict for one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskMatches {
    /// Task name.
    pub task: String,
    /// One verdict per requirement, sorted by requirement name.
    pub verdicts: Vec<Verdict>,
}

/// Full task × requirement matrix, tasks and requirements sorted by name.
#[must_use]
pub fn matrix(registries: &Registries) -> Vec<TaskMatches> {
    registries
        .tasks
        .values()
        .map(|task| {
            let capability = task.capability();
            let verdicts = registries
                .requirements
                .values()
                .map(|requirement| Verdict {
                    requirement: requirement.name.clone(),
                    missing: requirement
                        .value
                        .iter()
                        .filter(|value| !capability.contains(value.as_str()))
                        .cloned()
                        .collect(),
                })
                .collect();
            TaskMatches { task: task.name.clone(), verdicts }
        })
        .collect()
}

/// Formats a matrix for terminal display.
#[must_use]
pub fn format_matrix(matches: &[TaskMatches]) -> String {
    if matches.is_empty() {
        return "No tasks found.".to_string();
    }

    let mut lines = Vec::new();
    for task in matches {
        lines.push(format!("{}:", task.task));
        if task.verdicts.is_empty() {
            lines.push("  (no requirements)".to_string());
        }
        for verdict in &task.verdicts {
            if verdict.satisfied() {
                lines.push(format!("  + {}", verdict.requirement));
            } else {
                lines.push(format!(
                    "  - {} (missing: {})",
                    verdict.requirement,
                    verdict.missing.join(", ")
                ));
            }
        }
    }
    lines.join("\n")
}
