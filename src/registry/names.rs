//! Naming rules registry entries must follow to become Rust identifiers.

use std::collections::BTreeMap;

use super::{RequirementSpec, TaskSpec, BASE_CAPABILITIES};
use crate::matcher::satisfies;
use crate::naming::{is_type_name, snake_case, FORBIDDEN_IDENTS};

/// Checks requirement names and their capability values.
pub(super) fn check_requirements(
    requirements: &BTreeMap<String, RequirementSpec>,
) -> Result<(), String> {
    check_distinct_snake_names("requirement", requirements.keys())?;
    for (name, requirement) in requirements {
        check_type_name("requirement", name)?;
        for capability in &requirement.value {
            check_capability("requirement", name, capability)?;
        }
    }
    Ok(())
}

/// Checks task names and the capabilities each task holds.
pub(super) fn check_tasks(tasks: &BTreeMap<String, TaskSpec>) -> Result<(), String> {
    check_distinct_snake_names("task", tasks.keys())?;
    for (name, task) in tasks {
        check_type_name("task", name)?;
        let held = task.held_capabilities();
        for capability in &held {
            check_capability("task", name, capability)?;
        }
        check_distinct_snake_names(&format!("task `{name}` capability"), held.iter())?;
    }
    Ok(())
}

/// Checks that the constructors emitted for every task, and for every
/// requirement it satisfies, have distinct names.
pub(super) fn check_constructors(
    requirements: &BTreeMap<String, RequirementSpec>,
    tasks: &BTreeMap<String, TaskSpec>,
) -> Result<(), String> {
    let mut seen: BTreeMap<String, String> = BTreeMap::new();
    for (name, task) in tasks {
        let base = snake_case(name);
        let mut constructors = vec![
            (format!("new_{base}"), format!("task `{name}`")),
            (format!("new_{base}_task"), format!("task `{name}`")),
        ];
        for (requirement_name, requirement) in requirements {
            if satisfies(task, requirement) {
                constructors.push((
                    format!("new_{base}_{}_requirement", snake_case(requirement_name)),
                    format!("task `{name}` adapter for `{requirement_name}`"),
                ));
            }
        }
        for (constructor, origin) in constructors {
            if let Some(previous) = seen.get(&constructor) {
                return Err(format!(
                    "{previous} and {origin} both generate constructor `{constructor}`"
                ));
            }
            seen.insert(constructor, origin);
        }
    }
    Ok(())
}

fn check_type_name(kind: &str, name: &str) -> Result<(), String> {
    if is_type_name(name) {
        Ok(())
    } else {
        Err(format!("{kind} `{name}` is not an UpperCamel identifier"))
    }
}

fn check_capability(kind: &str, owner: &str, capability: &str) -> Result<(), String> {
    if !is_type_name(capability) {
        return Err(format!(
            "{kind} `{owner}` capability `{capability}` is not an UpperCamel identifier"
        ));
    }
    let snake = snake_case(capability);
    if BASE_CAPABILITIES.iter().any(|base| snake_case(base) == snake) {
        return Err(format!(
            "{kind} `{owner}` declares `{capability}`, which clashes with a built-in capability"
        ));
    }
    if FORBIDDEN_IDENTS.contains(&snake.as_str()) {
        return Err(format!(
            "{kind} `{owner}` capability `{capability}` cannot be used as a field name"
        ));
    }
    Ok(())
}

/// Distinct names must stay distinct once snake-cased into function and field names.
fn check_distinct_snake_names<'a>(
    kind: &str,
    names: impl Iterator<Item = &'a String>,
) -> Result<(), String> {
    let mut seen: BTreeMap<String, &str> = BTreeMap::new();
    for name in names {
        if let Some(previous) = seen.insert(snake_case(name), name) {
            return Err(format!(
                "{kind} names `{previous}` and `{name}` generate the same identifier"
            ));
        }
    }
    Ok(())
}
