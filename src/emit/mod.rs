//! Template-driven emission of the three generated units.
//!
//! Each unit is a page template rendered once, followed by an item template
//! rendered per requirement or task in name order. Items are separated by a
//! single blank line and every unit ends with one newline, so output does
//! not depend on template whitespace.

mod baseline;
mod contracts;
mod helpers;
mod tasks;

use serde::Serialize;
use tera::{Context, Tera};

use crate::config::ModulePaths;
use crate::error::GenerateError;
use crate::registry::{Registries, RequirementSpec, TaskSpec, BASE_CAPABILITIES};

/// Rendered contents of the three generated units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    /// Capability contracts, scheduling-function types and `TaskError`.
    pub contracts: String,
    /// Task types, lifecycle methods and constructors.
    pub tasks: String,
    /// Baseline tests.
    pub tests: String,
}

/// Renders artifacts from stamped registries.
///
/// Built once per run; holds its own template set and filters.
pub struct Emitter {
    tera: Tera,
    paths: ModulePaths,
}

impl Emitter {
    /// Compiles the unit templates.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Template`] if a template does not parse.
    pub fn new(paths: ModulePaths) -> Result<Self, GenerateError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        helpers::register(&mut tera);
        tera.add_raw_templates(vec![
            (contracts::PAGE, contracts::PAGE_TEMPLATE),
            (contracts::ITEM, contracts::ITEM_TEMPLATE),
            (tasks::PAGE, tasks::PAGE_TEMPLATE),
            (tasks::ITEM, tasks::ITEM_TEMPLATE),
            (baseline::PAGE, baseline::PAGE_TEMPLATE),
            (baseline::ITEM, baseline::ITEM_TEMPLATE),
        ])?;
        Ok(Self { tera, paths })
    }

    /// Renders all three units.
    ///
    /// Tasks must already carry their `satisfied_requirements`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Template`] if rendering fails.
    pub fn emit(&self, registries: &Registries) -> Result<Artifacts, GenerateError> {
        let requirements: Vec<_> =
            registries.requirements.values().map(RequirementView::from).collect();
        let tasks: Vec<_> = registries.tasks.values().map(TaskView::from).collect();
        Ok(Artifacts {
            contracts: self.render_unit(
                contracts::PAGE,
                contracts::ITEM,
                "requirement",
                &requirements,
            )?,
            tasks: self.render_unit(tasks::PAGE, tasks::ITEM, "task", &tasks)?,
            tests: self.render_unit(baseline::PAGE, baseline::ITEM, "task", &tasks)?,
        })
    }

    fn render_unit<T: Serialize>(
        &self,
        page: &str,
        item: &str,
        key: &str,
        entries: &[T],
    ) -> Result<String, GenerateError> {
        let mut context = Context::new();
        context.insert("paths", &self.paths);
        context.insert("bases", BASE_CAPABILITIES);

        let mut out = self.tera.render(page, &context)?.trim().to_string();
        out.push('\n');
        for entry in entries {
            context.insert(key, entry);
            out.push('\n');
            out.push_str(self.tera.render(item, &context)?.trim());
            out.push('\n');
        }
        Ok(out)
    }
}

/// Template view of a requirement; the registry types do not serialize names.
#[derive(Serialize)]
struct RequirementView<'a> {
    name: &'a str,
    description: &'a str,
    value: &'a [String],
}

impl<'a> From<&'a RequirementSpec> for RequirementView<'a> {
    fn from(requirement: &'a RequirementSpec) -> Self {
        Self {
            name: &requirement.name,
            description: &requirement.description,
            value: &requirement.value,
        }
    }
}

#[derive(Serialize)]
struct TaskView<'a> {
    name: &'a str,
    description: &'a str,
    input: &'a [String],
    output: &'a [String],
    satisfied: &'a [String],
}

impl<'a> From<&'a TaskSpec> for TaskView<'a> {
    fn from(task: &'a TaskSpec) -> Self {
        Self {
            name: &task.name,
            description: &task.description,
            input: &task.input,
            output: &task.output,
            satisfied: &task.satisfied_requirements,
        }
    }
}
