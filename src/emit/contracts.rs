//! Capability contracts unit: one trait and one scheduling-function type
//! per requirement, plus the `TaskError` shared by every generated task.

pub(super) const PAGE: &str = "contracts/page";
pub(super) const ITEM: &str = "contracts/requirement";

pub(super) const PAGE_TEMPLATE: &str = r#"
// Code generated by capgen. DO NOT EDIT.

use std::error::Error;
use std::fmt;

use {{ paths.types }} as types;

/// Failure of a generated task.
#[derive(Debug)]
pub enum TaskError {
    /// A declared input was rejected by its validator.
    InvalidInput {
        /// Task name.
        task: &'static str,
        /// Name of the rejected capability.
        capability: &'static str,
    },
    /// The task body reported an error through `trigger_fault`.
    Failed {
        /// Task name.
        task: &'static str,
        /// Error reported by the body.
        source: Box<dyn Error + Send + Sync>,
    },
}

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { task, capability } => {
                write!(f, "Task {task} value {capability} is invalid")
            }
            Self::Failed { task, source } => write!(f, "Task {task} failed: {source}"),
        }
    }
}

impl Error for TaskError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidInput { .. } => None,
            Self::Failed { source, .. } => {
                let source: &(dyn Error + 'static) = source.as_ref();
                Some(source)
            }
        }
    }
}
"#;

pub(super) const ITEM_TEMPLATE: &str = r#"
/// Contract a task must fulfil to be scheduled as `{{ requirement.name }}`.
{%- if requirement.description %}
///
/// {{ requirement.description | sentence }}
{%- endif %}
pub trait {{ requirement.name }}Requirement:
    types::Task
{%- for value in requirement.value %}
    + types::{{ value }}Getter
    + types::{{ value }}Setter
    + types::{{ value }}Validator
{%- endfor %}
{
}

/// Builds a task fulfilling [`{{ requirement.name }}Requirement`] from a parent task.
#[allow(dead_code, non_camel_case_types)]
pub(crate) type {{ requirement.name | lower_first }}ScheduleFunc =
    fn(&dyn types::Task) -> Result<Box<dyn {{ requirement.name }}Requirement>, TaskError>;
"#;
