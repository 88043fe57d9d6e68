// Code generated by capgen. DO NOT EDIT.

use std::error::Error;
use std::fmt;

use crate::types as types;

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

/// Contract a task must fulfil to be scheduled as `Read`.
///
/// read a byte range.
pub trait ReadRequirement:
    types::Task
    + types::OffsetGetter
    + types::OffsetSetter
    + types::OffsetValidator
    + types::SizeGetter
    + types::SizeSetter
    + types::SizeValidator
{
}

/// Builds a task fulfilling [`ReadRequirement`] from a parent task.
#[allow(dead_code, non_camel_case_types)]
pub(crate) type readScheduleFunc =
    fn(&dyn types::Task) -> Result<Box<dyn ReadRequirement>, TaskError>;

/// Contract a task must fulfil to be scheduled as `Write`.
///
/// write at an offset.
pub trait WriteRequirement:
    types::Task
    + types::OffsetGetter
    + types::OffsetSetter
    + types::OffsetValidator
{
}

/// Builds a task fulfilling [`WriteRequirement`] from a parent task.
#[allow(dead_code, non_camel_case_types)]
pub(crate) type writeScheduleFunc =
    fn(&dyn types::Task) -> Result<Box<dyn WriteRequirement>, TaskError>;
