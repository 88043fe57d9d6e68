//! Tasks unit: per task a concrete type holding its capabilities, its
//! lifecycle methods, a raw constructor, a generic constructor and one
//! adapter constructor per satisfied requirement.

pub(super) const PAGE: &str = "tasks/page";
pub(super) const ITEM: &str = "tasks/task";

pub(super) const PAGE_TEMPLATE: &str = r#"
// Code generated by capgen. DO NOT EDIT.

use {{ paths.contracts }} as contracts;
use {{ paths.schedule }} as schedule;
use {{ paths.types }} as types;

/// Hand-written behaviour of a generated task type.
pub trait TaskBody {
    /// Called by the constructor after inputs are loaded and before they are validated.
    fn setup(&mut self) {}

    /// The task's work, run after its inputs validated.
    fn execute(&mut self);
}
"#;

pub(super) const ITEM_TEMPLATE: &str = r#"
{%- set held = task.input | merge(with=task.output) -%}
{%- set holders = bases | concat(with=held) -%}
{%- set fn_name = task.name | snake_case -%}
{%- if task.description %}
/// {{ task.description | sentence }}
{%- else %}
/// The `{{ task.name }}` task.
{%- endif %}
#[derive(Default)]
pub struct {{ task.name }}Task {
{%- for capability in holders %}
    {{ capability | field }}: types::{{ capability }},
{%- endfor %}
}
{%- for capability in holders %}

impl types::{{ capability }}Getter for {{ task.name }}Task {
    fn get_{{ capability | snake_case }}(&self) -> &types::{{ capability }} {
        &self.{{ capability | field }}
    }
}

impl types::{{ capability }}Setter for {{ task.name }}Task {
    fn set_{{ capability | snake_case }}(&mut self, value: types::{{ capability }}) {
        self.{{ capability | field }} = value;
    }
}
{%- endfor %}
{%- for capability in held %}

impl types::{{ capability }}Validator for {{ task.name }}Task {}
{%- endfor %}

impl {{ task.name }}Task {
    /// Runs the validator of every declared input.
    ///
    /// # Errors
    ///
    /// Returns [`contracts::TaskError::InvalidInput`] for the first rejected input.
    pub fn validate_input(&self) -> Result<(), contracts::TaskError> {
{%- for capability in task.input %}
        if !types::{{ capability }}Validator::validate_{{ capability | snake_case }}(self) {
            return Err(contracts::TaskError::InvalidInput {
                task: "{{ task.name }}",
                capability: "{{ capability }}",
            });
        }
{%- endfor %}
        Ok(())
    }

    /// Copies the fault accumulator, the pool and every declared input from `parent`.
    pub fn load_input(&mut self, parent: &dyn types::Task) {
        types::load_fault(parent, self);
        types::load_pool(parent, self);
{%- for capability in task.input %}
        types::load_{{ capability | snake_case }}(parent, self);
{%- endfor %}
    }

    /// Records `err` on the fault accumulator without stopping the task.
    pub fn trigger_fault<E>(&self, err: E)
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        self.fault.append(contracts::TaskError::Failed {
            task: "{{ task.name }}",
            source: err.into(),
        });
    }
}

impl types::Task for {{ task.name }}Task {
    fn run(&mut self) {
        if let Err(err) = self.validate_input() {
            self.fault.append(err);
            return;
        }
        TaskBody::execute(self);
        self.scheduler.wait();
    }
}

/// Builds a `{{ task.name }}` task from `parent`.
///
/// # Errors
///
/// Returns [`contracts::TaskError::InvalidInput`] when a declared input is rejected.
pub fn new_{{ fn_name }}(
    parent: &dyn types::Task,
) -> Result<{{ task.name }}Task, contracts::TaskError> {
    let mut task = {{ task.name }}Task::default();
    task.id = types::Id::from(uuid::Uuid::new_v4().to_string());
    task.load_input(parent);
    task.scheduler = schedule::new_scheduler(&task.pool);
    TaskBody::setup(&mut task);
    task.validate_input()?;
    Ok(task)
}

/// Builds a `{{ task.name }}` task from `parent` as a generic task.
///
/// # Errors
///
/// Fails like [`new_{{ fn_name }}`].
pub fn new_{{ fn_name }}_task(
    parent: &dyn types::Task,
) -> Result<Box<dyn types::Task>, contracts::TaskError> {
    Ok(Box::new(new_{{ fn_name }}(parent)?))
}
{%- for requirement in task.satisfied %}

impl contracts::{{ requirement }}Requirement for {{ task.name }}Task {}

/// Builds a `{{ task.name }}` task from `parent`, narrowed to [`contracts::{{ requirement }}Requirement`].
///
/// # Errors
///
/// Fails like [`new_{{ fn_name }}`].
pub fn new_{{ fn_name }}_{{ requirement | snake_case }}_requirement(
    parent: &dyn types::Task,
) -> Result<Box<dyn contracts::{{ requirement }}Requirement>, contracts::TaskError> {
    Ok(Box::new(new_{{ fn_name }}(parent)?))
}

const _: contracts::{{ requirement | lower_first }}ScheduleFunc =
    new_{{ fn_name }}_{{ requirement | snake_case }}_requirement;
{%- endfor %}
"#;
