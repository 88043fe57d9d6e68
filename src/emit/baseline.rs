//! Tests unit: one fault-propagation test per task.

pub(super) const PAGE: &str = "baseline/page";
pub(super) const ITEM: &str = "baseline/task";

pub(super) const PAGE_TEMPLATE: &str = r#"
// Code generated by capgen. DO NOT EDIT.

use {{ paths.fault }} as fault;
use {{ paths.tasks }} as tasks;
use {{ paths.types }}::{FaultGetter, FaultSetter};
"#;

pub(super) const ITEM_TEMPLATE: &str = r#"
#[test]
fn {{ task.name | snake_case }}_task_trigger_fault() {
    let mut task = tasks::{{ task.name }}Task::default();
    FaultSetter::set_fault(&mut task, fault::new());
    task.trigger_fault("test error");
    assert!(FaultGetter::get_fault(&task).has_error());
}
"#;
