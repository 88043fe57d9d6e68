// Code generated by capgen. DO NOT EDIT.

use crate::fault as fault;
use crate::task as tasks;
use crate::types::{FaultGetter, FaultSetter};

#[test]
fn download_task_trigger_fault() {
    let mut task = tasks::DownloadTask::default();
    FaultSetter::set_fault(&mut task, fault::new());
    task.trigger_fault("test error");
    assert!(FaultGetter::get_fault(&task).has_error());
}

#[test]
fn list_task_trigger_fault() {
    let mut task = tasks::ListTask::default();
    FaultSetter::set_fault(&mut task, fault::new());
    task.trigger_fault("test error");
    assert!(FaultGetter::get_fault(&task).has_error());
}

#[test]
fn upload_task_trigger_fault() {
    let mut task = tasks::UploadTask::default();
    FaultSetter::set_fault(&mut task, fault::new());
    task.trigger_fault("test error");
    assert!(FaultGetter::get_fault(&task).has_error());
}
