// Code generated by capgen. DO NOT EDIT.

use crate::types as contracts;
use crate::schedule as schedule;
use crate::types as types;

/// Hand-written behaviour of a generated task type.
pub trait TaskBody {
    /// Called by the constructor after inputs are loaded and before they are validated.
    fn setup(&mut self) {}

    /// The task's work, run after its inputs validated.
    fn execute(&mut self);
}

/// download a file.
#[derive(Default)]
pub struct DownloadTask {
    fault: types::Fault,
    id: types::Id,
    pool: types::Pool,
    scheduler: types::Scheduler,
    content: types::Content,
    offset: types::Offset,
    size: types::Size,
}

impl types::FaultGetter for DownloadTask {
    fn get_fault(&self) -> &types::Fault {
        &self.fault
    }
}

impl types::FaultSetter for DownloadTask {
    fn set_fault(&mut self, value: types::Fault) {
        self.fault = value;
    }
}

impl types::IdGetter for DownloadTask {
    fn get_id(&self) -> &types::Id {
        &self.id
    }
}

impl types::IdSetter for DownloadTask {
    fn set_id(&mut self, value: types::Id) {
        self.id = value;
    }
}

impl types::PoolGetter for DownloadTask {
    fn get_pool(&self) -> &types::Pool {
        &self.pool
    }
}

impl types::PoolSetter for DownloadTask {
    fn set_pool(&mut self, value: types::Pool) {
        self.pool = value;
    }
}

impl types::SchedulerGetter for DownloadTask {
    fn get_scheduler(&self) -> &types::Scheduler {
        &self.scheduler
    }
}

impl types::SchedulerSetter for DownloadTask {
    fn set_scheduler(&mut self, value: types::Scheduler) {
        self.scheduler = value;
    }
}

impl types::ContentGetter for DownloadTask {
    fn get_content(&self) -> &types::Content {
        &self.content
    }
}

impl types::ContentSetter for DownloadTask {
    fn set_content(&mut self, value: types::Content) {
        self.content = value;
    }
}

impl types::OffsetGetter for DownloadTask {
    fn get_offset(&self) -> &types::Offset {
        &self.offset
    }
}

impl types::OffsetSetter for DownloadTask {
    fn set_offset(&mut self, value: types::Offset) {
        self.offset = value;
    }
}

impl types::SizeGetter for DownloadTask {
    fn get_size(&self) -> &types::Size {
        &self.size
    }
}

impl types::SizeSetter for DownloadTask {
    fn set_size(&mut self, value: types::Size) {
        self.size = value;
    }
}

impl types::ContentValidator for DownloadTask {}

impl types::OffsetValidator for DownloadTask {}

impl types::SizeValidator for DownloadTask {}

impl DownloadTask {
    /// Runs the validator of every declared input.
    ///
    /// # Errors
    ///
    /// Returns [`contracts::TaskError::InvalidInput`] for the first rejected input.
    pub fn validate_input(&self) -> Result<(), contracts::TaskError> {
        if !types::OffsetValidator::validate_offset(self) {
            return Err(contracts::TaskError::InvalidInput {
                task: "Download",
                capability: "Offset",
            });
        }
        Ok(())
    }

    /// Copies the fault accumulator, the pool and every declared input from `parent`.
    pub fn load_input(&mut self, parent: &dyn types::Task) {
        types::load_fault(parent, self);
        types::load_pool(parent, self);
        types::load_offset(parent, self);
    }

    /// Records `err` on the fault accumulator without stopping the task.
    pub fn trigger_fault<E>(&self, err: E)
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        self.fault.append(contracts::TaskError::Failed {
            task: "Download",
            source: err.into(),
        });
    }
}

impl types::Task for DownloadTask {
    fn run(&mut self) {
        if let Err(err) = self.validate_input() {
            self.fault.append(err);
            return;
        }
        TaskBody::execute(self);
        self.scheduler.wait();
    }
}

/// Builds a `Download` task from `parent`.
///
/// # Errors
///
/// Returns [`contracts::TaskError::InvalidInput`] when a declared input is rejected.
pub fn new_download(
    parent: &dyn types::Task,
) -> Result<DownloadTask, contracts::TaskError> {
    let mut task = DownloadTask::default();
    task.id = types::Id::from(uuid::Uuid::new_v4().to_string());
    task.load_input(parent);
    task.scheduler = schedule::new_scheduler(&task.pool);
    TaskBody::setup(&mut task);
    task.validate_input()?;
    Ok(task)
}

/// Builds a `Download` task from `parent` as a generic task.
///
/// # Errors
///
/// Fails like [`new_download`].
pub fn new_download_task(
    parent: &dyn types::Task,
) -> Result<Box<dyn types::Task>, contracts::TaskError> {
    Ok(Box::new(new_download(parent)?))
}

impl contracts::ReadRequirement for DownloadTask {}

/// Builds a `Download` task from `parent`, narrowed to [`contracts::ReadRequirement`].
///
/// # Errors
///
/// Fails like [`new_download`].
pub fn new_download_read_requirement(
    parent: &dyn types::Task,
) -> Result<Box<dyn contracts::ReadRequirement>, contracts::TaskError> {
    Ok(Box::new(new_download(parent)?))
}

const _: contracts::readScheduleFunc =
    new_download_read_requirement;

impl contracts::WriteRequirement for DownloadTask {}

/// Builds a `Download` task from `parent`, narrowed to [`contracts::WriteRequirement`].
///
/// # Errors
///
/// Fails like [`new_download`].
pub fn new_download_write_requirement(
    parent: &dyn types::Task,
) -> Result<Box<dyn contracts::WriteRequirement>, contracts::TaskError> {
    Ok(Box::new(new_download(parent)?))
}

const _: contracts::writeScheduleFunc =
    new_download_write_requirement;

/// list objects.
#[derive(Default)]
pub struct ListTask {
    fault: types::Fault,
    id: types::Id,
    pool: types::Pool,
    scheduler: types::Scheduler,
    names: types::Names,
}

impl types::FaultGetter for ListTask {
    fn get_fault(&self) -> &types::Fault {
        &self.fault
    }
}

impl types::FaultSetter for ListTask {
    fn set_fault(&mut self, value: types::Fault) {
        self.fault = value;
    }
}

impl types::IdGetter for ListTask {
    fn get_id(&self) -> &types::Id {
        &self.id
    }
}

impl types::IdSetter for ListTask {
    fn set_id(&mut self, value: types::Id) {
        self.id = value;
    }
}

impl types::PoolGetter for ListTask {
    fn get_pool(&self) -> &types::Pool {
        &self.pool
    }
}

impl types::PoolSetter for ListTask {
    fn set_pool(&mut self, value: types::Pool) {
        self.pool = value;
    }
}

impl types::SchedulerGetter for ListTask {
    fn get_scheduler(&self) -> &types::Scheduler {
        &self.scheduler
    }
}

impl types::SchedulerSetter for ListTask {
    fn set_scheduler(&mut self, value: types::Scheduler) {
        self.scheduler = value;
    }
}

impl types::NamesGetter for ListTask {
    fn get_names(&self) -> &types::Names {
        &self.names
    }
}

impl types::NamesSetter for ListTask {
    fn set_names(&mut self, value: types::Names) {
        self.names = value;
    }
}

impl types::NamesValidator for ListTask {}

impl ListTask {
    /// Runs the validator of every declared input.
    ///
    /// # Errors
    ///
    /// Returns [`contracts::TaskError::InvalidInput`] for the first rejected input.
    pub fn validate_input(&self) -> Result<(), contracts::TaskError> {
        Ok(())
    }

    /// Copies the fault accumulator, the pool and every declared input from `parent`.
    pub fn load_input(&mut self, parent: &dyn types::Task) {
        types::load_fault(parent, self);
        types::load_pool(parent, self);
    }

    /// Records `err` on the fault accumulator without stopping the task.
    pub fn trigger_fault<E>(&self, err: E)
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        self.fault.append(contracts::TaskError::Failed {
            task: "List",
            source: err.into(),
        });
    }
}

impl types::Task for ListTask {
    fn run(&mut self) {
        if let Err(err) = self.validate_input() {
            self.fault.append(err);
            return;
        }
        TaskBody::execute(self);
        self.scheduler.wait();
    }
}

/// Builds a `List` task from `parent`.
///
/// # Errors
///
/// Returns [`contracts::TaskError::InvalidInput`] when a declared input is rejected.
pub fn new_list(
    parent: &dyn types::Task,
) -> Result<ListTask, contracts::TaskError> {
    let mut task = ListTask::default();
    task.id = types::Id::from(uuid::Uuid::new_v4().to_string());
    task.load_input(parent);
    task.scheduler = schedule::new_scheduler(&task.pool);
    TaskBody::setup(&mut task);
    task.validate_input()?;
    Ok(task)
}

/// Builds a `List` task from `parent` as a generic task.
///
/// # Errors
///
/// Fails like [`new_list`].
pub fn new_list_task(
    parent: &dyn types::Task,
) -> Result<Box<dyn types::Task>, contracts::TaskError> {
    Ok(Box::new(new_list(parent)?))
}

/// upload a file.
#[derive(Default)]
pub struct UploadTask {
    fault: types::Fault,
    id: types::Id,
    pool: types::Pool,
    scheduler: types::Scheduler,
    size: types::Size,
}

impl types::FaultGetter for UploadTask {
    fn get_fault(&self) -> &types::Fault {
        &self.fault
    }
}

impl types::FaultSetter for UploadTask {
    fn set_fault(&mut self, value: types::Fault) {
        self.fault = value;
    }
}

impl types::IdGetter for UploadTask {
    fn get_id(&self) -> &types::Id {
        &self.id
    }
}

impl types::IdSetter for UploadTask {
    fn set_id(&mut self, value: types::Id) {
        self.id = value;
    }
}

impl types::PoolGetter for UploadTask {
    fn get_pool(&self) -> &types::Pool {
        &self.pool
    }
}

impl types::PoolSetter for UploadTask {
    fn set_pool(&mut self, value: types::Pool) {
        self.pool = value;
    }
}

impl types::SchedulerGetter for UploadTask {
    fn get_scheduler(&self) -> &types::Scheduler {
        &self.scheduler
    }
}

impl types::SchedulerSetter for UploadTask {
    fn set_scheduler(&mut self, value: types::Scheduler) {
        self.scheduler = value;
    }
}

impl types::SizeGetter for UploadTask {
    fn get_size(&self) -> &types::Size {
        &self.size
    }
}

impl types::SizeSetter for UploadTask {
    fn set_size(&mut self, value: types::Size) {
        self.size = value;
    }
}

impl types::SizeValidator for UploadTask {}

impl UploadTask {
    /// Runs the validator of every declared input.
    ///
    /// # Errors
    ///
    /// Returns [`contracts::TaskError::InvalidInput`] for the first rejected input.
    pub fn validate_input(&self) -> Result<(), contracts::TaskError> {
        if !types::SizeValidator::validate_size(self) {
            return Err(contracts::TaskError::InvalidInput {
                task: "Upload",
                capability: "Size",
            });
        }
        Ok(())
    }

    /// Copies the fault accumulator, the pool and every declared input from `parent`.
    pub fn load_input(&mut self, parent: &dyn types::Task) {
        types::load_fault(parent, self);
        types::load_pool(parent, self);
        types::load_size(parent, self);
    }

    /// Records `err` on the fault accumulator without stopping the task.
    pub fn trigger_fault<E>(&self, err: E)
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        self.fault.append(contracts::TaskError::Failed {
            task: "Upload",
            source: err.into(),
        });
    }
}

impl types::Task for UploadTask {
    fn run(&mut self) {
        if let Err(err) = self.validate_input() {
            self.fault.append(err);
            return;
        }
        TaskBody::execute(self);
        self.scheduler.wait();
    }
}

/// Builds a `Upload` task from `parent`.
///
/// # Errors
///
/// Returns [`contracts::TaskError::InvalidInput`] when a declared input is rejected.
pub fn new_upload(
    parent: &dyn types::Task,
) -> Result<UploadTask, contracts::TaskError> {
    let mut task = UploadTask::default();
    task.id = types::Id::from(uuid::Uuid::new_v4().to_string());
    task.load_input(parent);
    task.scheduler = schedule::new_scheduler(&task.pool);
    TaskBody::setup(&mut task);
    task.validate_input()?;
    Ok(task)
}

/// Builds a `Upload` task from `parent` as a generic task.
///
/// # Errors
///
/// Fails like [`new_upload`].
pub fn new_upload_task(
    parent: &dyn types::Task,
) -> Result<Box<dyn types::Task>, contracts::TaskError> {
    Ok(Box::new(new_upload(parent)?))
}
