//! Repository ports for task and inspection persistence.

use crate::inspection::domain::InspectionId;
use crate::workflow::domain::{AuditEntry, InspectionRecord, InspectionTask, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Task persistence contract.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateTask`] when the task identifier
    /// already exists.
    async fn create(&self, task: &InspectionTask) -> StoreResult<()>;

    /// Persists changes to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TaskNotFound`] when the task does not exist.
    async fn update(&self, task: &InspectionTask) -> StoreResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> StoreResult<Option<InspectionTask>>;

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TaskNotFound`] when the task does not exist.
    async fn delete(&self, id: TaskId) -> StoreResult<()>;
}

/// Inspection record persistence contract, including the audit ledger.
#[async_trait]
pub trait InspectionStore: Send + Sync {
    /// Stores a new inspection record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateInspection`] when the inspection
    /// number already exists.
    async fn create(&self, record: &InspectionRecord) -> StoreResult<()>;

    /// Persists changes to an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InspectionNotFound`] when the record does not
    /// exist.
    async fn update(&self, record: &InspectionRecord) -> StoreResult<()>;

    /// Finds a record by inspection number.
    ///
    /// Returns `None` when the record does not exist.
    async fn find_by_id(&self, id: &InspectionId) -> StoreResult<Option<InspectionRecord>>;

    /// Finds the record created for a task, when one exists.
    async fn find_by_task(&self, task_id: TaskId) -> StoreResult<Option<InspectionRecord>>;

    /// Removes a record. Ledger entries for it are retained.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InspectionNotFound`] when the record does not
    /// exist.
    async fn delete(&self, id: &InspectionId) -> StoreResult<()>;

    /// Appends one entry to the audit ledger.
    ///
    /// The ledger is append-only; entries survive record deletion.
    async fn append_audit_entry(&self, entry: &AuditEntry) -> StoreResult<()>;

    /// Returns the ledger entries for an inspection in append order.
    async fn audit_entries(&self, id: &InspectionId) -> StoreResult<Vec<AuditEntry>>;
}

/// Errors returned by store implementations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// An inspection with the same number already exists.
    #[error("duplicate inspection number: {0}")]
    DuplicateInspection(InspectionId),

    /// The task was not found.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The inspection record was not found.
    #[error("inspection not found: {0}")]
    InspectionNotFound(InspectionId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
