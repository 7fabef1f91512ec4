//! Domain model for the inspection lifecycle.

mod actor;
mod audit;
mod error;
mod record;
mod task;

pub use actor::{Actor, ActorId, InspectorIdentity, Role};
pub use audit::{AuditAction, AuditEntry, AuditEntryId};
pub use error::WorkflowDomainError;
pub use record::{InspectionRecord, PersistedRecordData};
pub use task::{InspectionTask, ParseTaskStatusError, PersistedTaskData, TaskId, TaskStatus};
