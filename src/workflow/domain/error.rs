//! Errors raised by the workflow domain model.

use crate::inspection::domain::{DocumentStatus, InspectionId};
use thiserror::Error;

/// Invariant violations raised by the workflow aggregates.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkflowDomainError {
    /// The requested status change is not permitted by the state machine.
    #[error("inspection {inspection_id} cannot move from {from} to {to}")]
    InvalidTransition {
        /// Inspection the transition was attempted on.
        inspection_id: InspectionId,
        /// Current status.
        from: DocumentStatus,
        /// Requested status.
        to: DocumentStatus,
    },
    /// An incoming document body carries a different inspection number.
    #[error("document carries inspection id {supplied}, record owns {expected}")]
    IdentityMismatch {
        /// Inspection number owned by the record.
        expected: InspectionId,
        /// Inspection number found in the incoming body.
        supplied: InspectionId,
    },
    /// The schema version may not change after submission.
    #[error("schema version is frozen at {frozen} after submission, got {supplied}")]
    SchemaVersionFrozen {
        /// Version the record was submitted under.
        frozen: String,
        /// Version found in the incoming body.
        supplied: String,
    },
    /// The document body may not be replaced in the current status.
    #[error("inspection {inspection_id} is not editable in status {status}")]
    NotEditable {
        /// Inspection the edit was attempted on.
        inspection_id: InspectionId,
        /// Current status.
        status: DocumentStatus,
    },
}
