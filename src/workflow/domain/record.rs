//! Inspection record aggregate: the document body plus its lifecycle state.

use super::{ActorId, TaskId, WorkflowDomainError};
use crate::inspection::domain::{DocumentStatus, InspectionDocument, InspectionId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Inspection record aggregate root.
///
/// Owns the authoritative lifecycle status. The `audit` block inside the
/// document body is a projection the aggregate rewrites on every mutation;
/// incoming bodies never set it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionRecord {
    id: InspectionId,
    task_id: TaskId,
    performed_by: ActorId,
    status: DocumentStatus,
    baseline: InspectionDocument,
    document: InspectionDocument,
    approved_by: Option<ActorId>,
    approved_at: Option<DateTime<Utc>>,
    rejection_reason: Option<String>,
    report_ref: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted record aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedRecordData {
    /// Persisted inspection number.
    pub id: InspectionId,
    /// Persisted owning task.
    pub task_id: TaskId,
    /// Persisted owning inspector.
    pub performed_by: ActorId,
    /// Persisted lifecycle status.
    pub status: DocumentStatus,
    /// Persisted prefill baseline.
    pub baseline: InspectionDocument,
    /// Persisted current document body.
    pub document: InspectionDocument,
    /// Persisted approver, when approved.
    pub approved_by: Option<ActorId>,
    /// Persisted approval instant, when approved.
    pub approved_at: Option<DateTime<Utc>>,
    /// Persisted rejection reason, when rejected.
    pub rejection_reason: Option<String>,
    /// Persisted report locator, when a report was generated.
    pub report_ref: Option<String>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest lifecycle timestamp.
    pub updated_at: DateTime<Utc>,
}

impl InspectionRecord {
    /// Creates a draft record from a freshly generated prefill document.
    ///
    /// The prefill is retained as the immutable baseline the validator
    /// later checks identity against.
    #[must_use]
    pub fn new(
        task_id: TaskId,
        performed_by: ActorId,
        prefill: InspectionDocument,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: prefill.inspection_id.clone(),
            task_id,
            performed_by,
            status: DocumentStatus::Draft,
            baseline: prefill.clone(),
            document: prefill,
            approved_by: None,
            approved_at: None,
            rejection_reason: None,
            report_ref: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a record from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedRecordData) -> Self {
        Self {
            id: data.id,
            task_id: data.task_id,
            performed_by: data.performed_by,
            status: data.status,
            baseline: data.baseline,
            document: data.document,
            approved_by: data.approved_by,
            approved_at: data.approved_at,
            rejection_reason: data.rejection_reason,
            report_ref: data.report_ref,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the inspection number.
    #[must_use]
    pub const fn id(&self) -> &InspectionId {
        &self.id
    }

    /// Returns the owning task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the owning inspector.
    #[must_use]
    pub const fn performed_by(&self) -> ActorId {
        self.performed_by
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> DocumentStatus {
        self.status
    }

    /// Returns the prefill baseline.
    #[must_use]
    pub const fn baseline(&self) -> &InspectionDocument {
        &self.baseline
    }

    /// Returns the current document body.
    #[must_use]
    pub const fn document(&self) -> &InspectionDocument {
        &self.document
    }

    /// Returns the approver, once approved.
    #[must_use]
    pub const fn approved_by(&self) -> Option<ActorId> {
        self.approved_by
    }

    /// Returns the approval instant, once approved.
    #[must_use]
    pub const fn approved_at(&self) -> Option<DateTime<Utc>> {
        self.approved_at
    }

    /// Returns the rejection reason, while rejected.
    #[must_use]
    pub fn rejection_reason(&self) -> Option<&str> {
        self.rejection_reason.as_deref()
    }

    /// Returns the locator of the last generated report.
    #[must_use]
    pub fn report_ref(&self) -> Option<&str> {
        self.report_ref.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Moves the record to a new lifecycle status.
    ///
    /// The document's audit projection is rewritten to mirror the new
    /// status; moving to `Submitted` stamps the submission instant and
    /// leaving `Rejected` clears the stored rejection reason.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowDomainError::InvalidTransition`] when the state
    /// machine forbids the move.
    pub fn transition(
        &mut self,
        to: DocumentStatus,
        clock: &impl Clock,
    ) -> Result<(), WorkflowDomainError> {
        if !self.status.can_transition_to(to) {
            return Err(WorkflowDomainError::InvalidTransition {
                inspection_id: self.id.clone(),
                from: self.status,
                to,
            });
        }
        let now = clock.utc();
        if self.status == DocumentStatus::Rejected {
            self.rejection_reason = None;
        }
        self.status = to;
        self.document.audit.status = to;
        self.document.audit.last_modified_at = now;
        if to == DocumentStatus::Submitted {
            self.document.audit.submitted_at = Some(now);
        }
        self.updated_at = now;
        Ok(())
    }

    /// Replaces the document body with an inspector edit.
    ///
    /// The incoming body's audit block is discarded; the projection is
    /// rebuilt from the record's own status and timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowDomainError::NotEditable`] outside an editable
    /// status, [`WorkflowDomainError::IdentityMismatch`] when the body
    /// carries a different inspection number, and
    /// [`WorkflowDomainError::SchemaVersionFrozen`] when the schema version
    /// changes after a submission.
    pub fn replace_document(
        &mut self,
        mut document: InspectionDocument,
        clock: &impl Clock,
    ) -> Result<(), WorkflowDomainError> {
        if !self.status.is_editable() {
            return Err(WorkflowDomainError::NotEditable {
                inspection_id: self.id.clone(),
                status: self.status,
            });
        }
        if document.inspection_id != self.id {
            return Err(WorkflowDomainError::IdentityMismatch {
                expected: self.id.clone(),
                supplied: document.inspection_id,
            });
        }
        if self.document.audit.submitted_at.is_some()
            && document.schema_version != self.document.schema_version
        {
            return Err(WorkflowDomainError::SchemaVersionFrozen {
                frozen: self.document.schema_version.clone(),
                supplied: document.schema_version,
            });
        }
        let now = clock.utc();
        document.audit.status = self.status;
        document.audit.created_at = self.document.audit.created_at;
        document.audit.submitted_at = self.document.audit.submitted_at;
        document.audit.last_modified_at = now;
        self.document = document;
        self.updated_at = now;
        Ok(())
    }

    /// Approves a submitted record, freezing it permanently.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowDomainError::InvalidTransition`] when the record
    /// is not in a status approval is allowed from.
    pub fn approve(
        &mut self,
        approved_by: ActorId,
        clock: &impl Clock,
    ) -> Result<(), WorkflowDomainError> {
        self.transition(DocumentStatus::Completed, clock)?;
        self.approved_by = Some(approved_by);
        self.approved_at = Some(self.updated_at);
        Ok(())
    }

    /// Rejects the record, returning it to the inspector for rework.
    ///
    /// Rejection is permitted from any status.
    ///
    /// # Errors
    ///
    /// Currently infallible in practice; the signature matches the other
    /// transitions so callers handle all moves uniformly.
    pub fn reject(
        &mut self,
        reason: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<(), WorkflowDomainError> {
        self.transition(DocumentStatus::Rejected, clock)?;
        self.rejection_reason = Some(reason.into());
        Ok(())
    }

    /// Records a generated report and moves to `ReportGenerated`.
    ///
    /// Regeneration is permitted; the locator is overwritten each time.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowDomainError::InvalidTransition`] when the current
    /// status does not allow report generation.
    pub fn record_report(
        &mut self,
        locator: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<(), WorkflowDomainError> {
        self.transition(DocumentStatus::ReportGenerated, clock)?;
        self.report_ref = Some(locator.into());
        Ok(())
    }

    /// Recomputes derived state on the document body in place.
    ///
    /// Exposed for the calculator, which rewrites only the `derived`
    /// block and the modification stamp.
    pub const fn document_mut(&mut self) -> &mut InspectionDocument {
        &mut self.document
    }
}
