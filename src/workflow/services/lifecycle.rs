//! Service layer orchestrating the inspection lifecycle.
//!
//! Every operation takes the calling [`Actor`] explicitly; the service
//! enforces role and ownership gates, drives the domain state machine, and
//! appends one audit ledger entry per completed operation.

use crate::inspection::domain::{
    DocumentError, DocumentStatus, InspectionDocument, InspectionId, MetadataOverrides,
    TechnicianRef,
};
use crate::inspection::ports::{ReferenceData, ReferenceDataError};
use crate::inspection::services::{
    DocumentValidator, PrefillGenerator, PrefillRequest, ReportContext, ReportNormalizer,
    ScoreCalculator,
};
use crate::workflow::domain::{
    Actor, ActorId, AuditAction, AuditEntry, InspectionRecord, InspectionTask, Role, TaskId,
    TaskStatus, WorkflowDomainError,
};
use crate::workflow::ports::{
    InspectionStore, InspectorDirectory, InspectorDirectoryError, RenderError, RenderedArtifact,
    ReportRenderer, StoreError, TaskStore,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task with its prefilled inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    property_id: String,
    client_name: String,
    property_address: String,
    assigned_to: ActorId,
    overrides: MetadataOverrides,
}

impl CreateTaskRequest {
    /// Creates a request with the required task fields.
    #[must_use]
    pub fn new(
        property_id: impl Into<String>,
        client_name: impl Into<String>,
        property_address: impl Into<String>,
        assigned_to: ActorId,
    ) -> Self {
        Self {
            property_id: property_id.into(),
            client_name: client_name.into(),
            property_address: property_address.into(),
            assigned_to,
            overrides: MetadataOverrides::default(),
        }
    }

    /// Merges metadata overrides into the prefilled document.
    #[must_use]
    pub fn with_overrides(mut self, overrides: MetadataOverrides) -> Self {
        self.overrides = overrides;
        self
    }
}

/// A freshly created task together with its draft inspection record.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedInspection {
    /// The stored task.
    pub task: InspectionTask,
    /// The stored draft record.
    pub record: InspectionRecord,
}

/// Service-level errors for lifecycle operations.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// The actor's role does not permit the operation.
    #[error("operation requires the {required} role")]
    AuthorizationDenied {
        /// Role the operation is gated on.
        required: Role,
    },
    /// The actor does not own the inspection.
    #[error("inspection {0} is owned by another inspector")]
    NotOwner(InspectionId),
    /// The current status does not permit the operation.
    #[error("operation not permitted in status {current}")]
    PreconditionFailed {
        /// Status the record was found in.
        current: DocumentStatus,
    },
    /// Submission rules were violated.
    #[error("validation failed with {} error(s)", .0.len())]
    ValidationFailed(Vec<String>),
    /// The assignee is unknown to the inspector directory.
    #[error("unknown inspector: {0}")]
    UnknownInspector(ActorId),
    /// The task was not found.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
    /// The inspection record was not found.
    #[error("inspection not found: {0}")]
    InspectionNotFound(InspectionId),
    /// The supplied body was not a well-formed document.
    #[error(transparent)]
    Malformed(#[from] DocumentError),
    /// A domain invariant was violated.
    #[error(transparent)]
    Domain(WorkflowDomainError),
    /// A store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The inspector directory failed.
    #[error(transparent)]
    Directory(#[from] InspectorDirectoryError),
    /// Reference data could not be fetched.
    #[error(transparent)]
    Reference(#[from] ReferenceDataError),
    /// Report rendering failed.
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Status-guard violations surface as precondition failures carrying the
/// current status so callers can reconcile; identity violations stay
/// domain errors.
impl From<WorkflowDomainError> for LifecycleError {
    fn from(err: WorkflowDomainError) -> Self {
        match err {
            WorkflowDomainError::InvalidTransition { from, .. } => {
                Self::PreconditionFailed { current: from }
            }
            WorkflowDomainError::NotEditable { status, .. } => {
                Self::PreconditionFailed { current: status }
            }
            other => Self::Domain(other),
        }
    }
}

/// Result type for lifecycle service operations.
pub type LifecycleResult<T> = Result<T, LifecycleError>;

/// Inspection lifecycle orchestration service.
#[derive(Clone)]
pub struct InspectionLifecycleService<T, S, D, R, P, C>
where
    T: TaskStore,
    S: InspectionStore,
    D: InspectorDirectory,
    R: ReferenceData,
    P: ReportRenderer,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    inspections: Arc<S>,
    directory: Arc<D>,
    reference: Arc<R>,
    renderer: Arc<P>,
    clock: Arc<C>,
    storage_base: String,
}

impl<T, S, D, R, P, C> InspectionLifecycleService<T, S, D, R, P, C>
where
    T: TaskStore,
    S: InspectionStore,
    D: InspectorDirectory,
    R: ReferenceData,
    P: ReportRenderer,
    C: Clock + Send + Sync,
{
    /// Creates a new lifecycle service.
    ///
    /// `storage_base` is the external-storage locator prefix used when
    /// rewriting photo paths during report generation.
    #[must_use]
    pub fn new(
        tasks: Arc<T>,
        inspections: Arc<S>,
        directory: Arc<D>,
        reference: Arc<R>,
        renderer: Arc<P>,
        clock: Arc<C>,
        storage_base: impl Into<String>,
    ) -> Self {
        Self {
            tasks,
            inspections,
            directory,
            reference,
            renderer,
            clock,
            storage_base: storage_base.into(),
        }
    }

    /// Creates a task and its prefilled draft inspection.
    ///
    /// Admin only. The assignee must resolve through the inspector
    /// directory; the prefill technician identity is taken from there.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::AuthorizationDenied`] for non-admins,
    /// [`LifecycleError::UnknownInspector`] for unresolvable assignees,
    /// and store or reference errors as raised.
    pub async fn create_task(
        &self,
        actor: Actor,
        request: CreateTaskRequest,
    ) -> LifecycleResult<CreatedInspection> {
        ensure_admin(actor)?;
        let identity = self
            .directory
            .find_inspector(request.assigned_to)
            .await?
            .ok_or(LifecycleError::UnknownInspector(request.assigned_to))?;

        let snapshot = self.reference.snapshot().await?;
        let technician = TechnicianRef::Identified {
            id: Some(identity.id.to_string()),
            name: Some(identity.name),
        };

        // Task fields seed the document metadata unless explicitly
        // overridden.
        let mut overrides = request.overrides;
        overrides
            .property_id
            .get_or_insert_with(|| request.property_id.clone());
        overrides
            .client_name
            .get_or_insert_with(|| request.client_name.clone());
        overrides
            .property_address
            .get_or_insert_with(|| request.property_address.clone());

        let document = PrefillGenerator::generate(
            &snapshot.taxonomy,
            &snapshot.issue_catalog,
            PrefillRequest::new(technician).with_overrides(overrides),
            &*self.clock,
        );

        let task = InspectionTask::new(
            request.property_id,
            request.client_name,
            request.property_address,
            request.assigned_to,
            actor.id,
            &*self.clock,
        );
        let record = InspectionRecord::new(task.id(), request.assigned_to, document, &*self.clock);

        self.tasks.create(&task).await?;
        self.inspections.create(&record).await?;
        self.append_audit(AuditEntry::new(
            record.id().clone(),
            AuditAction::Created,
            actor.id,
            &*self.clock,
        ))
        .await?;

        Ok(CreatedInspection { task, record })
    }

    /// Replaces the document body with an inspector edit.
    ///
    /// Owner only. A first edit moves the draft to `InProgress` and starts
    /// the owning task; an edit after rejection does the same.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::NotOwner`] for other actors,
    /// [`LifecycleError::Malformed`] for unparsable bodies, and domain
    /// errors for frozen-field violations.
    pub async fn update_document(
        &self,
        actor: Actor,
        id: &InspectionId,
        body: &serde_json::Value,
    ) -> LifecycleResult<InspectionRecord> {
        let mut record = self.require_record(id).await?;
        ensure_owner(actor, &record)?;

        let document = InspectionDocument::parse(body)?;
        let from = record.status();
        record.replace_document(document, &*self.clock)?;
        if matches!(from, DocumentStatus::Draft | DocumentStatus::Rejected) {
            record.transition(DocumentStatus::InProgress, &*self.clock)?;
            self.start_task(record.task_id()).await?;
        }
        self.inspections.update(&record).await?;

        let mut entry = AuditEntry::new(
            record.id().clone(),
            AuditAction::Modified,
            actor.id,
            &*self.clock,
        );
        if from != record.status() {
            entry = entry.with_transition(from, record.status());
        }
        self.append_audit(entry).await?;

        Ok(record)
    }

    /// Submits the inspection for review.
    ///
    /// Owner only. When `body` is given the document is replaced first.
    /// The submission rules are checked against the prefill baseline, then
    /// the derived metrics are recomputed and the record moves to
    /// `Submitted`; the owning task completes.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::ValidationFailed`] listing every violated
    /// rule, or a domain error when submission is not reachable from the
    /// current status.
    pub async fn submit(
        &self,
        actor: Actor,
        id: &InspectionId,
        body: Option<&serde_json::Value>,
    ) -> LifecycleResult<InspectionRecord> {
        let mut record = self.require_record(id).await?;
        ensure_owner(actor, &record)?;

        if let Some(body) = body {
            let document = InspectionDocument::parse(body)?;
            record.replace_document(document, &*self.clock)?;
        }

        let report = DocumentValidator::validate(record.document(), Some(record.baseline()));
        if !report.valid() {
            return Err(LifecycleError::ValidationFailed(report.into_errors()));
        }

        let snapshot = self.reference.snapshot().await?;
        let calculator = ScoreCalculator::new(snapshot.scoring_rules);
        let from = record.status();
        let derived = calculator.apply(record.document_mut(), &*self.clock, None);
        record.transition(DocumentStatus::Submitted, &*self.clock)?;
        self.inspections.update(&record).await?;
        self.complete_task(record.task_id()).await?;

        let detail = derived.overall_score.map_or_else(
            || "No scoreable rooms".to_owned(),
            |score| format!("Overall score {score}"),
        );
        self.append_audit(
            AuditEntry::new(
                record.id().clone(),
                AuditAction::Submitted,
                actor.id,
                &*self.clock,
            )
            .with_transition(from, DocumentStatus::Submitted)
            .with_detail(detail),
        )
        .await?;

        Ok(record)
    }

    /// Marks a submitted inspection final.
    ///
    /// Owner only.
    ///
    /// # Errors
    ///
    /// Returns a domain error when the record is not `Submitted`.
    pub async fn mark_final(
        &self,
        actor: Actor,
        id: &InspectionId,
    ) -> LifecycleResult<InspectionRecord> {
        let mut record = self.require_record(id).await?;
        ensure_owner(actor, &record)?;

        let from = record.status();
        record.transition(DocumentStatus::Final, &*self.clock)?;
        self.inspections.update(&record).await?;
        self.append_audit(
            AuditEntry::new(
                record.id().clone(),
                AuditAction::MarkedFinal,
                actor.id,
                &*self.clock,
            )
            .with_transition(from, DocumentStatus::Final),
        )
        .await?;

        Ok(record)
    }

    /// Approves a submitted inspection, freezing it permanently.
    ///
    /// Admin only.
    ///
    /// # Errors
    ///
    /// Returns a domain error when approval is not reachable from the
    /// current status.
    pub async fn approve(
        &self,
        actor: Actor,
        id: &InspectionId,
    ) -> LifecycleResult<InspectionRecord> {
        ensure_admin(actor)?;
        let mut record = self.require_record(id).await?;

        let from = record.status();
        record.approve(actor.id, &*self.clock)?;
        self.inspections.update(&record).await?;
        self.append_audit(
            AuditEntry::new(
                record.id().clone(),
                AuditAction::Approved,
                actor.id,
                &*self.clock,
            )
            .with_transition(from, DocumentStatus::Completed),
        )
        .await?;

        Ok(record)
    }

    /// Rejects an inspection, returning it to the inspector for rework.
    ///
    /// Admin only; permitted from any status.
    pub async fn reject(
        &self,
        actor: Actor,
        id: &InspectionId,
        reason: impl Into<String> + Send,
    ) -> LifecycleResult<InspectionRecord> {
        ensure_admin(actor)?;
        let mut record = self.require_record(id).await?;

        let reason = reason.into();
        let from = record.status();
        record.reject(reason.clone(), &*self.clock)?;
        self.inspections.update(&record).await?;
        self.append_audit(
            AuditEntry::new(
                record.id().clone(),
                AuditAction::Rejected,
                actor.id,
                &*self.clock,
            )
            .with_transition(from, DocumentStatus::Rejected)
            .with_detail(reason),
        )
        .await?;

        Ok(record)
    }

    /// Generates a report from the current document.
    ///
    /// Admin or owner. The document is normalised into the canonical
    /// report model and handed to the rendering collaborator; the record
    /// moves to `ReportGenerated` and keeps the artefact locator.
    /// Regeneration is permitted.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::PreconditionFailed`] before submission
    /// and renderer errors as raised.
    pub async fn generate_report(
        &self,
        actor: Actor,
        id: &InspectionId,
    ) -> LifecycleResult<RenderedArtifact> {
        let mut record = self.require_record(id).await?;
        if !actor.is_admin() {
            ensure_owner(actor, &record)?;
        }
        if !record.status().allows_report() {
            return Err(LifecycleError::PreconditionFailed {
                current: record.status(),
            });
        }

        let task = self.require_task(record.task_id()).await?;
        let inspector_name = self
            .directory
            .find_inspector(record.performed_by())
            .await?
            .map(|identity| identity.name);
        let verifier_name = match record.approved_by() {
            Some(approver) => self
                .directory
                .find_inspector(approver)
                .await?
                .map(|identity| identity.name),
            None => None,
        };

        let snapshot = self.reference.snapshot().await?;
        let derived = &record.document().derived;
        let context = ReportContext {
            inspection_number: record.id().to_string(),
            client_name: Some(task.client_name().to_owned()),
            property_address: Some(task.property_address().to_owned()),
            inspector_name,
            verifier_name,
            inspection_date: record
                .document()
                .audit
                .submitted_at
                .unwrap_or_else(|| record.updated_at()),
            storage_base: self.storage_base.clone(),
            overall_score: derived.overall_score,
            quality_grade: snapshot.scoring_rules.quality_grade(derived.overall_score),
        };

        let body = serde_json::to_value(record.document())
            .map_err(|err| DocumentError::Malformed(err.to_string()))?;
        let report = ReportNormalizer::normalize(&body, &context);
        let artifact = self.renderer.render(&report).await?;

        let from = record.status();
        record.record_report(artifact.locator.clone(), &*self.clock)?;
        self.inspections.update(&record).await?;
        self.append_audit(
            AuditEntry::new(
                record.id().clone(),
                AuditAction::ReportGenerated,
                actor.id,
                &*self.clock,
            )
            .with_transition(from, DocumentStatus::ReportGenerated)
            .with_detail(artifact.locator.clone()),
        )
        .await?;

        Ok(artifact)
    }

    /// Deletes an inspection and its owning task.
    ///
    /// Admin only. The audit ledger retains the deletion entry and all
    /// prior history.
    pub async fn delete(&self, actor: Actor, id: &InspectionId) -> LifecycleResult<()> {
        ensure_admin(actor)?;
        let record = self.require_record(id).await?;

        self.append_audit(AuditEntry::new(
            record.id().clone(),
            AuditAction::Deleted,
            actor.id,
            &*self.clock,
        ))
        .await?;
        self.inspections.delete(id).await?;
        self.tasks.delete(record.task_id()).await?;
        Ok(())
    }

    /// Retrieves an inspection record.
    ///
    /// Admin or owner.
    pub async fn inspection(
        &self,
        actor: Actor,
        id: &InspectionId,
    ) -> LifecycleResult<InspectionRecord> {
        let record = self.require_record(id).await?;
        if !actor.is_admin() {
            ensure_owner(actor, &record)?;
        }
        Ok(record)
    }

    /// Returns the audit ledger for an inspection in append order.
    ///
    /// The ledger survives deletion of the record it describes.
    pub async fn audit_trail(&self, id: &InspectionId) -> LifecycleResult<Vec<AuditEntry>> {
        Ok(self.inspections.audit_entries(id).await?)
    }

    async fn require_record(&self, id: &InspectionId) -> LifecycleResult<InspectionRecord> {
        self.inspections
            .find_by_id(id)
            .await?
            .ok_or_else(|| LifecycleError::InspectionNotFound(id.clone()))
    }

    async fn require_task(&self, id: TaskId) -> LifecycleResult<InspectionTask> {
        self.tasks
            .find_by_id(id)
            .await?
            .ok_or(LifecycleError::TaskNotFound(id))
    }

    async fn start_task(&self, id: TaskId) -> LifecycleResult<()> {
        self.set_task_status(id, TaskStatus::InProgress).await
    }

    async fn complete_task(&self, id: TaskId) -> LifecycleResult<()> {
        self.set_task_status(id, TaskStatus::Completed).await
    }

    async fn set_task_status(&self, id: TaskId, status: TaskStatus) -> LifecycleResult<()> {
        let mut task = self.require_task(id).await?;
        if task.status() != status {
            task.set_status(status, &*self.clock);
            self.tasks.update(&task).await?;
        }
        Ok(())
    }

    async fn append_audit(&self, entry: AuditEntry) -> LifecycleResult<()> {
        Ok(self.inspections.append_audit_entry(&entry).await?)
    }
}

const fn ensure_admin(actor: Actor) -> LifecycleResult<()> {
    if actor.is_admin() {
        Ok(())
    } else {
        Err(LifecycleError::AuthorizationDenied {
            required: Role::Admin,
        })
    }
}

fn ensure_owner(actor: Actor, record: &InspectionRecord) -> LifecycleResult<()> {
    if actor.id == record.performed_by() {
        Ok(())
    } else {
        Err(LifecycleError::NotOwner(record.id().clone()))
    }
}
