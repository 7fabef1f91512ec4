//! Append-only audit ledger entries.

use super::ActorId;
use crate::inspection::domain::{DocumentStatus, InspectionId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for an audit ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuditEntryId(Uuid);

impl AuditEntryId {
    /// Creates a new random entry identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for AuditEntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AuditEntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle action recorded in the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    /// Task and document created.
    Created,
    /// Document body replaced by the inspector.
    Modified,
    /// Document submitted for review.
    Submitted,
    /// Document marked final by the inspector.
    MarkedFinal,
    /// Document approved by an admin.
    Approved,
    /// Document rejected by an admin.
    Rejected,
    /// Report generated from the document.
    ReportGenerated,
    /// Document and owning task deleted.
    Deleted,
}

impl AuditAction {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::Modified => "MODIFIED",
            Self::Submitted => "SUBMITTED",
            Self::MarkedFinal => "MARKED_FINAL",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::ReportGenerated => "REPORT_GENERATED",
            Self::Deleted => "DELETED",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One immutable entry in the append-only audit ledger.
///
/// External collaborators may read the ledger; the engine never rewrites
/// it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Entry identifier.
    pub id: AuditEntryId,
    /// Inspection the entry belongs to.
    pub inspection_id: InspectionId,
    /// Recorded action.
    pub action: AuditAction,
    /// Acting user.
    pub actor: ActorId,
    /// Status before the transition, where applicable.
    pub status_before: Option<DocumentStatus>,
    /// Status after the transition, where applicable.
    pub status_after: Option<DocumentStatus>,
    /// Free-text detail, e.g. a rejection reason or submission score.
    pub detail: Option<String>,
    /// Instant the entry was recorded.
    pub recorded_at: DateTime<Utc>,
}

impl AuditEntry {
    /// Creates a ledger entry for an action on an inspection.
    #[must_use]
    pub fn new(
        inspection_id: InspectionId,
        action: AuditAction,
        actor: ActorId,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: AuditEntryId::new(),
            inspection_id,
            action,
            actor,
            status_before: None,
            status_after: None,
            detail: None,
            recorded_at: clock.utc(),
        }
    }

    /// Records the before/after status pair of a transition.
    #[must_use]
    pub const fn with_transition(mut self, from: DocumentStatus, to: DocumentStatus) -> Self {
        self.status_before = Some(from);
        self.status_after = Some(to);
        self
    }

    /// Attaches free-text detail.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}
