//! Lifecycle status carried on an inspection document.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Inspection document lifecycle status.
///
/// The state machine in the workflow module is the single owner of this
/// value; the document body's audit block mirrors it as a projection and is
/// never independently settable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentStatus {
    /// Freshly prefilled, untouched by the inspector.
    Draft,
    /// The inspector has started editing.
    InProgress,
    /// Submitted for review; still editable by the owning inspector.
    Submitted,
    /// Marked final by the inspector; awaiting admin action.
    Final,
    /// A report has been generated from the document.
    ReportGenerated,
    /// Approved by an admin; frozen permanently.
    Completed,
    /// Rejected by an admin; returns to the inspector for rework.
    Rejected,
}

impl DocumentStatus {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::InProgress => "IN_PROGRESS",
            Self::Submitted => "SUBMITTED",
            Self::Final => "FINAL",
            Self::ReportGenerated => "REPORT_GENERATED",
            Self::Completed => "COMPLETED",
            Self::Rejected => "REJECTED",
        }
    }

    /// Returns `true` when the owning inspector may replace the document
    /// body in this status.
    ///
    /// Submitted documents remain editable (re-submission is allowed);
    /// rejected documents return to the inspector for rework.
    #[must_use]
    pub const fn is_editable(self) -> bool {
        matches!(
            self,
            Self::Draft | Self::InProgress | Self::Submitted | Self::Rejected
        )
    }

    /// Returns `true` when a report may be generated in this status.
    #[must_use]
    pub const fn allows_report(self) -> bool {
        matches!(
            self,
            Self::Submitted | Self::Final | Self::ReportGenerated | Self::Completed
        )
    }

    /// Returns `true` when the state machine permits moving to `to`.
    #[must_use]
    pub const fn can_transition_to(self, to: Self) -> bool {
        match to {
            // Rejection is allowed from any status.
            Self::Rejected => true,
            Self::InProgress => matches!(self, Self::Draft | Self::Rejected),
            // Re-submission of an already submitted document is permitted.
            Self::Submitted => matches!(self, Self::InProgress | Self::Submitted),
            Self::Final | Self::Completed => matches!(self, Self::Submitted),
            Self::ReportGenerated => self.allows_report(),
            Self::Draft => false,
        }
    }
}

impl TryFrom<&str> for DocumentStatus {
    type Error = ParseDocumentStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "DRAFT" => Ok(Self::Draft),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "SUBMITTED" => Ok(Self::Submitted),
            "FINAL" => Ok(Self::Final),
            "REPORT_GENERATED" => Ok(Self::ReportGenerated),
            "COMPLETED" => Ok(Self::Completed),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(ParseDocumentStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned while parsing document statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown document status: {0}")]
pub struct ParseDocumentStatusError(pub String);
