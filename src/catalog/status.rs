//! Status vocabulary for inspection findings.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Finding status recorded against a checklist item.
///
/// Variants are ordered from best to worst. The ordering is used only for
/// severity bucketing, never for numeric comparison; scoring weight comes
/// from the active [`ScoringRules`](super::ScoringRules).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    /// No defect found.
    Pass,
    /// Purely cosmetic defect.
    Cosmetic,
    /// Minor functional defect.
    Minor,
    /// Major functional defect.
    Major,
    /// Critical defect requiring immediate attention.
    Critical,
}

impl ItemStatus {
    /// The full status vocabulary, ordered best to worst.
    pub const ALL: [Self; 5] = [
        Self::Pass,
        Self::Cosmetic,
        Self::Minor,
        Self::Major,
        Self::Critical,
    ];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Cosmetic => "COSMETIC",
            Self::Minor => "MINOR",
            Self::Major => "MAJOR",
            Self::Critical => "CRITICAL",
        }
    }

    /// Maps a non-passing status to its severity bucket.
    ///
    /// Returns `None` for [`ItemStatus::Pass`], which contributes no finding.
    #[must_use]
    pub const fn severity(self) -> Option<IssueSeverity> {
        match self {
            Self::Pass => None,
            Self::Cosmetic => Some(IssueSeverity::Cosmetic),
            Self::Minor => Some(IssueSeverity::Minor),
            Self::Major => Some(IssueSeverity::Major),
            Self::Critical => Some(IssueSeverity::Critical),
        }
    }
}

impl TryFrom<&str> for ItemStatus {
    type Error = ParseItemStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "PASS" => Ok(Self::Pass),
            "COSMETIC" => Ok(Self::Cosmetic),
            "MINOR" => Ok(Self::Minor),
            "MAJOR" => Ok(Self::Major),
            "CRITICAL" => Ok(Self::Critical),
            _ => Err(ParseItemStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity classification attached to predefined catalog issues.
///
/// Identical to the non-passing subset of [`ItemStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueSeverity {
    /// Purely cosmetic issue.
    Cosmetic,
    /// Minor functional issue.
    Minor,
    /// Major functional issue.
    Major,
    /// Critical issue.
    Critical,
}

impl IssueSeverity {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cosmetic => "COSMETIC",
            Self::Minor => "MINOR",
            Self::Major => "MAJOR",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned while parsing finding statuses from wire data.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown item status: {0}")]
pub struct ParseItemStatusError(pub String);
