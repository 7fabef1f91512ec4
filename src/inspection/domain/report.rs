//! Canonical report model consumed by the rendering collaborator.

use crate::catalog::QualityGrade;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Normalised finding severity used by the rendered report.
///
/// Coarser than the item status vocabulary: critical findings are reported
/// alongside major ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportSeverity {
    /// Major or critical finding.
    Major,
    /// Minor finding.
    Minor,
    /// Everything else.
    Cosmetic,
}

impl ReportSeverity {
    /// Collapses a raw status/issue-type string into a report severity.
    ///
    /// `MAJOR` and `CRITICAL` normalise to [`ReportSeverity::Major`],
    /// `MINOR` stays minor, anything else becomes cosmetic.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "MAJOR" | "CRITICAL" => Self::Major,
            "MINOR" => Self::Minor,
            _ => Self::Cosmetic,
        }
    }

    /// Returns the display representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Major => "Major",
            Self::Minor => "Minor",
            Self::Cosmetic => "Cosmetic",
        }
    }
}

/// One measured dimension entry of a room.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimension {
    /// Length component.
    #[serde(default)]
    pub length: f64,
    /// Width component.
    #[serde(default)]
    pub width: f64,
}

/// Room entry in the canonical report.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportRoom {
    /// Display name.
    pub name: String,
    /// Measured dimensions; empty when the room was not measured.
    #[serde(default)]
    pub dimensions: Vec<Dimension>,
    /// Material annotations keyed by surface.
    #[serde(default)]
    pub materials: BTreeMap<String, String>,
    /// Brand annotations keyed by fixture.
    #[serde(default)]
    pub brands: BTreeMap<String, String>,
}

/// One reported finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFinding {
    /// Room display name the finding belongs to.
    pub room: String,
    /// Category grouping.
    pub category: String,
    /// Normalised severity.
    pub severity: ReportSeverity,
    /// Finding description.
    pub description: String,
    /// Absolute photo locators and inline blobs.
    pub photos: Vec<String>,
    /// Finding date in RFC 3339 form.
    pub date: String,
}

/// Aggregate severity counts in the report's coarse buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReportSeverityCounts {
    /// Major (including critical) findings.
    pub major: u32,
    /// Minor findings.
    pub minor: u32,
    /// Cosmetic findings.
    pub cosmetic: u32,
}

impl ReportSeverityCounts {
    /// Increments the bucket for the given severity.
    pub const fn increment(&mut self, severity: ReportSeverity) {
        match severity {
            ReportSeverity::Major => self.major += 1,
            ReportSeverity::Minor => self.minor += 1,
            ReportSeverity::Cosmetic => self.cosmetic += 1,
        }
    }
}

/// Canonical report model handed to the rendering collaborator.
///
/// The engine never inspects the rendered artifact; this model is the whole
/// contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalReport {
    /// Report identifier: the inspection number zero-padded to 8 characters.
    pub report_id: String,
    /// Performing inspector's display name.
    pub inspector_name: String,
    /// Verifying admin's display name.
    pub verifier_name: String,
    /// Inspection date in RFC 3339 form.
    pub inspection_date: String,
    /// Client display name.
    pub client_name: String,
    /// Property street address.
    pub property_address: String,
    /// Flat list of rooms.
    pub rooms: Vec<ReportRoom>,
    /// Flat list of findings.
    pub findings: Vec<ReportFinding>,
    /// Aggregate severity counts.
    pub severity_counts: ReportSeverityCounts,
    /// Total scored area: Σ length × width over room dimension entries.
    pub total_area: f64,
    /// Overall score carried over from the derived metrics.
    pub overall_score: Option<u32>,
    /// Quality grade of the overall score against the active thresholds.
    pub quality_grade: QualityGrade,
}
