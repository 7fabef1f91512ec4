//! Injectable scoring-rules configuration for the metrics calculator.
//!
//! The rules are always passed into the calculator at call time, never read
//! from module-level state, so tests can substitute deterministic rule sets.

use super::ItemStatus;
use serde::{Deserialize, Serialize};

/// Per-status weights for the weighted-average scoring model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusWeights {
    /// Weight applied to `PASS` findings.
    pub pass: u32,
    /// Weight applied to `COSMETIC` findings.
    pub cosmetic: u32,
    /// Weight applied to `MINOR` findings.
    pub minor: u32,
    /// Weight applied to `MAJOR` findings.
    pub major: u32,
    /// Weight applied to `CRITICAL` findings.
    pub critical: u32,
}

impl StatusWeights {
    /// Returns the configured weight for a status.
    #[must_use]
    pub const fn weight(&self, status: ItemStatus) -> u32 {
        match status {
            ItemStatus::Pass => self.pass,
            ItemStatus::Cosmetic => self.cosmetic,
            ItemStatus::Minor => self.minor,
            ItemStatus::Major => self.major,
            ItemStatus::Critical => self.critical,
        }
    }
}

impl Default for StatusWeights {
    fn default() -> Self {
        Self {
            pass: 100,
            cosmetic: 90,
            minor: 70,
            major: 40,
            critical: 0,
        }
    }
}

/// Per-status flat deductions for the deduction scoring model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionTable {
    /// Points deducted per `CRITICAL` finding.
    pub critical: u32,
    /// Points deducted per `MAJOR` finding.
    pub major: u32,
    /// Points deducted per `MINOR` finding.
    pub minor: u32,
    /// Points deducted per `COSMETIC` finding.
    pub cosmetic: u32,
    /// Points deducted per `PASS` finding, normally zero.
    pub pass: u32,
}

impl DeductionTable {
    /// Returns the configured deduction for a status.
    #[must_use]
    pub const fn deduction(&self, status: ItemStatus) -> u32 {
        match status {
            ItemStatus::Critical => self.critical,
            ItemStatus::Major => self.major,
            ItemStatus::Minor => self.minor,
            ItemStatus::Cosmetic => self.cosmetic,
            ItemStatus::Pass => self.pass,
        }
    }
}

impl Default for DeductionTable {
    fn default() -> Self {
        Self {
            critical: 10,
            major: 5,
            minor: 2,
            cosmetic: 1,
            pass: 0,
        }
    }
}

/// Score thresholds mapping an overall score to a quality grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportThresholds {
    /// Minimum overall score graded `excellent`.
    pub excellent_min: u32,
    /// Minimum overall score graded `good`.
    pub good_min: u32,
    /// Minimum overall score graded `acceptable`.
    pub acceptable_min: u32,
}

impl Default for ReportThresholds {
    fn default() -> Self {
        Self {
            excellent_min: 90,
            good_min: 75,
            acceptable_min: 60,
        }
    }
}

/// Quality grade derived from an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityGrade {
    /// Score at or above the excellent threshold.
    Excellent,
    /// Score at or above the good threshold.
    Good,
    /// Score at or above the acceptable threshold.
    Acceptable,
    /// Score below every threshold, or no score at all.
    Poor,
}

impl QualityGrade {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Acceptable => "acceptable",
            Self::Poor => "poor",
        }
    }
}

/// Scoring-rules configuration selecting one of the two supported models.
///
/// Supplying a flat deduction table selects the deduction model; everything
/// else runs the weighted-average model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum ScoringRules {
    /// Model A: room score is the rounded mean of status weights over
    /// included items; zero-scoring rooms are excluded from the overall
    /// average.
    WeightedAverage {
        /// Per-status weights.
        weights: StatusWeights,
        /// Statuses excluded from both scoring and severity tallies.
        /// Items with no status at all are always excluded.
        excluded: Vec<ItemStatus>,
        /// Grade thresholds for the rendered report.
        thresholds: ReportThresholds,
    },
    /// Model B: rooms start at 100 and lose a flat deduction per finding,
    /// clamped at zero; every room counts towards the overall average.
    FlatDeduction {
        /// Per-status deductions.
        deductions: DeductionTable,
        /// Grade thresholds for the rendered report.
        thresholds: ReportThresholds,
    },
}

impl ScoringRules {
    /// Weighted-average rules with the default weight table.
    #[must_use]
    pub fn weighted_default() -> Self {
        Self::WeightedAverage {
            weights: StatusWeights::default(),
            excluded: Vec::new(),
            thresholds: ReportThresholds::default(),
        }
    }

    /// Flat-deduction rules with the default deduction table.
    #[must_use]
    pub fn flat_default() -> Self {
        Self::FlatDeduction {
            deductions: DeductionTable::default(),
            thresholds: ReportThresholds::default(),
        }
    }

    /// Flat-deduction rules with a caller-supplied deduction table.
    #[must_use]
    pub fn flat(deductions: DeductionTable) -> Self {
        Self::FlatDeduction {
            deductions,
            thresholds: ReportThresholds::default(),
        }
    }

    /// Returns the grade thresholds of the active model.
    #[must_use]
    pub const fn thresholds(&self) -> &ReportThresholds {
        match self {
            Self::WeightedAverage { thresholds, .. } | Self::FlatDeduction { thresholds, .. } => {
                thresholds
            }
        }
    }

    /// Grades an overall score against the configured thresholds.
    ///
    /// An absent score grades as poor, matching the report renderer's
    /// expectations for documents with no scoreable content.
    #[must_use]
    pub const fn quality_grade(&self, score: Option<u32>) -> QualityGrade {
        let thresholds = self.thresholds();
        match score {
            Some(value) if value >= thresholds.excellent_min => QualityGrade::Excellent,
            Some(value) if value >= thresholds.good_min => QualityGrade::Good,
            Some(value) if value >= thresholds.acceptable_min => QualityGrade::Acceptable,
            _ => QualityGrade::Poor,
        }
    }
}
