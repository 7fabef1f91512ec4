//! Derived-metrics calculator.
//!
//! Computes per-room scores, severity tallies, and the overall score from
//! item statuses. The scoring-rules configuration is injected at
//! construction; there is no module-level default state.

use crate::catalog::{DeductionTable, QualityGrade, ScoringRules, StatusWeights};
use crate::catalog::ItemStatus;
use crate::inspection::domain::{DerivedMetrics, DocumentStatus, InspectionDocument, Room};
use mockable::Clock;

/// Starting score per room under the flat-deduction model.
const ROOM_BASELINE: u32 = 100;

/// Computes the `derived` block of a document from its item statuses.
///
/// Both models are idempotent: recomputing from unchanged statuses always
/// yields an identical block. The calculator never fails; missing or zero
/// data yields neutral defaults.
#[derive(Debug, Clone)]
pub struct ScoreCalculator {
    rules: ScoringRules,
}

impl ScoreCalculator {
    /// Creates a calculator with the given rules.
    #[must_use]
    pub const fn new(rules: ScoringRules) -> Self {
        Self { rules }
    }

    /// Returns the active rules.
    #[must_use]
    pub const fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Computes derived metrics without touching the document.
    ///
    /// Useful for scoring previews outside a submission transition.
    #[must_use]
    pub fn compute(&self, document: &InspectionDocument) -> DerivedMetrics {
        match &self.rules {
            ScoringRules::WeightedAverage {
                weights, excluded, ..
            } => weighted_average(document, weights, excluded),
            ScoringRules::FlatDeduction { deductions, .. } => flat_deduction(document, deductions),
        }
    }

    /// Recomputes and overwrites the document's `derived` block.
    ///
    /// When `stamp` is set the audit projection is updated alongside:
    /// status mirrored, `submitted_at` and `last_modified_at` stamped.
    /// This coupling is a submission convenience, not a hard dependency.
    pub fn apply(
        &self,
        document: &mut InspectionDocument,
        clock: &impl Clock,
        stamp: Option<DocumentStatus>,
    ) -> DerivedMetrics {
        let derived = self.compute(document);
        document.derived = derived.clone();
        let now = clock.utc();
        document.audit.last_modified_at = now;
        if let Some(status) = stamp {
            document.audit.status = status;
            document.audit.submitted_at = Some(now);
        }
        derived
    }

    /// Grades the document's overall score against the rules' thresholds.
    #[must_use]
    pub const fn quality_grade(&self, document: &InspectionDocument) -> QualityGrade {
        self.rules.quality_grade(document.derived.overall_score)
    }
}

/// Model A: room score is the rounded mean of status weights over included
/// items; only positive room scores feed the overall average.
fn weighted_average(
    document: &InspectionDocument,
    weights: &StatusWeights,
    excluded: &[ItemStatus],
) -> DerivedMetrics {
    let mut derived = DerivedMetrics::default();

    for room in &document.rooms {
        if !room.scored {
            continue;
        }

        let mut total = 0u32;
        let mut count = 0u32;
        for item in &room.items {
            let Some(status) = item.status else {
                continue;
            };
            if excluded.contains(&status) {
                continue;
            }
            total += weights.weight(status);
            count += 1;
            if let Some(severity) = status.severity() {
                derived.severity_counts.increment(severity);
                derived.total_issues += 1;
            }
        }

        // A room with zero eligible items contributes a zero score and is
        // excluded from the overall average below.
        let score = if count > 0 { rounded_mean(total, count) } else { 0 };
        derived.room_scores.insert(room.room_id.clone(), score);
        derived.total_rooms_inspected += 1;
    }

    let positives: Vec<u32> = derived
        .room_scores
        .values()
        .copied()
        .filter(|score| *score > 0)
        .collect();
    derived.overall_score = mean_of(&positives);

    derived
}

/// Model B: rooms start at 100 and lose a flat deduction per finding,
/// clamped at zero; every room in this pass counts towards the overall
/// average, which defaults to 100 when there are no rooms.
fn flat_deduction(document: &InspectionDocument, deductions: &DeductionTable) -> DerivedMetrics {
    let mut derived = DerivedMetrics::default();

    for room in &document.rooms {
        let score = score_room_flat(room, deductions, &mut derived);
        derived.room_scores.insert(room.room_id.clone(), score);
        derived.total_rooms_inspected += 1;
    }

    let scores: Vec<u32> = derived.room_scores.values().copied().collect();
    derived.overall_score = Some(mean_of(&scores).unwrap_or(ROOM_BASELINE));

    derived
}

fn score_room_flat(
    room: &Room,
    deductions: &DeductionTable,
    derived: &mut DerivedMetrics,
) -> u32 {
    let mut deduction = 0u32;
    for item in &room.items {
        let Some(status) = item.status else {
            continue;
        };
        deduction += deductions.deduction(status);
        if let Some(severity) = status.severity() {
            derived.severity_counts.increment(severity);
            derived.total_issues += 1;
        }
    }
    ROOM_BASELINE.saturating_sub(deduction)
}

/// Rounded mean over a slice of scores; `None` when the slice is empty.
fn mean_of(scores: &[u32]) -> Option<u32> {
    let count = u32::try_from(scores.len()).ok()?;
    if count == 0 {
        return None;
    }
    let total: u32 = scores.iter().sum();
    Some(rounded_mean(total, count))
}

/// Round-half-up integer mean.
#[expect(
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "rounding is performed explicitly via the half-adjust term"
)]
fn rounded_mean(total: u32, count: u32) -> u32 {
    if count == 0 {
        return 0;
    }
    (total + count / 2) / count
}
