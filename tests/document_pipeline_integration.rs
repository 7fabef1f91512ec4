//! Integration tests for the document pipeline: prefill, validation,
//! scoring, and report normalisation composed through the public API
//! without the workflow service.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
#![expect(
    clippy::cognitive_complexity,
    reason = "Test functions may have higher complexity for full scenario coverage"
)]

use chrono::{TimeZone, Utc};
use mockable::DefaultClock;
use snagcheck::catalog::{
    CatalogEntry, IssueCatalog, IssueSeverity, ItemStatus, QualityGrade, RoomTaxonomy,
    ScoringRules,
};
use snagcheck::inspection::domain::{
    DocumentStatus, InspectionDocument, MetadataOverrides, PhotoRef, ReportSeverity, TechnicianRef,
};
use snagcheck::inspection::services::{
    DocumentValidator, PrefillGenerator, PrefillRequest, ReportContext, ReportNormalizer,
    ScoreCalculator,
};

fn catalog() -> IssueCatalog {
    IssueCatalog::new([
        CatalogEntry::new("Living Room", "Flooring", "Hollow tiles", IssueSeverity::Major),
        CatalogEntry::new("Living Room", "Flooring", "Chipped skirting", IssueSeverity::Cosmetic),
        CatalogEntry::new("Kitchen", "Plumbing", "Leaking trap", IssueSeverity::Critical),
    ])
}

fn prefilled() -> InspectionDocument {
    let overrides = MetadataOverrides {
        property_id: Some("PROP-42".to_owned()),
        property_address: Some("12 Lake Road".to_owned()),
        client_name: Some("Asha Verma".to_owned()),
        client_phone: Some("+91 98000 00000".to_owned()),
        ..MetadataOverrides::default()
    };
    PrefillGenerator::generate(
        &RoomTaxonomy::builtin(),
        &catalog(),
        PrefillRequest::new(TechnicianRef::Name("Priya Sharma".to_owned()))
            .with_overrides(overrides),
        &DefaultClock,
    )
}

fn context(score: Option<u32>, grade: QualityGrade) -> ReportContext {
    ReportContext {
        inspection_number: "7".to_owned(),
        client_name: Some("Asha Verma".to_owned()),
        property_address: Some("12 Lake Road".to_owned()),
        inspector_name: Some("Priya Sharma".to_owned()),
        verifier_name: None,
        inspection_date: Utc
            .with_ymd_and_hms(2026, 1, 5, 10, 0, 0)
            .single()
            .expect("valid instant"),
        storage_base: "https://cdn.example.com".to_owned(),
        overall_score: score,
        quality_grade: grade,
    }
}

/// Prefill output passes validation once every seeded status is set, and
/// a serde round trip through an untyped body preserves the document.
#[test]
fn prefill_survives_a_round_trip_and_validates() {
    let mut document = prefilled();

    // Unfilled statuses are the only gap in a fresh prefill.
    let report = DocumentValidator::validate(&document, None);
    assert_eq!(report.errors().len(), 3);

    for room in &mut document.rooms {
        for item in &mut room.items {
            item.status = Some(ItemStatus::Pass);
        }
    }

    let body = serde_json::to_value(&document).expect("should serialise");
    let report = DocumentValidator::validate_body(&body, Some(&document))
        .expect("body should be well-formed");
    assert!(report.valid());
    assert_eq!(
        InspectionDocument::parse(&body).expect("should parse"),
        document
    );
}

/// Scoring and normalisation agree end to end: the calculator's tallies
/// and overall score flow through the normaliser into the canonical
/// report, with photos rewritten against the storage base.
#[test]
fn scored_documents_normalise_into_reports() {
    let mut document = prefilled();
    for room in &mut document.rooms {
        for item in &mut room.items {
            item.status = Some(ItemStatus::Pass);
        }
    }

    // Flag the hollow tiles with an evidence photo.
    let living_room = document
        .rooms
        .iter_mut()
        .find(|room| room.room_id.as_str() == "living_room")
        .expect("living room");
    let finding = living_room
        .items
        .iter_mut()
        .find(|item| item.label == "Hollow tiles")
        .expect("seeded item");
    finding.status = Some(ItemStatus::Major);
    finding.photos.push(PhotoRef::from("/uploads/tile.jpg".to_owned()));

    let calculator = ScoreCalculator::new(ScoringRules::weighted_default());
    let derived = calculator.apply(&mut document, &DefaultClock, Some(DocumentStatus::Submitted));
    assert_eq!(derived.severity_counts.major, 1);
    assert_eq!(derived.total_issues, 1);
    let overall = derived.overall_score.expect("scoreable rooms exist");

    let body = serde_json::to_value(&document).expect("should serialise");
    let report = ReportNormalizer::normalize(
        &body,
        &context(Some(overall), calculator.quality_grade(&document)),
    );

    assert_eq!(report.report_id, "00000007");
    assert_eq!(report.overall_score, Some(overall));
    assert_eq!(report.severity_counts.major, 1);
    assert_eq!(report.findings.len(), 1);
    let finding = report.findings.first().expect("one finding");
    assert_eq!(finding.severity, ReportSeverity::Major);
    assert_eq!(finding.room, "Living Room");
    assert_eq!(
        finding.photos,
        vec!["https://cdn.example.com/uploads/tile.jpg".to_owned()]
    );
    // The fallback verifier label applies when nobody approved yet.
    assert_eq!(report.verifier_name, "Admin");
}

/// The two scoring models disagree on aggregation but share tallies.
#[test]
fn both_scoring_models_tally_identically() {
    let mut document = prefilled();
    for room in &mut document.rooms {
        for item in &mut room.items {
            item.status = Some(ItemStatus::Pass);
        }
    }
    let kitchen = document
        .rooms
        .iter_mut()
        .find(|room| room.room_id.as_str() == "kitchen")
        .expect("kitchen");
    for item in &mut kitchen.items {
        item.status = Some(ItemStatus::Critical);
    }

    let weighted = ScoreCalculator::new(ScoringRules::weighted_default()).compute(&document);
    let flat = ScoreCalculator::new(ScoringRules::flat_default()).compute(&document);

    assert_eq!(weighted.severity_counts, flat.severity_counts);
    assert_eq!(weighted.total_issues, flat.total_issues);
    // Weighted scoring zeroes the kitchen and drops it from the average;
    // flat scoring keeps it and drags the overall down.
    assert_eq!(weighted.overall_score, Some(100));
    assert!(flat.overall_score < Some(100));
}
