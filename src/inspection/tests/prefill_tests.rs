//! Unit tests for the prefill generator.

use super::fixtures::{small_catalog, small_taxonomy};
use crate::catalog::{CatalogEntry, IssueCatalog, IssueSeverity, RoomTaxonomy};
use crate::inspection::domain::{
    DocumentStatus, MetadataOverrides, TechnicianRef, SCHEMA_VERSION,
};
use crate::inspection::services::{PrefillGenerator, PrefillRequest};
use chrono::NaiveDate;
use mockable::DefaultClock;
use rstest::rstest;

fn request() -> PrefillRequest {
    PrefillRequest::new(TechnicianRef::Name("Priya Sharma".to_owned()))
}

#[rstest]
fn emits_only_scored_room_types() {
    let document = PrefillGenerator::generate(
        &small_taxonomy(),
        &small_catalog(),
        request(),
        &DefaultClock,
    );

    let room_ids: Vec<&str> = document
        .rooms
        .iter()
        .map(|room| room.room_id.as_str())
        .collect();
    assert_eq!(room_ids, vec!["room_a", "room_b"]);
    assert!(document.rooms.iter().all(|room| room.scored));
}

#[rstest]
fn empty_catalog_yields_rooms_with_zero_items() {
    let document = PrefillGenerator::generate(
        &small_taxonomy(),
        &IssueCatalog::empty(),
        request(),
        &DefaultClock,
    );

    assert_eq!(document.rooms.len(), 2);
    assert!(document.rooms.iter().all(|room| room.items.is_empty()));
    assert_eq!(document.derived.overall_score, None);
}

#[rstest]
fn catalog_entries_become_items_with_deterministic_slugs() {
    let document = PrefillGenerator::generate(
        &small_taxonomy(),
        &small_catalog(),
        request(),
        &DefaultClock,
    );

    let room_a = document.rooms.first().expect("room_a");
    let slugs: Vec<&str> = room_a
        .items
        .iter()
        .map(|item| item.item_id.as_str())
        .collect();
    assert_eq!(slugs, vec!["room_a_general_0", "room_a_general_1"]);

    let first = room_a.items.first().expect("first item");
    assert_eq!(first.label, "Item A1");
    assert_eq!(first.category, "General");
    assert_eq!(first.status, None);
    assert!(first.photos.is_empty());
}

#[rstest]
fn category_slugs_lowercase_and_collapse_whitespace() {
    let catalog = IssueCatalog::new([CatalogEntry::new(
        "Room A",
        "Electrical  Work",
        "Loose socket",
        IssueSeverity::Major,
    )]);
    let document =
        PrefillGenerator::generate(&small_taxonomy(), &catalog, request(), &DefaultClock);

    let room_a = document.rooms.first().expect("room_a");
    let item = room_a.items.first().expect("item");
    assert_eq!(item.item_id.as_str(), "room_a_electrical_work_0");
}

#[rstest]
fn placeholder_catalog_entries_are_dropped() {
    let catalog = IssueCatalog::new([
        CatalogEntry::new("Room A", "General", "#N/A", IssueSeverity::Minor),
        CatalogEntry::new("Room A", "General", "Real issue", IssueSeverity::Minor),
    ]);
    let document =
        PrefillGenerator::generate(&small_taxonomy(), &catalog, request(), &DefaultClock);

    let room_a = document.rooms.first().expect("room_a");
    assert_eq!(room_a.items.len(), 1);
    let item = room_a.items.first().expect("item");
    assert_eq!(item.label, "Real issue");
}

#[rstest]
fn metadata_overrides_are_merged() {
    let overrides = MetadataOverrides {
        property_id: Some("PROP-42".to_owned()),
        property_type: Some("Villa".to_owned()),
        client_name: Some("Asha Verma".to_owned()),
        inspection_date: NaiveDate::from_ymd_opt(2026, 2, 1),
        notes: Some("Second visit".to_owned()),
        ..MetadataOverrides::default()
    };
    let document = PrefillGenerator::generate(
        &small_taxonomy(),
        &IssueCatalog::empty(),
        request().with_overrides(overrides),
        &DefaultClock,
    );

    let metadata = &document.metadata;
    assert_eq!(metadata.property_id, "PROP-42");
    assert_eq!(metadata.property_type, "Villa");
    assert_eq!(metadata.client_name.as_deref(), Some("Asha Verma"));
    assert_eq!(
        metadata.inspection_date,
        NaiveDate::from_ymd_opt(2026, 2, 1).expect("valid date")
    );
    assert_eq!(metadata.notes, "Second visit");
}

#[rstest]
fn defaults_apply_without_overrides() {
    let document = PrefillGenerator::generate(
        &small_taxonomy(),
        &IssueCatalog::empty(),
        request(),
        &DefaultClock,
    );

    assert_eq!(document.metadata.property_type, "Apartment");
    assert_eq!(
        document.metadata.inspection_date,
        document.audit.created_at.date_naive()
    );
    assert_eq!(document.metadata.technician.name, "Priya Sharma");
    assert_eq!(document.metadata.technician.id, "Priya Sharma");
}

#[rstest]
fn new_documents_start_as_drafts() {
    let document = PrefillGenerator::generate(
        &small_taxonomy(),
        &IssueCatalog::empty(),
        request(),
        &DefaultClock,
    );

    assert_eq!(document.schema_version, SCHEMA_VERSION);
    assert!(document.inspection_id.as_str().starts_with("INS-"));
    assert_eq!(document.audit.status, DocumentStatus::Draft);
    assert_eq!(document.audit.submitted_at, None);
    assert_eq!(document.audit.created_at, document.audit.last_modified_at);
}

#[rstest]
fn taxonomy_item_definitions_do_not_leak_into_prefill() {
    // Checklist defaults are reference data for external maintenance
    // tooling; prefill items come from the issue catalog alone.
    let taxonomy = RoomTaxonomy::builtin();
    let document =
        PrefillGenerator::generate(&taxonomy, &IssueCatalog::empty(), request(), &DefaultClock);
    assert!(document.rooms.iter().all(|room| room.items.is_empty()));
}
