//! Unit tests for the document validator.

use super::fixtures::{fill_all_statuses, sample_document};
use crate::catalog::ItemStatus;
use crate::inspection::domain::{DocumentError, InspectionId};
use crate::inspection::services::DocumentValidator;
use mockable::DefaultClock;
use rstest::rstest;
use serde_json::json;

#[rstest]
fn complete_document_passes() {
    let mut document = sample_document(&DefaultClock);
    fill_all_statuses(&mut document, ItemStatus::Pass);

    let report = DocumentValidator::validate(&document, None);
    assert!(report.valid(), "unexpected errors: {:?}", report.errors());
}

#[rstest]
#[case(None)]
#[case(Some("   "))]
fn missing_client_name_is_reported(#[case] name: Option<&str>) {
    let mut document = sample_document(&DefaultClock);
    fill_all_statuses(&mut document, ItemStatus::Pass);
    document.metadata.client_name = name.map(str::to_owned);

    let report = DocumentValidator::validate(&document, None);
    assert!(report
        .errors()
        .iter()
        .any(|error| error.contains("Client name")));
}

#[rstest]
fn one_contact_channel_is_required() {
    let mut document = sample_document(&DefaultClock);
    fill_all_statuses(&mut document, ItemStatus::Pass);
    document.metadata.client_email = None;
    document.metadata.client_phone = None;

    let report = DocumentValidator::validate(&document, None);
    assert!(report
        .errors()
        .iter()
        .any(|error| error.contains("email or phone")));

    document.metadata.client_phone = Some("9000000000".to_owned());
    let report = DocumentValidator::validate(&document, None);
    assert!(report.valid());
}

#[rstest]
fn empty_rooms_are_reported() {
    let mut document = sample_document(&DefaultClock);
    document.rooms.clear();

    let report = DocumentValidator::validate(&document, None);
    assert!(report
        .errors()
        .iter()
        .any(|error| error.contains("At least one room")));
}

#[rstest]
fn every_item_needs_a_status() {
    let mut document = sample_document(&DefaultClock);
    fill_all_statuses(&mut document, ItemStatus::Pass);
    let room = document.rooms.first_mut().expect("first room");
    let item = room.items.first_mut().expect("first item");
    item.status = None;

    let report = DocumentValidator::validate(&document, None);
    assert_eq!(report.errors().len(), 1);
    let error = report.errors().first().expect("one error");
    assert!(error.contains("Item A1"));
    assert!(error.contains("Room A"));
}

#[rstest]
fn out_of_vocabulary_statuses_are_rule_violations_not_parse_failures() {
    let mut document = sample_document(&DefaultClock);
    fill_all_statuses(&mut document, ItemStatus::Pass);
    let mut body = serde_json::to_value(&document).expect("should serialise");
    let status = body
        .pointer_mut("/rooms/0/items/0/status")
        .expect("status field");
    *status = json!("BROKEN");

    let report = DocumentValidator::validate_body(&body, Some(&document))
        .expect("an unknown status string is not a structural error");
    assert_eq!(report.errors().len(), 1);
    let error = report.errors().first().expect("one error");
    assert!(error.contains("Invalid or missing status"));
    assert!(error.contains("Item A1"));
    assert!(error.contains("Room A"));
}

#[rstest]
fn duplicate_identifiers_are_reported() {
    let mut document = sample_document(&DefaultClock);
    fill_all_statuses(&mut document, ItemStatus::Pass);
    let duplicate_room = document.rooms.first().cloned().expect("first room");
    document.rooms.push(duplicate_room);
    let room = document.rooms.first_mut().expect("first room");
    let duplicate_item = room.items.first().cloned().expect("first item");
    room.items.push(duplicate_item);

    let report = DocumentValidator::validate(&document, None);
    assert!(report
        .errors()
        .iter()
        .any(|error| error.contains("Duplicate room id room_a")));
    assert!(report
        .errors()
        .iter()
        .any(|error| error.contains("Duplicate item id room_a_general_0")));
}

#[rstest]
fn frozen_fields_are_checked_against_the_baseline() {
    let baseline = sample_document(&DefaultClock);
    let mut document = baseline.clone();
    fill_all_statuses(&mut document, ItemStatus::Pass);
    document.inspection_id = InspectionId::from_string("INS-0");
    document.schema_version = "2.0".to_owned();

    let report = DocumentValidator::validate(&document, Some(&baseline));
    assert!(report
        .errors()
        .iter()
        .any(|error| error.contains("Inspection id")));
    assert!(report
        .errors()
        .iter()
        .any(|error| error.contains("Schema version")));
}

#[rstest]
fn dynamically_added_rooms_are_accepted() {
    let baseline = sample_document(&DefaultClock);
    let mut document = baseline.clone();
    fill_all_statuses(&mut document, ItemStatus::Pass);
    let mut extra = document.rooms.first().cloned().expect("template room");
    extra.room_id = crate::inspection::domain::RoomId::new("study");
    extra.room_label = "Study".to_owned();
    document.rooms.push(extra);

    let report = DocumentValidator::validate(&document, Some(&baseline));
    assert!(report.valid(), "unexpected errors: {:?}", report.errors());
}

#[rstest]
fn validate_body_parses_first() {
    let err = DocumentValidator::validate_body(&json!({ "rooms": 7 }), None)
        .expect_err("should fail to parse");
    assert!(matches!(err, DocumentError::Malformed(_)));

    let mut document = sample_document(&DefaultClock);
    document.metadata.client_name = None;
    let body = serde_json::to_value(&document).expect("should serialise");
    let report = DocumentValidator::validate_body(&body, None).expect("should parse");
    assert!(!report.valid());
}
