//! Unit tests for the canonical document domain types.

use super::fixtures::sample_document;
use crate::inspection::domain::{
    DocumentError, InspectionDocument, InspectionId, ItemId, PhotoRef, RoomId, Technician,
    TechnicianRef,
};
use chrono::{TimeZone, Utc};
use mockable::DefaultClock;
use rstest::rstest;
use serde_json::json;

#[rstest]
fn parse_round_trips_a_generated_document() {
    let document = sample_document(&DefaultClock);
    let body = serde_json::to_value(&document).expect("should serialise");
    let parsed = InspectionDocument::parse(&body).expect("should parse");
    assert_eq!(parsed, document);
}

#[rstest]
fn parse_rejects_malformed_bodies() {
    let body = json!({ "schema_version": "1.0", "rooms": "not-an-array" });
    let err = InspectionDocument::parse(&body).expect_err("should fail");
    assert!(matches!(err, DocumentError::Malformed(_)));
}

#[rstest]
fn inspection_id_is_time_derived() {
    let instant = Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).single().expect("valid instant");
    let id = InspectionId::from_instant(instant);
    assert_eq!(id.as_str(), format!("INS-{}", instant.timestamp_millis()));
}

#[rstest]
#[case(json!("Priya"), "Priya", "Priya")]
#[case(json!({ "id": "tech-9", "name": "Priya" }), "tech-9", "Priya")]
#[case(json!({ "id": "tech-9" }), "tech-9", "tech-9")]
#[case(json!({ "name": "Priya" }), "Priya", "Priya")]
fn technician_reference_resolves_once(
    #[case] raw: serde_json::Value,
    #[case] expected_id: &str,
    #[case] expected_name: &str,
) {
    let reference: TechnicianRef = serde_json::from_value(raw).expect("should deserialise");
    let technician = Technician::from(reference);
    assert_eq!(technician.id, expected_id);
    assert_eq!(technician.name, expected_name);
}

#[rstest]
fn photo_reference_shape_is_sniffed_at_deserialisation() {
    let inline: PhotoRef = serde_json::from_value(json!("data:image/png;base64,AAAA"))
        .expect("should deserialise");
    assert!(matches!(inline, PhotoRef::Inline(_)));

    let stored: PhotoRef =
        serde_json::from_value(json!("/uploads/123.jpg")).expect("should deserialise");
    assert!(matches!(stored, PhotoRef::Stored(_)));
    assert_eq!(stored.as_str(), "/uploads/123.jpg");

    let back = serde_json::to_value(&stored).expect("should serialise");
    assert_eq!(back, json!("/uploads/123.jpg"));
}

#[rstest]
fn duplicate_room_ids_are_reported_once_in_first_seen_order() {
    let mut document = sample_document(&DefaultClock);
    let mut copy_a = document.rooms.first().cloned().expect("first room");
    copy_a.room_label = "Room A again".to_owned();
    document.rooms.push(copy_a.clone());
    document.rooms.push(copy_a);

    let duplicates = document.duplicate_room_ids();
    assert_eq!(duplicates, vec![&RoomId::new("room_a")]);
}

#[rstest]
fn duplicate_item_ids_are_scoped_to_their_room() {
    let mut document = sample_document(&DefaultClock);
    let room = document.rooms.first_mut().expect("first room");
    let copy = room.items.first().cloned().expect("first item");
    room.items.push(copy);

    let room = document.rooms.first().expect("first room");
    assert_eq!(
        room.duplicate_item_ids(),
        vec![&ItemId::new("room_a_general_0")]
    );

    let other = document.rooms.get(1).expect("second room");
    assert!(other.duplicate_item_ids().is_empty());
}

#[rstest]
fn room_and_item_lookup_by_slug() {
    let document = sample_document(&DefaultClock);
    let room = document.room(&RoomId::new("room_b")).expect("room_b");
    assert!(room.item(&ItemId::new("room_b_general_0")).is_some());
    assert!(room.item(&ItemId::new("zz")).is_none());
    assert!(document.room(&RoomId::new("attic")).is_none());
}
