//! Shared builders for inspection service tests.

use crate::catalog::{
    CatalogEntry, IssueCatalog, IssueSeverity, ItemStatus, RoomTaxonomy, RoomTypeDef,
};
use crate::inspection::domain::{InspectionDocument, MetadataOverrides, TechnicianRef};
use crate::inspection::services::{PrefillGenerator, PrefillRequest};
use mockable::Clock;

/// Two scored rooms plus an unscored parking space.
pub fn small_taxonomy() -> RoomTaxonomy {
    RoomTaxonomy::new([
        RoomTypeDef::new("room_a", "Room A"),
        RoomTypeDef::new("room_b", "Room B"),
        RoomTypeDef::new("parking", "Parking").unscored(),
    ])
}

/// Catalog yielding items `room_a_general_0`, `room_a_general_1`, and
/// `room_b_general_0` under prefill.
pub fn small_catalog() -> IssueCatalog {
    IssueCatalog::new([
        CatalogEntry::new("Room A", "General", "Item A1", IssueSeverity::Minor),
        CatalogEntry::new("Room A", "General", "Item A2", IssueSeverity::Minor),
        CatalogEntry::new("Room B", "General", "Item B1", IssueSeverity::Minor),
    ])
}

/// A prefilled document over [`small_taxonomy`] and [`small_catalog`] with
/// complete contact details, ready for status assignment.
pub fn sample_document(clock: &impl Clock) -> InspectionDocument {
    let overrides = MetadataOverrides {
        property_id: Some("PROP-7".to_owned()),
        client_name: Some("Asha Verma".to_owned()),
        client_email: Some("asha@example.com".to_owned()),
        ..MetadataOverrides::default()
    };
    PrefillGenerator::generate(
        &small_taxonomy(),
        &small_catalog(),
        PrefillRequest::new(TechnicianRef::Name("Priya Sharma".to_owned()))
            .with_overrides(overrides),
        clock,
    )
}

/// Sets the status of one item, addressed by room and item slug.
pub fn set_status(
    document: &mut InspectionDocument,
    room_id: &str,
    item_id: &str,
    status: ItemStatus,
) {
    let room = document
        .rooms
        .iter_mut()
        .find(|room| room.room_id.as_str() == room_id)
        .expect("room should exist");
    let item = room
        .items
        .iter_mut()
        .find(|item| item.item_id.as_str() == item_id)
        .expect("item should exist");
    item.status = Some(status);
}

/// Sets every item in the document to the given status.
pub fn fill_all_statuses(document: &mut InspectionDocument, status: ItemStatus) {
    for room in &mut document.rooms {
        for item in &mut room.items {
            item.status = Some(status);
        }
    }
}
