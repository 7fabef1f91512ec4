//! Prefill generator: builds a new inspection document from the taxonomy
//! and issue catalog.

use crate::catalog::{IssueCatalog, RoomTaxonomy};
use crate::inspection::domain::{
    AuditBlock, DerivedMetrics, DocumentStatus, InspectionDocument, InspectionId, Item, ItemId,
    Metadata, MetadataOverrides, Room, RoomId, Technician, TechnicianRef, SCHEMA_VERSION,
};
use mockable::Clock;

/// Request payload for prefill generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefillRequest {
    technician: TechnicianRef,
    overrides: MetadataOverrides,
}

impl PrefillRequest {
    /// Creates a request for the given technician reference.
    #[must_use]
    pub const fn new(technician: TechnicianRef) -> Self {
        Self {
            technician,
            overrides: MetadataOverrides {
                property_id: None,
                property_type: None,
                property_address: None,
                client_name: None,
                client_email: None,
                client_phone: None,
                inspection_date: None,
                notes: None,
            },
        }
    }

    /// Merges metadata overrides into the generated document.
    #[must_use]
    pub fn with_overrides(mut self, overrides: MetadataOverrides) -> Self {
        self.overrides = overrides;
        self
    }
}

/// Builds brand-new draft documents from reference data snapshots.
///
/// Generation is deterministic for identical taxonomy/catalog snapshots,
/// except for the time-derived inspection number and timestamps. It never
/// fails: absent catalog data simply yields rooms with zero items.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefillGenerator;

impl PrefillGenerator {
    /// Generates a draft document.
    ///
    /// For every scored room type in the taxonomy a room is emitted; for
    /// every (room label, category) pair in the issue catalog one item per
    /// non-placeholder description is emitted with an unset status. An
    /// empty catalog yields rooms with zero items.
    #[must_use]
    pub fn generate(
        taxonomy: &RoomTaxonomy,
        catalog: &IssueCatalog,
        request: PrefillRequest,
        clock: &impl Clock,
    ) -> InspectionDocument {
        let now = clock.utc();
        let technician = Technician::from(request.technician);
        let overrides = request.overrides;

        let rooms = taxonomy
            .rooms()
            .iter()
            .filter(|room_type| room_type.scored)
            .map(|room_type| {
                let room_id = RoomId::new(room_type.id.clone());
                let mut items = Vec::new();
                for (category, entries) in catalog.by_category(&room_type.label) {
                    for (index, entry) in entries.iter().enumerate() {
                        items.push(Item {
                            item_id: ItemId::new(item_slug(&room_type.id, category, index)),
                            label: entry.description.clone(),
                            category: category.to_owned(),
                            status: None,
                            remarks: None,
                            photos: Vec::new(),
                        });
                    }
                }
                Room {
                    room_id,
                    room_type: room_type.id.clone(),
                    room_label: room_type.label.clone(),
                    scored: room_type.scored,
                    length: None,
                    width: None,
                    items,
                }
            })
            .collect();

        InspectionDocument {
            schema_version: SCHEMA_VERSION.to_owned(),
            inspection_id: InspectionId::from_instant(now),
            metadata: Metadata {
                property_id: overrides.property_id.unwrap_or_default(),
                property_type: overrides
                    .property_type
                    .unwrap_or_else(|| "Apartment".to_owned()),
                property_address: overrides.property_address.unwrap_or_default(),
                client_name: overrides.client_name,
                client_email: overrides.client_email,
                client_phone: overrides.client_phone,
                inspection_date: overrides.inspection_date.unwrap_or_else(|| now.date_naive()),
                technician,
                notes: overrides.notes.unwrap_or_default(),
            },
            rooms,
            derived: DerivedMetrics::default(),
            audit: AuditBlock {
                status: DocumentStatus::Draft,
                created_at: now,
                last_modified_at: now,
                submitted_at: None,
            },
        }
    }
}

/// Derives a deterministic item slug: `{room}_{category}_{index}` with the
/// category lowercased and whitespace collapsed to underscores.
fn item_slug(room_id: &str, category: &str, index: usize) -> String {
    let category_slug: String = category
        .to_ascii_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    format!("{room_id}_{category_slug}_{index}")
}
