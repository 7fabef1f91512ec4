//! Room taxonomy and per-room checklist item definitions.

use serde::{Deserialize, Serialize};

/// Definition of a checklist item a room type carries by default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDefinition {
    /// Stable item slug, unique within the room type.
    pub item_id: String,
    /// Human-readable item label.
    pub label: String,
    /// Free-text category grouping used for scoring-rule and issue-catalog
    /// lookups.
    pub category: String,
}

impl ItemDefinition {
    /// Creates a checklist item definition.
    #[must_use]
    pub fn new(
        item_id: impl Into<String>,
        label: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            item_id: item_id.into(),
            label: label.into(),
            category: category.into(),
        }
    }
}

/// Definition of a room type in the taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomTypeDef {
    /// Stable room slug, e.g. `living_room`.
    pub id: String,
    /// Display label, e.g. `Living Room`. Also the key the issue catalog
    /// stores room types under.
    pub label: String,
    /// Whether rooms of this type contribute to aggregate scoring.
    pub scored: bool,
    /// Default checklist items for this room type.
    pub items: Vec<ItemDefinition>,
}

impl RoomTypeDef {
    /// Creates a scored room type definition without checklist items.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            scored: true,
            items: Vec::new(),
        }
    }

    /// Marks the room type as excluded from aggregate scoring.
    #[must_use]
    pub fn unscored(mut self) -> Self {
        self.scored = false;
        self
    }

    /// Sets the default checklist items.
    #[must_use]
    pub fn with_items(mut self, items: impl IntoIterator<Item = ItemDefinition>) -> Self {
        self.items = items.into_iter().collect();
        self
    }
}

/// Ordered, read-only room taxonomy snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoomTaxonomy {
    rooms: Vec<RoomTypeDef>,
}

impl RoomTaxonomy {
    /// Creates a taxonomy from room type definitions, preserving order.
    #[must_use]
    pub fn new(rooms: impl IntoIterator<Item = RoomTypeDef>) -> Self {
        Self {
            rooms: rooms.into_iter().collect(),
        }
    }

    /// Returns all room type definitions in display order.
    #[must_use]
    pub fn rooms(&self) -> &[RoomTypeDef] {
        &self.rooms
    }

    /// Looks up a room type by its slug.
    #[must_use]
    pub fn room(&self, id: &str) -> Option<&RoomTypeDef> {
        self.rooms.iter().find(|room| room.id == id)
    }

    /// Returns the checklist item definitions for a room type, empty when
    /// the room type is unknown or carries no defaults.
    #[must_use]
    pub fn item_definitions(&self, room_id: &str) -> &[ItemDefinition] {
        self.room(room_id).map_or(&[], |room| room.items.as_slice())
    }

    /// Built-in residential taxonomy mirroring the reference data load.
    #[must_use]
    pub fn builtin() -> Self {
        let common = |extra: ItemDefinition| {
            vec![
                ItemDefinition::new("flooring_finish", "Flooring finish", "Flooring"),
                ItemDefinition::new("wall_paint", "Wall paint quality", "Wall Finish"),
                ItemDefinition::new("ceiling_condition", "Ceiling condition", "Wall Finish"),
                ItemDefinition::new(
                    "electrical_outlets",
                    "Electrical outlets functioning",
                    "Electrical Work",
                ),
                ItemDefinition::new("door_alignment", "Door alignment", "Doors"),
                ItemDefinition::new("window_condition", "Window condition", "Windows"),
                extra,
            ]
        };

        Self::new([
            RoomTypeDef::new("living_room", "Living Room").with_items(common(
                ItemDefinition::new("ac_provision", "AC provision available", "Electrical Work"),
            )),
            RoomTypeDef::new("master_bedroom", "Master Bedroom").with_items(common(
                ItemDefinition::new(
                    "wardrobe_condition",
                    "Wardrobe/Cabinet condition",
                    "Modular Furniture",
                ),
            )),
            RoomTypeDef::new("bedroom_1", "Bedroom 1").with_items(common(
                ItemDefinition::new(
                    "wardrobe_condition",
                    "Wardrobe/Cabinet condition",
                    "Modular Furniture",
                ),
            )),
            RoomTypeDef::new("bedroom_2", "Bedroom 2").with_items(common(
                ItemDefinition::new("lighting", "Lighting adequacy", "Electrical Work"),
            )),
            RoomTypeDef::new("kitchen", "Kitchen").with_items([
                ItemDefinition::new("flooring_finish", "Flooring finish", "Flooring"),
                ItemDefinition::new("wall_tiles", "Wall tiles condition", "Wall Finish"),
                ItemDefinition::new("countertop", "Countertop condition", "Modular Kitchen"),
                ItemDefinition::new("appliances", "Appliances condition", "Modular Kitchen"),
                ItemDefinition::new("plumbing", "Plumbing functioning", "Plumbing"),
                ItemDefinition::new(
                    "electrical_outlets",
                    "Electrical outlets functioning",
                    "Electrical Work",
                ),
                ItemDefinition::new("ventilation", "Ventilation/Exhaust fan", "Electrical Work"),
                ItemDefinition::new("gas_connection", "Gas connection available", "Plumbing"),
            ]),
            RoomTypeDef::new("dining", "Dining Room").with_items(common(ItemDefinition::new(
                "lighting",
                "Lighting adequacy",
                "Electrical Work",
            ))),
            RoomTypeDef::new("bathroom_1", "Bathroom 1").with_items([
                ItemDefinition::new("flooring_finish", "Flooring finish", "Flooring"),
                ItemDefinition::new("wall_tiles", "Wall tiles condition", "Wall Finish"),
                ItemDefinition::new("plumbing", "Plumbing functioning", "Plumbing"),
                ItemDefinition::new("sanitary_ware", "Sanitary ware condition", "Sanitary ware"),
                ItemDefinition::new("cp_fittings", "CP fittings condition", "Sanitary ware"),
                ItemDefinition::new(
                    "electrical_outlets",
                    "Electrical outlets safe",
                    "Electrical Work",
                ),
                ItemDefinition::new("ventilation", "Ventilation/Exhaust fan", "Electrical Work"),
                ItemDefinition::new("mirror_shelves", "Mirror & shelves", "Modular Furniture"),
            ]),
            RoomTypeDef::new("bathroom_2", "Bathroom 2").with_items([
                ItemDefinition::new("flooring_finish", "Flooring finish", "Flooring"),
                ItemDefinition::new("wall_tiles", "Wall tiles condition", "Wall Finish"),
                ItemDefinition::new("plumbing", "Plumbing functioning", "Plumbing"),
                ItemDefinition::new("sanitary_ware", "Sanitary ware condition", "Sanitary ware"),
            ]),
            RoomTypeDef::new("balcony", "Balcony").with_items([
                ItemDefinition::new("flooring_finish", "Flooring finish", "Flooring"),
                ItemDefinition::new("railing", "Railing condition", "Handrails/MS grills"),
                ItemDefinition::new("waterproofing", "Waterproofing condition", "Wall Finish"),
            ]),
            RoomTypeDef::new("entrance", "Entrance").with_items([
                ItemDefinition::new("flooring_finish", "Flooring finish", "Flooring"),
                ItemDefinition::new("door_alignment", "Main door alignment", "Doors"),
            ]),
            RoomTypeDef::new("corridor", "Corridor").with_items([
                ItemDefinition::new("flooring_finish", "Flooring finish", "Flooring"),
                ItemDefinition::new("wall_paint", "Wall paint quality", "Wall Finish"),
            ]),
            // Parking is recorded for display but never aggregated.
            RoomTypeDef::new("parking", "Parking").unscored(),
        ])
    }
}
