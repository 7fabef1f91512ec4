//! Canonical inspection document shape and its invariants.

use super::{DocumentError, DocumentStatus, InspectionId, ItemId, RoomId};
use crate::catalog::ItemStatus;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Current document schema version tag.
pub const SCHEMA_VERSION: &str = "1.0";

/// Technician identity as supplied by callers.
///
/// Legacy callers pass a bare name; current callers pass a structured
/// identity. The union is resolved into a [`Technician`] once at the prefill
/// boundary and never re-sniffed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TechnicianRef {
    /// Structured identity, possibly partial.
    Identified {
        /// Technician identifier, falls back to the name when absent.
        id: Option<String>,
        /// Technician display name, falls back to the id when absent.
        name: Option<String>,
    },
    /// Legacy bare-name form.
    Name(String),
}

/// Resolved technician identity carried in document metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Technician {
    /// Technician identifier.
    pub id: String,
    /// Technician display name.
    pub name: String,
}

impl From<TechnicianRef> for Technician {
    fn from(reference: TechnicianRef) -> Self {
        match reference {
            TechnicianRef::Name(name) => Self {
                id: name.clone(),
                name,
            },
            TechnicianRef::Identified { id, name } => {
                let resolved_id = id.clone().or_else(|| name.clone()).unwrap_or_default();
                let resolved_name = name.or(id).unwrap_or_default();
                Self {
                    id: resolved_id,
                    name: resolved_name,
                }
            }
        }
    }
}

/// Descriptive client/property fields plus the inspection date.
///
/// The client name and one contact channel are required, but only at
/// validation time; prefill produces metadata with whatever was supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Property identifier.
    pub property_id: String,
    /// Property type, e.g. `Apartment`.
    pub property_type: String,
    /// Property street address.
    pub property_address: String,
    /// Client display name.
    pub client_name: Option<String>,
    /// Client email address.
    pub client_email: Option<String>,
    /// Client phone number.
    pub client_phone: Option<String>,
    /// Date the inspection is performed on.
    pub inspection_date: NaiveDate,
    /// Resolved technician identity.
    pub technician: Technician,
    /// Free-text notes.
    pub notes: String,
}

/// Optional metadata overrides merged in by the prefill generator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MetadataOverrides {
    /// Property identifier override.
    pub property_id: Option<String>,
    /// Property type override.
    pub property_type: Option<String>,
    /// Property address override.
    pub property_address: Option<String>,
    /// Client name override.
    pub client_name: Option<String>,
    /// Client email override.
    pub client_email: Option<String>,
    /// Client phone override.
    pub client_phone: Option<String>,
    /// Inspection date override.
    pub inspection_date: Option<NaiveDate>,
    /// Notes override.
    pub notes: Option<String>,
}

/// Photo reference owned by an item.
///
/// Either an inline encoded blob (data URI) or a pointer into external
/// object storage; the engine treats both opaquely. The shape is resolved
/// once at deserialisation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PhotoRef {
    /// Inline data URI.
    Inline(String),
    /// Path or URL into external object storage.
    Stored(String),
}

impl PhotoRef {
    /// Returns the raw reference text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Inline(value) | Self::Stored(value) => value,
        }
    }
}

impl From<String> for PhotoRef {
    fn from(value: String) -> Self {
        if value.starts_with("data:") {
            Self::Inline(value)
        } else {
            Self::Stored(value)
        }
    }
}

impl From<PhotoRef> for String {
    fn from(photo: PhotoRef) -> Self {
        match photo {
            PhotoRef::Inline(value) | PhotoRef::Stored(value) => value,
        }
    }
}

/// One checklist finding within a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Item slug, unique within the room.
    pub item_id: ItemId,
    /// Human-readable item label.
    pub label: String,
    /// Category grouping used for scoring-rule and issue-catalog lookups.
    pub category: String,
    /// Inspector's finding; `None` until filled. Out-of-vocabulary values
    /// deserialise as unset so the validator reports them field-level
    /// instead of the whole body failing to parse.
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: Option<ItemStatus>,
    /// Free-text remarks.
    pub remarks: Option<String>,
    /// Photo references, owned by the document.
    #[serde(default)]
    pub photos: Vec<PhotoRef>,
}

/// Accepts any string (or null) for an item status, mapping values outside
/// the status vocabulary to `None`. Non-string values remain structural
/// errors.
fn lenient_status<'de, D>(deserializer: D) -> Result<Option<ItemStatus>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| ItemStatus::try_from(value.as_str()).ok()))
}

/// One room in the inspection document.
///
/// Order is irrelevant for scoring but preserved for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Stable room slug, unique within the document.
    pub room_id: RoomId,
    /// Room type slug from the taxonomy.
    pub room_type: String,
    /// Display label.
    pub room_label: String,
    /// Whether the room contributes to aggregate scoring. Unscored rooms
    /// are still stored.
    pub scored: bool,
    /// Room length, when measured.
    pub length: Option<f64>,
    /// Room width, when measured.
    pub width: Option<f64>,
    /// Checklist items in display order.
    pub items: Vec<Item>,
}

/// Severity tallies across all findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeverityCounts {
    /// Count of critical findings.
    pub critical: u32,
    /// Count of major findings.
    pub major: u32,
    /// Count of minor findings.
    pub minor: u32,
    /// Count of cosmetic findings.
    pub cosmetic: u32,
}

impl SeverityCounts {
    /// Increments the bucket for the given severity.
    pub const fn increment(&mut self, severity: crate::catalog::IssueSeverity) {
        use crate::catalog::IssueSeverity;
        match severity {
            IssueSeverity::Critical => self.critical += 1,
            IssueSeverity::Major => self.major += 1,
            IssueSeverity::Minor => self.minor += 1,
            IssueSeverity::Cosmetic => self.cosmetic += 1,
        }
    }

    /// Returns `true` when no findings have been tallied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.critical == 0 && self.major == 0 && self.minor == 0 && self.cosmetic == 0
    }
}

/// Output-only derived metrics block.
///
/// Always a pure function of the item statuses plus the active scoring
/// rules; overwritten every time the calculator runs and never hand-edited.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// Per-room scores keyed by room slug, in deterministic key order.
    pub room_scores: BTreeMap<RoomId, u32>,
    /// Severity tallies across all findings.
    pub severity_counts: SeverityCounts,
    /// Overall property score; `None` when nothing was scoreable.
    pub overall_score: Option<u32>,
    /// Total number of non-passing findings.
    pub total_issues: u32,
    /// Number of rooms that contributed to this scoring pass.
    pub total_rooms_inspected: u32,
}

/// Lifecycle timestamps mirrored into the document body.
///
/// The workflow state machine owns the status; this block is the projection
/// it writes on every transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditBlock {
    /// Mirrored lifecycle status.
    pub status: DocumentStatus,
    /// Document creation instant.
    pub created_at: DateTime<Utc>,
    /// Latest modification instant.
    pub last_modified_at: DateTime<Utc>,
    /// Submission instant, once submitted.
    pub submitted_at: Option<DateTime<Utc>>,
}

/// The canonical inspection document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionDocument {
    /// Schema version tag for forward compatibility. Frozen once submitted.
    pub schema_version: String,
    /// Unique inspection number. Frozen once submitted.
    pub inspection_id: InspectionId,
    /// Client/property descriptive fields.
    pub metadata: Metadata,
    /// Rooms in display order.
    pub rooms: Vec<Room>,
    /// Output-only derived metrics.
    pub derived: DerivedMetrics,
    /// Lifecycle projection.
    pub audit: AuditBlock,
}

impl InspectionDocument {
    /// Deserialises a document from an untyped body.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Malformed`] when the value is not a
    /// well-formed document (missing rooms array, malformed metadata, and
    /// so on). Business-rule problems are the validator's concern, not
    /// parsing's.
    pub fn parse(body: &serde_json::Value) -> Result<Self, DocumentError> {
        serde_json::from_value(body.clone()).map_err(|err| DocumentError::Malformed(err.to_string()))
    }

    /// Looks up a room by slug.
    #[must_use]
    pub fn room(&self, room_id: &RoomId) -> Option<&Room> {
        self.rooms.iter().find(|room| &room.room_id == room_id)
    }

    /// Returns room slugs that appear more than once, in first-seen order.
    #[must_use]
    pub fn duplicate_room_ids(&self) -> Vec<&RoomId> {
        let mut seen: Vec<&RoomId> = Vec::new();
        let mut duplicates: Vec<&RoomId> = Vec::new();
        for room in &self.rooms {
            if seen.contains(&&room.room_id) {
                if !duplicates.contains(&&room.room_id) {
                    duplicates.push(&room.room_id);
                }
            } else {
                seen.push(&room.room_id);
            }
        }
        duplicates
    }
}

impl Room {
    /// Looks up an item by slug.
    #[must_use]
    pub fn item(&self, item_id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.item_id == item_id)
    }

    /// Returns item slugs that appear more than once within this room.
    #[must_use]
    pub fn duplicate_item_ids(&self) -> Vec<&ItemId> {
        let mut seen: Vec<&ItemId> = Vec::new();
        let mut duplicates: Vec<&ItemId> = Vec::new();
        for item in &self.items {
            if seen.contains(&&item.item_id) {
                if !duplicates.contains(&&item.item_id) {
                    duplicates.push(&item.item_id);
                }
            } else {
                seen.push(&item.item_id);
            }
        }
        duplicates
    }
}
