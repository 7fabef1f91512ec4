//! Report normaliser: maps a (possibly legacy-shaped) document into the
//! canonical report model consumed by the rendering collaborator.

use crate::catalog::QualityGrade;
use crate::inspection::domain::{
    CanonicalReport, Dimension, ReportFinding, ReportRoom, ReportSeverity, ReportSeverityCounts,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Supplementary report fields sourced from the owning task and the
/// performing inspector rather than the document body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportContext {
    /// Inspection number the report is generated for.
    pub inspection_number: String,
    /// Client name from the owning task.
    pub client_name: Option<String>,
    /// Property address from the owning task.
    pub property_address: Option<String>,
    /// Performing inspector's display name.
    pub inspector_name: Option<String>,
    /// Verifying admin's display name.
    pub verifier_name: Option<String>,
    /// Date the report is generated against.
    pub inspection_date: DateTime<Utc>,
    /// Base locator for external object storage; relative photo paths are
    /// rewritten against it.
    pub storage_base: String,
    /// Overall score carried over from the derived metrics.
    pub overall_score: Option<u32>,
    /// Quality grade of the overall score.
    pub quality_grade: QualityGrade,
}

/// Two source shapes are supported, resolved exactly once per document.
enum SourceShape {
    /// Flat `inspections` list (preferred).
    Flat {
        findings: Vec<RawFinding>,
        rooms: Vec<RawRoom>,
    },
    /// Nested per-room `items` (legacy).
    Nested { rooms: Vec<RawNestedRoom> },
    /// Neither shape yielded data.
    Empty,
}

#[derive(Debug, Default, Deserialize)]
struct RawBody {
    #[serde(default)]
    metadata: RawMetadata,
    #[serde(default)]
    inspections: Vec<RawFinding>,
    #[serde(default)]
    rooms: Vec<Value>,
    #[serde(default)]
    audit: RawAudit,
}

#[derive(Debug, Default, Deserialize)]
struct RawMetadata {
    #[serde(default)]
    extension_data: Option<RawExtension>,
}

#[derive(Debug, Default, Deserialize)]
struct RawExtension {
    #[serde(default)]
    inspections: Vec<RawFinding>,
    #[serde(default)]
    rooms: Vec<Value>,
}

#[derive(Debug, Default, Deserialize)]
struct RawAudit {
    #[serde(default)]
    submitted_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawFinding {
    #[serde(alias = "room_name")]
    room: Option<String>,
    category: Option<String>,
    #[serde(alias = "status")]
    issue_type: Option<String>,
    #[serde(alias = "label")]
    description: Option<String>,
    #[serde(alias = "photos", default)]
    images: Vec<RawPhoto>,
    date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawRoom {
    #[serde(alias = "room_label")]
    name: Option<String>,
    #[serde(default)]
    dimensions: Vec<Dimension>,
    length: Option<f64>,
    width: Option<f64>,
    #[serde(default)]
    materials: BTreeMap<String, String>,
    #[serde(default)]
    brands: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct RawNestedRoom {
    room_label: Option<String>,
    room_type: Option<String>,
    name: Option<String>,
    #[serde(default)]
    dimensions: Vec<Dimension>,
    length: Option<f64>,
    width: Option<f64>,
    #[serde(default)]
    materials: BTreeMap<String, String>,
    #[serde(default)]
    brands: BTreeMap<String, String>,
    #[serde(default)]
    items: Vec<RawNestedItem>,
}

#[derive(Debug, Deserialize)]
struct RawNestedItem {
    #[serde(alias = "issue_type")]
    status: Option<String>,
    category: Option<String>,
    label: Option<String>,
    remarks: Option<String>,
    description: Option<String>,
    #[serde(alias = "images", default)]
    photos: Vec<RawPhoto>,
}

/// Photo references arrive as plain strings or as legacy objects carrying
/// a server URL and/or local reference.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawPhoto {
    Text(String),
    Legacy {
        server_url: Option<String>,
        local_ref: Option<String>,
    },
    Other(Value),
}

impl RawPhoto {
    fn locator(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            Self::Legacy {
                server_url,
                local_ref,
            } => server_url.as_deref().or(local_ref.as_deref()),
            Self::Other(_) => None,
        }
    }
}

/// Maps documents into the canonical report model.
///
/// Report generation never blocks on data-shape ambiguity: when neither
/// supported shape yields data the normaliser returns an empty report.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportNormalizer;

impl ReportNormalizer {
    /// Normalises a document body into the canonical report model.
    #[must_use]
    pub fn normalize(body: &Value, ctx: &ReportContext) -> CanonicalReport {
        let raw: RawBody = serde_json::from_value(body.clone()).unwrap_or_default();
        let default_date = raw
            .audit
            .submitted_at
            .clone()
            .unwrap_or_else(|| ctx.inspection_date.to_rfc3339());

        let mut severity_counts = ReportSeverityCounts::default();
        let (rooms, findings) = match resolve_shape(raw) {
            SourceShape::Flat { findings, rooms } => (
                rooms.into_iter().map(flat_room).collect(),
                flat_findings(findings, ctx, &default_date, &mut severity_counts),
            ),
            SourceShape::Nested { rooms } => {
                nested(rooms, ctx, &default_date, &mut severity_counts)
            }
            SourceShape::Empty => (Vec::new(), Vec::new()),
        };

        let total_area = total_area(&rooms);

        CanonicalReport {
            report_id: format!("{:0>8}", ctx.inspection_number),
            inspector_name: ctx
                .inspector_name
                .clone()
                .unwrap_or_else(|| "Inspector".to_owned()),
            verifier_name: ctx
                .verifier_name
                .clone()
                .unwrap_or_else(|| "Admin".to_owned()),
            inspection_date: ctx.inspection_date.to_rfc3339(),
            client_name: ctx.client_name.clone().unwrap_or_else(|| "Client".to_owned()),
            property_address: ctx
                .property_address
                .clone()
                .unwrap_or_else(|| "Property Address".to_owned()),
            rooms,
            findings,
            severity_counts,
            total_area,
            overall_score: ctx.overall_score,
            quality_grade: ctx.quality_grade,
        }
    }
}

/// Resolves which source shape to read, once. The flat list wins whenever
/// it is present and non-empty; the nested legacy structure is the
/// fallback.
fn resolve_shape(raw: RawBody) -> SourceShape {
    let extension = raw.metadata.extension_data.unwrap_or_default();

    let findings = if extension.inspections.is_empty() {
        raw.inspections
    } else {
        extension.inspections
    };
    let room_values = if extension.rooms.is_empty() {
        raw.rooms
    } else {
        extension.rooms
    };

    if !findings.is_empty() {
        let rooms = room_values
            .into_iter()
            .filter_map(|value| serde_json::from_value::<RawRoom>(value).ok())
            .collect();
        return SourceShape::Flat { findings, rooms };
    }

    let nested: Vec<RawNestedRoom> = room_values
        .into_iter()
        .filter_map(|value| serde_json::from_value::<RawNestedRoom>(value).ok())
        .collect();
    if nested.is_empty() {
        SourceShape::Empty
    } else {
        SourceShape::Nested { rooms: nested }
    }
}

fn flat_room(raw: RawRoom) -> ReportRoom {
    ReportRoom {
        name: raw.name.unwrap_or_else(|| "Room".to_owned()),
        dimensions: merge_dimensions(raw.dimensions, raw.length, raw.width),
        materials: raw.materials,
        brands: raw.brands,
    }
}

fn flat_findings(
    findings: Vec<RawFinding>,
    ctx: &ReportContext,
    default_date: &str,
    severity_counts: &mut ReportSeverityCounts,
) -> Vec<ReportFinding> {
    findings
        .into_iter()
        .filter(|finding| {
            let raw_type = finding
                .issue_type
                .as_deref()
                .unwrap_or_default()
                .to_ascii_uppercase();
            raw_type != "PASS" && raw_type != "SATISFACTORY"
        })
        .map(|finding| {
            let severity =
                ReportSeverity::normalize(finding.issue_type.as_deref().unwrap_or_default());
            severity_counts.increment(severity);
            ReportFinding {
                room: finding.room.unwrap_or_else(|| "General".to_owned()),
                category: finding.category.unwrap_or_else(|| "General".to_owned()),
                severity,
                description: finding
                    .description
                    .unwrap_or_else(|| "No description".to_owned()),
                photos: rewrite_photos(&finding.images, &ctx.storage_base),
                date: finding.date.unwrap_or_else(|| default_date.to_owned()),
            }
        })
        .collect()
}

fn nested(
    rooms: Vec<RawNestedRoom>,
    ctx: &ReportContext,
    default_date: &str,
    severity_counts: &mut ReportSeverityCounts,
) -> (Vec<ReportRoom>, Vec<ReportFinding>) {
    let mut report_rooms = Vec::new();
    let mut findings = Vec::new();

    for room in rooms {
        let room_name = room
            .room_label
            .or(room.room_type)
            .or(room.name)
            .unwrap_or_else(|| "Room".to_owned());
        report_rooms.push(ReportRoom {
            name: room_name.clone(),
            dimensions: merge_dimensions(room.dimensions, room.length, room.width),
            materials: room.materials,
            brands: room.brands,
        });

        for item in room.items {
            let raw_type = item
                .status
                .as_deref()
                .unwrap_or_default()
                .to_ascii_uppercase();
            // Passing and unset items contribute no finding.
            if raw_type.is_empty() || raw_type == "PASS" || raw_type == "SATISFACTORY" {
                continue;
            }
            let severity = ReportSeverity::normalize(&raw_type);
            severity_counts.increment(severity);
            findings.push(ReportFinding {
                room: room_name.clone(),
                category: item.category.unwrap_or_else(|| "General".to_owned()),
                severity,
                description: item
                    .label
                    .or(item.remarks)
                    .or(item.description)
                    .unwrap_or_else(|| "No description".to_owned()),
                photos: rewrite_photos(&item.photos, &ctx.storage_base),
                date: default_date.to_owned(),
            });
        }
    }

    (report_rooms, findings)
}

fn merge_dimensions(
    dimensions: Vec<Dimension>,
    length: Option<f64>,
    width: Option<f64>,
) -> Vec<Dimension> {
    if !dimensions.is_empty() {
        return dimensions;
    }
    length.map_or_else(Vec::new, |len| {
        vec![Dimension {
            length: len,
            width: width.unwrap_or_default(),
        }]
    })
}

/// Rewrites relative photo paths to absolute external-storage locators.
/// Inline data URIs pass through unchanged.
fn rewrite_photos(photos: &[RawPhoto], storage_base: &str) -> Vec<String> {
    photos
        .iter()
        .filter_map(RawPhoto::locator)
        .map(|locator| {
            if locator.starts_with("data:") {
                locator.to_owned()
            } else if locator.starts_with('/') {
                format!("{storage_base}{locator}")
            } else if locator.contains("uploads/") {
                format!("{storage_base}/{locator}")
            } else {
                locator.to_owned()
            }
        })
        .collect()
}

/// Sums length × width over every dimension entry; non-finite products
/// contribute nothing.
#[expect(
    clippy::float_arithmetic,
    reason = "room areas are measured quantities with no exactness requirement"
)]
fn total_area(rooms: &[ReportRoom]) -> f64 {
    rooms
        .iter()
        .flat_map(|room| &room.dimensions)
        .map(|dim| dim.length * dim.width)
        .filter(|area| area.is_finite())
        .sum()
}
