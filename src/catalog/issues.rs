//! Predefined issue catalog keyed by room type and category.

use super::IssueSeverity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Spreadsheet-error markers that occasionally survive the reference data
/// load. Entries carrying one of these descriptions are silently dropped.
const PLACEHOLDER_MARKERS: [&str; 2] = ["#N/A", "#REF!"];

/// One predefined issue description sourced from the reference data load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Room type display label the issue applies to, e.g. `Living Room`.
    pub room_type: String,
    /// Category grouping, e.g. `Flooring`.
    pub category: String,
    /// Issue description presented to the inspector.
    pub description: String,
    /// Severity the issue is classified at.
    pub severity: IssueSeverity,
}

impl CatalogEntry {
    /// Creates a catalog entry.
    #[must_use]
    pub fn new(
        room_type: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        severity: IssueSeverity,
    ) -> Self {
        Self {
            room_type: room_type.into(),
            category: category.into(),
            description: description.into(),
            severity,
        }
    }

    /// Returns `true` when the description is a known placeholder token
    /// rather than a real issue.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        let trimmed = self.description.trim();
        trimmed.is_empty() || PLACEHOLDER_MARKERS.contains(&trimmed)
    }
}

/// Read-only catalog of predefined issue descriptions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IssueCatalog {
    entries: Vec<CatalogEntry>,
}

impl IssueCatalog {
    /// Creates a catalog from entries, preserving load order.
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Creates an empty catalog.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns all entries in load order.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Groups the non-placeholder entries for a room label by category.
    ///
    /// Categories are returned in lexical order so downstream generation is
    /// deterministic for identical catalog snapshots.
    #[must_use]
    pub fn by_category<'a>(&'a self, room_label: &str) -> BTreeMap<&'a str, Vec<&'a CatalogEntry>> {
        let mut grouped: BTreeMap<&str, Vec<&CatalogEntry>> = BTreeMap::new();
        for entry in &self.entries {
            if entry.room_type == room_label && !entry.is_placeholder() {
                grouped.entry(entry.category.as_str()).or_default().push(entry);
            }
        }
        grouped
    }
}
