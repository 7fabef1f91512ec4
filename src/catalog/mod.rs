//! Static reference data for the inspection engine.
//!
//! The catalog module holds the room taxonomy, per-room checklist item
//! definitions, the predefined issue catalog, and the scoring-rules
//! configuration. Everything here is read-only from the engine's
//! perspective; catalog maintenance is an external concern.

mod issues;
mod scoring;
mod status;
mod taxonomy;

#[cfg(test)]
mod tests;

pub use issues::{CatalogEntry, IssueCatalog};
pub use scoring::{
    DeductionTable, QualityGrade, ReportThresholds, ScoringRules, StatusWeights,
};
pub use status::{IssueSeverity, ItemStatus, ParseItemStatusError};
pub use taxonomy::{ItemDefinition, RoomTaxonomy, RoomTypeDef};
