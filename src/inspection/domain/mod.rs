//! Domain model for inspection documents.
//!
//! The document domain models the canonical inspection body (metadata,
//! rooms, items, derived metrics, and audit projection) while keeping all
//! infrastructure concerns outside of the domain boundary.

mod document;
mod error;
mod ids;
mod report;
mod status;

pub use document::{
    AuditBlock, DerivedMetrics, InspectionDocument, Item, Metadata, MetadataOverrides, PhotoRef,
    Room, SeverityCounts, Technician, TechnicianRef, SCHEMA_VERSION,
};
pub use error::DocumentError;
pub use ids::{InspectionId, ItemId, RoomId};
pub use report::{
    CanonicalReport, Dimension, ReportFinding, ReportRoom, ReportSeverity, ReportSeverityCounts,
};
pub use status::{DocumentStatus, ParseDocumentStatusError};
