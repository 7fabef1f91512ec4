//! Port contracts for the workflow module.

mod identity;
mod renderer;
mod repository;

pub use identity::{InspectorDirectory, InspectorDirectoryError, InspectorDirectoryResult};
pub use renderer::{RenderError, RenderResult, RenderedArtifact, ReportRenderer};
pub use repository::{InspectionStore, StoreError, StoreResult, TaskStore};
