//! Renderer port turning canonical reports into stored artefacts.

use crate::inspection::domain::CanonicalReport;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// A rendered report artefact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifact {
    /// Opaque locator of the stored artefact, e.g. a path or URL.
    pub locator: String,
}

/// Report rendering contract.
///
/// Implementations receive the normalised canonical report; layout and
/// output format are entirely theirs.
#[async_trait]
pub trait ReportRenderer: Send + Sync {
    /// Renders and stores a report, returning its locator.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when rendering or storage fails.
    async fn render(&self, report: &CanonicalReport) -> RenderResult<RenderedArtifact>;
}

/// Errors returned by renderer implementations.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    /// Rendering or artefact storage failed.
    #[error("report rendering failed: {0}")]
    Failed(Arc<dyn std::error::Error + Send + Sync>),
}

impl RenderError {
    /// Wraps a source error.
    pub fn failed(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Failed(Arc::new(err))
    }
}
