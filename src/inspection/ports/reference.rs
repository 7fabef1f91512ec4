//! Reference data port supplying taxonomy, catalog, and scoring snapshots.

use crate::catalog::{IssueCatalog, RoomTaxonomy, ScoringRules};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for reference data operations.
pub type ReferenceDataResult<T> = Result<T, ReferenceDataError>;

/// Read-only snapshot of all reference data a single operation needs.
///
/// Snapshots are fetched per operation; the engine does not cache across
/// calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceSnapshot {
    /// Room taxonomy including checklist item definitions.
    pub taxonomy: RoomTaxonomy,
    /// Predefined issue catalog.
    pub issue_catalog: IssueCatalog,
    /// Active scoring-rules configuration.
    pub scoring_rules: ScoringRules,
}

/// Reference data collaborator contract.
#[async_trait]
pub trait ReferenceData: Send + Sync {
    /// Fetches a consistent snapshot of taxonomy, catalog, and scoring
    /// rules.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceDataError`] when the backing store cannot be
    /// read.
    async fn snapshot(&self) -> ReferenceDataResult<ReferenceSnapshot>;
}

/// Errors returned by reference data implementations.
#[derive(Debug, Clone, Error)]
pub enum ReferenceDataError {
    /// The backing store could not be read.
    #[error("reference data unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl ReferenceDataError {
    /// Wraps a source error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
