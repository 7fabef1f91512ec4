//! Built-in reference data snapshot for tests and embedders without an
//! external reference store.

use crate::catalog::{IssueCatalog, RoomTaxonomy, ScoringRules};
use crate::inspection::ports::{ReferenceData, ReferenceDataResult, ReferenceSnapshot};
use async_trait::async_trait;

/// Reference data adapter serving a fixed in-process snapshot.
#[derive(Debug, Clone)]
pub struct BuiltinReferenceData {
    snapshot: ReferenceSnapshot,
}

impl BuiltinReferenceData {
    /// Creates an adapter serving the given catalog and rules over the
    /// built-in residential taxonomy.
    #[must_use]
    pub fn new(issue_catalog: IssueCatalog, scoring_rules: ScoringRules) -> Self {
        Self {
            snapshot: ReferenceSnapshot {
                taxonomy: RoomTaxonomy::builtin(),
                issue_catalog,
                scoring_rules,
            },
        }
    }

    /// Creates an adapter serving a fully caller-supplied snapshot.
    #[must_use]
    pub const fn from_snapshot(snapshot: ReferenceSnapshot) -> Self {
        Self { snapshot }
    }
}

impl Default for BuiltinReferenceData {
    /// Built-in taxonomy, an empty issue catalog, and weighted-average
    /// scoring defaults.
    fn default() -> Self {
        Self::new(IssueCatalog::empty(), ScoringRules::weighted_default())
    }
}

#[async_trait]
impl ReferenceData for BuiltinReferenceData {
    async fn snapshot(&self) -> ReferenceDataResult<ReferenceSnapshot> {
        Ok(self.snapshot.clone())
    }
}
