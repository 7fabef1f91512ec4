//! Directory port resolving inspector identities.

use crate::workflow::domain::{ActorId, InspectorIdentity};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for directory operations.
pub type InspectorDirectoryResult<T> = Result<T, InspectorDirectoryError>;

/// Inspector directory contract.
///
/// The directory is the identity collaborator; the engine trusts what it
/// returns and performs no authentication of its own.
#[async_trait]
pub trait InspectorDirectory: Send + Sync {
    /// Resolves an inspector identity by actor identifier.
    ///
    /// Returns `None` when the actor is unknown to the directory.
    async fn find_inspector(&self, id: ActorId) -> InspectorDirectoryResult<Option<InspectorIdentity>>;
}

/// Errors returned by directory implementations.
#[derive(Debug, Clone, Error)]
pub enum InspectorDirectoryError {
    /// The directory could not be reached.
    #[error("inspector directory unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl InspectorDirectoryError {
    /// Wraps a source error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
