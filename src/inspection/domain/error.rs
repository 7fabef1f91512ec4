//! Error types for inspection document parsing.

use thiserror::Error;

/// Errors raised while turning untyped bodies into documents.
///
/// Business-rule failures never surface here; they are collected as plain
/// strings in a [`ValidationReport`](crate::inspection::services::ValidationReport).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DocumentError {
    /// The input is not even a well-formed document.
    #[error("malformed inspection document: {0}")]
    Malformed(String),
}
