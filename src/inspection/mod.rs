//! Inspection document model and the pure services operating on it.
//!
//! This module owns the canonical inspection document shape, the prefill
//! generator that builds new documents from the catalog, the structural
//! validator, the derived-metrics calculator, and the report normaliser.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Document services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
