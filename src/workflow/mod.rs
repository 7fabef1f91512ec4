//! Lifecycle state machine for inspection tasks and documents.
//!
//! This module owns the authoritative set of states and role-gated
//! transitions for a task and its inspection document. On the relevant
//! transitions it invokes the validator and calculator from
//! [`crate::inspection`] and appends entries to an append-only audit
//! ledger. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
