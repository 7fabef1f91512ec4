//! Port contracts for inspection document services.
//!
//! Ports define infrastructure-agnostic interfaces used by document
//! services and the workflow state machine.

pub mod reference;

pub use reference::{ReferenceData, ReferenceDataError, ReferenceDataResult, ReferenceSnapshot};
