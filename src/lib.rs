//! Snagcheck: property-inspection document lifecycle engine.
//!
//! This crate provides the core functionality for managing property
//! inspections: generating prefilled inspection documents from a room
//! taxonomy and issue catalog, validating submitted documents, computing
//! derived quality metrics, and driving the role-gated approval lifecycle
//! that ends in a rendered report.
//!
//! # Architecture
//!
//! Snagcheck follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external collaborators
//! - **Adapters**: Concrete implementations of ports (in-memory stores, etc.)
//!
//! # Modules
//!
//! - [`catalog`]: Room taxonomy, predefined issue catalog, and scoring rules
//! - [`inspection`]: Document model, prefill, validation, scoring, and
//!   report normalisation
//! - [`workflow`]: Lifecycle state machine, audit ledger, and store ports

pub mod catalog;
pub mod inspection;
pub mod workflow;
