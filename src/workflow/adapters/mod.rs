//! Adapter implementations for workflow ports.

pub mod memory;

pub use memory::{
    InMemoryInspectionStore, InMemoryInspectorDirectory, InMemoryReportRenderer, InMemoryTaskStore,
};
