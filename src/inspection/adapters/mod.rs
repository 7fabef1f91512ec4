//! Adapter implementations for inspection ports.

pub mod builtin;

pub use builtin::BuiltinReferenceData;
