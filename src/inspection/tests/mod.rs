//! Unit tests for the inspection module.
//!
//! Tests are organised by service, covering happy paths, error cases, and
//! the edge cases each service's contract names.

mod document_tests;
mod fixtures;
mod prefill_tests;
mod validator_tests;
