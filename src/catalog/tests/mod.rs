//! Unit tests for the catalog module.
