//! Document services: prefill generation, validation, scoring, and report
//! normalisation.

mod normalizer;
mod prefill;
mod scoring;
mod validator;

pub use normalizer::{ReportContext, ReportNormalizer};
pub use prefill::{PrefillGenerator, PrefillRequest};
pub use scoring::ScoreCalculator;
pub use validator::{DocumentValidator, ValidationReport};
