//! Structural and semantic validation of submitted documents.

use crate::inspection::domain::{DocumentError, InspectionDocument, Room};
use serde_json::Value;

/// Outcome of a validation run.
///
/// Business-rule failures are collected as field-level error strings; the
/// validator never errors for them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    errors: Vec<String>,
}

impl ValidationReport {
    /// Returns `true` when no rule was violated.
    #[must_use]
    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the collected error strings.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Consumes the report, yielding the error strings.
    #[must_use]
    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

/// Validates candidate documents against the submission rules.
///
/// Validation is deliberately permissive about extra structure: rooms and
/// items absent from the prefill baseline are accepted as dynamically
/// added. It is strict about the one thing the calculator depends on: a
/// complete status on every leaf item.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentValidator;

impl DocumentValidator {
    /// Validates an untyped body, parsing it first.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Malformed`] when the body is not a
    /// well-formed document at all. Rule violations are reported inside
    /// the `Ok` report, never as errors.
    pub fn validate_body(
        body: &Value,
        baseline: Option<&InspectionDocument>,
    ) -> Result<ValidationReport, DocumentError> {
        let document = InspectionDocument::parse(body)?;
        Ok(Self::validate(&document, baseline))
    }

    /// Validates a parsed document, optionally cross-referencing its own
    /// prefill baseline.
    #[must_use]
    pub fn validate(
        document: &InspectionDocument,
        baseline: Option<&InspectionDocument>,
    ) -> ValidationReport {
        let mut errors = Vec::new();

        validate_metadata(document, &mut errors);
        if let Some(prefill) = baseline {
            validate_identity(document, prefill, &mut errors);
        }
        validate_rooms(document, &mut errors);

        ValidationReport { errors }
    }
}

/// Cross-checks the fields frozen against the prefill baseline.
fn validate_identity(
    document: &InspectionDocument,
    baseline: &InspectionDocument,
    errors: &mut Vec<String>,
) {
    if document.inspection_id != baseline.inspection_id {
        errors.push(format!(
            "Inspection id {} does not match its baseline {}",
            document.inspection_id, baseline.inspection_id
        ));
    }
    if document.schema_version != baseline.schema_version {
        errors.push(format!(
            "Schema version {} does not match its baseline {}",
            document.schema_version, baseline.schema_version
        ));
    }
}

fn validate_metadata(document: &InspectionDocument, errors: &mut Vec<String>) {
    let metadata = &document.metadata;
    if metadata
        .client_name
        .as_deref()
        .is_none_or(|name| name.trim().is_empty())
    {
        errors.push("Client name is required".to_owned());
    }
    if metadata.client_email.is_none() && metadata.client_phone.is_none() {
        errors.push("Either client email or phone is required".to_owned());
    }
}

fn validate_rooms(document: &InspectionDocument, errors: &mut Vec<String>) {
    if document.rooms.is_empty() {
        errors.push("At least one room must be inspected".to_owned());
    }

    for duplicate in document.duplicate_room_ids() {
        errors.push(format!("Duplicate room id {duplicate}"));
    }

    // Rooms and items absent from the baseline are dynamic additions; the
    // status requirement applies to them all the same, so no baseline
    // lookup is needed per room.
    for room in &document.rooms {
        validate_room_items(room, errors);
    }
}

fn validate_room_items(room: &Room, errors: &mut Vec<String>) {
    for duplicate in room.duplicate_item_ids() {
        errors.push(format!(
            "Duplicate item id {duplicate} in {}",
            room.room_label
        ));
    }

    for item in &room.items {
        if item.status.is_none() {
            errors.push(format!(
                "Invalid or missing status for {} in {}",
                item.label, room.room_label
            ));
        }
    }
}
