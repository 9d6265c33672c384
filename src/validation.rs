//! Input validation for planning requests.
//!
//! Checks structural integrity of a request before planning. Detects:
//! - A fleet with no machines
//! - Non-finite field geometry (NaN or infinite coordinates)
//! - Negative field dimensions
//! - Duplicate caller-supplied field IDs
//!
//! Zero-width or zero-height fields are accepted: they produce a degenerate
//! but well-defined coverage path.

use std::collections::HashSet;

use crate::models::PlanRequest;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The request asks for zero machines.
    InvalidMachineCount,
    /// A field coordinate or dimension is NaN or infinite.
    NonFiniteGeometry,
    /// A field has a negative width or height.
    NegativeDimension,
    /// Two fields share the same explicit ID.
    DuplicateFieldId,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a planning request.
///
/// Checks:
/// 1. Machine count is positive
/// 2. Every field coordinate is finite
/// 3. No field has a negative width or height
/// 4. No two fields share an explicit ID
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &PlanRequest) -> ValidationResult {
    let mut errors = Vec::new();

    if request.machine_count == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidMachineCount,
            "machine count must be at least 1",
        ));
    }

    let mut ids = HashSet::new();
    for (index, field) in request.fields.iter().enumerate() {
        let label = field_label(index, field.id.as_deref());

        if !field.is_finite() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonFiniteGeometry,
                format!("{label} has non-finite geometry"),
            ));
            continue;
        }

        if field.width < 0.0 || field.height < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeDimension,
                format!(
                    "{label} has negative size {}x{}",
                    field.width, field.height
                ),
            ));
        }

        if let Some(id) = field.id.as_deref() {
            if !ids.insert(id) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateFieldId,
                    format!("Duplicate field ID: {id}"),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn field_label(index: usize, id: Option<&str>) -> String {
    match id {
        Some(id) => format!("Field '{id}'"),
        None => format!("Field #{index}"),
    }
}
