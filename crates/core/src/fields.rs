//! Length and presence rules shared by every entity.

use crate::error::{CoreError, InvalidField};

/// Maximum length of any free-text notes field.
pub const MAX_NOTES_LENGTH: usize = 500;

/// Require a non-blank value of at most `max` characters.
pub fn validate_required_text(
    field: InvalidField,
    value: &str,
    max: usize,
) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::invalid(field, format!("{field} is required")));
    }
    validate_max_length(field, value, max)
}

/// Accept a missing value, otherwise enforce the `max` character limit.
pub fn validate_optional_text(
    field: InvalidField,
    value: Option<&str>,
    max: usize,
) -> Result<(), CoreError> {
    match value {
        Some(v) => validate_max_length(field, v, max),
        None => Ok(()),
    }
}

/// Notes on attendance and payment rows.
pub fn validate_notes(notes: Option<&str>) -> Result<(), CoreError> {
    validate_optional_text(InvalidField::Notes, notes, MAX_NOTES_LENGTH)
}

fn validate_max_length(field: InvalidField, value: &str, max: usize) -> Result<(), CoreError> {
    if value.chars().count() > max {
        return Err(CoreError::invalid(
            field,
            format!("{field} exceeds maximum length of {max} characters"),
        ));
    }
    Ok(())
}
