//! Project field rules.

use crate::error::{CoreError, InvalidField};
use crate::fields::{validate_optional_text, validate_required_text};

/// Maximum length of a project name.
pub const MAX_PROJECT_NAME_LENGTH: usize = 255;

/// Maximum length of a project description.
pub const MAX_PROJECT_DESCRIPTION_LENGTH: usize = 1000;

/// Validate the user-editable fields of a project.
pub fn validate_project(name: &str, description: Option<&str>) -> Result<(), CoreError> {
    validate_required_text(InvalidField::Name, name, MAX_PROJECT_NAME_LENGTH)?;
    validate_optional_text(
        InvalidField::Description,
        description,
        MAX_PROJECT_DESCRIPTION_LENGTH,
    )
}
