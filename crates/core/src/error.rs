use std::fmt;

use crate::types::DbId;

/// The request field a validation failure refers to.
///
/// Each variant maps to a distinct `INVALID_<FIELD>` error code at the HTTP
/// layer so clients can tell which part of a payload to correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidField {
    Name,
    Phone,
    Description,
    Amount,
    Date,
    Status,
    PaymentType,
    Notes,
    Project,
    Labour,
}

impl InvalidField {
    /// Stable machine-readable error code.
    pub fn code(self) -> &'static str {
        match self {
            InvalidField::Name => "INVALID_NAME",
            InvalidField::Phone => "INVALID_PHONE",
            InvalidField::Description => "INVALID_DESCRIPTION",
            InvalidField::Amount => "INVALID_AMOUNT",
            InvalidField::Date => "INVALID_DATE",
            InvalidField::Status => "INVALID_STATUS",
            InvalidField::PaymentType => "INVALID_PAYMENT_TYPE",
            InvalidField::Notes => "INVALID_NOTES",
            InvalidField::Project => "INVALID_PROJECT",
            InvalidField::Labour => "INVALID_LABOUR",
        }
    }
}

impl fmt::Display for InvalidField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InvalidField::Name => "name",
            InvalidField::Phone => "phone",
            InvalidField::Description => "description",
            InvalidField::Amount => "amount",
            InvalidField::Date => "date",
            InvalidField::Status => "status",
            InvalidField::PaymentType => "payment type",
            InvalidField::Notes => "notes",
            InvalidField::Project => "project",
            InvalidField::Labour => "labour",
        };
        f.write_str(label)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Invalid {field}: {message}")]
    Invalid {
        field: InvalidField,
        message: String,
    },

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// The entity is still referenced and cannot be removed.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for an [`CoreError::Invalid`] with the given field.
    pub fn invalid(field: InvalidField, message: impl Into<String>) -> Self {
        CoreError::Invalid {
            field,
            message: message.into(),
        }
    }
}
