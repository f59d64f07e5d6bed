//! User identity rules.

use crate::error::{CoreError, InvalidField};

/// Minimum phone length accepted for a login identity.
pub const MIN_USER_PHONE_LENGTH: usize = 10;

/// Maximum phone length accepted for a login identity.
pub const MAX_USER_PHONE_LENGTH: usize = 15;

/// Validate a phone number used as a login identity.
pub fn validate_user_phone(phone: &str) -> Result<(), CoreError> {
    let len = phone.chars().count();
    if !(MIN_USER_PHONE_LENGTH..=MAX_USER_PHONE_LENGTH).contains(&len) {
        return Err(CoreError::invalid(
            InvalidField::Phone,
            format!(
                "phone must be between {MIN_USER_PHONE_LENGTH} and {MAX_USER_PHONE_LENGTH} characters"
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_international_format() {
        assert!(validate_user_phone("+919876543210").is_ok());
    }

    #[test]
    fn rejects_short_and_long() {
        assert!(validate_user_phone("12345").is_err());
        assert!(validate_user_phone("+1234567890123456").is_err());
    }
}
