//! Labourer profile rules.

use rust_decimal::Decimal;

use crate::error::{CoreError, InvalidField};
use crate::fields::{validate_optional_text, validate_required_text};
use crate::money::validate_money;

/// Maximum length of a labourer's name.
pub const MAX_LABOUR_NAME_LENGTH: usize = 255;

/// Maximum length of a labourer's contact phone.
pub const MAX_LABOUR_PHONE_LENGTH: usize = 20;

/// Validate a labourer profile. The daily wage may be zero but never negative.
pub fn validate_labour(
    name: &str,
    phone: Option<&str>,
    daily_wage: Decimal,
) -> Result<(), CoreError> {
    validate_required_text(InvalidField::Name, name, MAX_LABOUR_NAME_LENGTH)?;
    validate_optional_text(InvalidField::Phone, phone, MAX_LABOUR_PHONE_LENGTH)?;
    if daily_wage < Decimal::ZERO {
        return Err(CoreError::invalid(
            InvalidField::Amount,
            "daily wage must not be negative",
        ));
    }
    validate_money(daily_wage)
}
