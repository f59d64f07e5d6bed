//! Precision limits for stored money values (`NUMERIC(12, 2)`).
//!
//! Values that would be rounded or overflow on insert are rejected up front
//! rather than silently altered by the database.

use rust_decimal::Decimal;

use crate::error::{CoreError, InvalidField};

/// Digits after the decimal point a money column keeps.
pub const MONEY_SCALE: u32 = 2;

/// Check that `amount` fits a money column without rounding.
pub fn validate_money(amount: Decimal) -> Result<(), CoreError> {
    if amount.normalize().scale() > MONEY_SCALE {
        return Err(CoreError::invalid(
            InvalidField::Amount,
            format!("amount must have at most {MONEY_SCALE} decimal places"),
        ));
    }
    if amount.abs() > max_money() {
        return Err(CoreError::invalid(
            InvalidField::Amount,
            format!("amount must not exceed {}", max_money()),
        ));
    }
    Ok(())
}

/// Largest storable magnitude: 9,999,999,999.99.
pub fn max_money() -> Decimal {
    Decimal::new(999_999_999_999, MONEY_SCALE)
}
