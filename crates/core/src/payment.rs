//! Payment vocabulary and amount rules.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, InvalidField};
use crate::money::validate_money;

pub const PAYMENT_TYPE_ADVANCE: &str = "advance";
pub const PAYMENT_TYPE_DAILY_WAGE: &str = "daily_wage";
pub const PAYMENT_TYPE_BONUS: &str = "bonus";

/// All valid payment types.
pub const VALID_PAYMENT_TYPES: &[&str] = &[
    PAYMENT_TYPE_ADVANCE,
    PAYMENT_TYPE_DAILY_WAGE,
    PAYMENT_TYPE_BONUS,
];

/// Why money was handed over. Every type reduces the outstanding balance
/// equally; the type is informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    Advance,
    DailyWage,
    Bonus,
}

impl PaymentType {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentType::Advance => PAYMENT_TYPE_ADVANCE,
            PaymentType::DailyWage => PAYMENT_TYPE_DAILY_WAGE,
            PaymentType::Bonus => PAYMENT_TYPE_BONUS,
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            PAYMENT_TYPE_ADVANCE => Ok(PaymentType::Advance),
            PAYMENT_TYPE_DAILY_WAGE => Ok(PaymentType::DailyWage),
            PAYMENT_TYPE_BONUS => Ok(PaymentType::Bonus),
            other => Err(CoreError::invalid(
                InvalidField::PaymentType,
                format!(
                    "invalid payment type '{other}', use {}",
                    VALID_PAYMENT_TYPES.join(", ")
                ),
            )),
        }
    }
}

/// Decodes the stored text column.
impl TryFrom<String> for PaymentType {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A payment must move a strictly positive amount.
pub fn validate_payment_amount(amount: Decimal) -> Result<(), CoreError> {
    if amount <= Decimal::ZERO {
        return Err(CoreError::invalid(
            InvalidField::Amount,
            "amount must be greater than zero",
        ));
    }
    validate_money(amount)
}
