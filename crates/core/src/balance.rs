//! Earned-minus-paid balance arithmetic for one labourer on one project.
//!
//! All figures are [`Decimal`], so sums and products are exact. The
//! repository layer computes the two aggregates in SQL (`NUMERIC`) and hands
//! them to [`compute_balance`].

use rust_decimal::Decimal;
use serde::Serialize;

use crate::money::MONEY_SCALE;

/// The three balance figures.
///
/// A positive `balance` is still owed to the labourer; a negative one means
/// the labourer has been paid ahead of what was earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BalanceFigures {
    pub total_earned: Decimal,
    pub total_paid: Decimal,
    pub balance: Decimal,
}

/// Combine a daily wage, total day units (Σ wage multiplier) and the total
/// paid.
pub fn compute_balance(
    daily_wage: Decimal,
    day_units: Decimal,
    total_paid: Decimal,
) -> BalanceFigures {
    let total_earned = daily_wage * day_units;
    BalanceFigures {
        total_earned: currency_scale(total_earned),
        total_paid: currency_scale(total_paid),
        balance: currency_scale(total_earned - total_paid),
    }
}

/// Drop trailing zeros, then pad to at least [`MONEY_SCALE`] places.
///
/// Never rounds: a figure with more significant places keeps them.
fn currency_scale(value: Decimal) -> Decimal {
    let mut value = value.normalize();
    if value.scale() < MONEY_SCALE {
        value.rescale(MONEY_SCALE);
    }
    value
}
