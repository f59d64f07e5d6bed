//! Balance aggregates and the balance response shape.

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use thekedar_core::balance::{compute_balance, BalanceFigures};
use thekedar_core::types::DbId;

/// Raw aggregates for one labourer on one project, as summed by PostgreSQL.
#[derive(Debug, Clone, FromRow)]
pub struct BalanceInputs {
    pub labour_id: DbId,
    pub labour_name: String,
    pub daily_wage: Decimal,
    /// Σ wage multiplier over the pair's attendance rows.
    pub day_units: Decimal,
    pub total_paid: Decimal,
}

/// Balance response for one labourer on one project.
#[derive(Debug, Clone, Serialize)]
pub struct LabourBalance {
    pub labour_id: DbId,
    pub labour_name: String,
    #[serde(flatten)]
    pub figures: BalanceFigures,
}

impl From<BalanceInputs> for LabourBalance {
    fn from(inputs: BalanceInputs) -> Self {
        Self {
            figures: compute_balance(inputs.daily_wage, inputs.day_units, inputs.total_paid),
            labour_id: inputs.labour_id,
            labour_name: inputs.labour_name,
        }
    }
}
