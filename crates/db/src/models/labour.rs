//! Labour entity model and DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thekedar_core::types::{DbId, Timestamp};

/// A labourer row from the `labours` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Labour {
    pub id: DbId,
    pub name: String,
    pub phone: Option<String>,
    pub daily_wage: Decimal,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a labourer.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLabour {
    pub name: String,
    pub phone: Option<String>,
    pub daily_wage: Decimal,
}

/// DTO for replacing a labourer's profile.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLabour {
    pub name: String,
    pub phone: Option<String>,
    pub daily_wage: Decimal,
}

/// DTO for assigning an existing labourer to a project.
#[derive(Debug, Clone, Deserialize)]
pub struct AssignLabour {
    pub labour_id: DbId,
}
