//! Payment entity model and DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thekedar_core::payment::PaymentType;
use thekedar_core::types::{CalendarDate, DbId, Timestamp};

/// A row from the `payments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Payment {
    pub id: DbId,
    pub project_id: DbId,
    pub labour_id: DbId,
    pub amount: Decimal,
    pub payment_date: CalendarDate,
    #[sqlx(try_from = "String")]
    pub payment_type: PaymentType,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

/// A payment joined with the labourer's name, for project listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PaymentWithLabour {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub payment: Payment,
    pub labour_name: String,
}

/// DTO for recording a payment.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePayment {
    pub labour_id: DbId,
    pub amount: Decimal,
    pub payment_date: String,
    pub payment_type: String,
    pub notes: Option<String>,
}

/// Validated payment row ready for insertion.
#[derive(Debug, Clone)]
pub struct NewPayment {
    pub project_id: DbId,
    pub labour_id: DbId,
    pub amount: Decimal,
    pub payment_date: CalendarDate,
    pub payment_type: PaymentType,
    pub notes: Option<String>,
}
