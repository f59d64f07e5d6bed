//! Attendance (work day) entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thekedar_core::attendance::WorkStatus;
use thekedar_core::types::{CalendarDate, DbId, Timestamp};

/// A row from the `work_days` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkDay {
    pub id: DbId,
    pub project_id: DbId,
    pub labour_id: DbId,
    pub work_date: CalendarDate,
    #[sqlx(try_from = "String")]
    pub status: WorkStatus,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

/// A work day joined with the labourer's name, for project listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkDayWithLabour {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub work_day: WorkDay,
    pub labour_name: String,
}

/// DTO for recording attendance. `work_date` is a `YYYY-MM-DD` string and
/// `status` a raw status name; both are parsed by the service layer.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWorkDay {
    pub labour_id: DbId,
    pub work_date: String,
    pub status: String,
    pub notes: Option<String>,
}

/// DTO for correcting an attendance record's status and notes.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateWorkDay {
    pub status: String,
    pub notes: Option<String>,
}

/// Validated attendance row ready for insertion.
#[derive(Debug, Clone)]
pub struct NewWorkDay {
    pub project_id: DbId,
    pub labour_id: DbId,
    pub work_date: CalendarDate,
    pub status: WorkStatus,
    pub notes: Option<String>,
}
