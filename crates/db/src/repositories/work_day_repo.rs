//! Repository for the `work_days` (attendance) table.

use sqlx::PgPool;
use thekedar_core::attendance::WorkStatus;
use thekedar_core::types::{CalendarDate, DbId};

use crate::models::work_day::{NewWorkDay, WorkDay, WorkDayWithLabour};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, labour_id, work_date, status, notes, created_at";

/// Columns for listings joined with the labourer's name.
const JOINED_COLUMNS: &str = "w.id, w.project_id, w.labour_id, w.work_date, w.status, \
                              w.notes, w.created_at, l.name AS labour_name";

/// [`COLUMNS`] qualified for queries joining `projects`.
const OWNED_COLUMNS: &str =
    "w.id, w.project_id, w.labour_id, w.work_date, w.status, w.notes, w.created_at";

/// Provides CRUD operations for attendance records.
pub struct WorkDayRepo;

impl WorkDayRepo {
    /// Insert a validated attendance record, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewWorkDay) -> Result<WorkDay, sqlx::Error> {
        let query = format!(
            "INSERT INTO work_days (project_id, labour_id, work_date, status, notes)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkDay>(&query)
            .bind(input.project_id)
            .bind(input.labour_id)
            .bind(input.work_date)
            .bind(input.status.as_str())
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find an attendance record by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<WorkDay>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM work_days WHERE id = $1");
        sqlx::query_as::<_, WorkDay>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's attendance, newest date first, then by labourer name.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<WorkDayWithLabour>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM work_days w
             INNER JOIN labours l ON l.id = w.labour_id
             WHERE w.project_id = $1
             ORDER BY w.work_date DESC, l.name ASC"
        );
        sqlx::query_as::<_, WorkDayWithLabour>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// List a project's attendance on one calendar date, by labourer name.
    pub async fn list_by_project_and_date(
        pool: &PgPool,
        project_id: DbId,
        date: CalendarDate,
    ) -> Result<Vec<WorkDayWithLabour>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM work_days w
             INNER JOIN labours l ON l.id = w.labour_id
             WHERE w.project_id = $1 AND w.work_date = $2
             ORDER BY l.name ASC"
        );
        sqlx::query_as::<_, WorkDayWithLabour>(&query)
            .bind(project_id)
            .bind(date)
            .fetch_all(pool)
            .await
    }

    /// List a labourer's attendance on projects owned by `owner_id`, newest
    /// date first.
    pub async fn list_by_labour(
        pool: &PgPool,
        labour_id: DbId,
        owner_id: DbId,
    ) -> Result<Vec<WorkDay>, sqlx::Error> {
        let query = format!(
            "SELECT {OWNED_COLUMNS}
             FROM work_days w
             INNER JOIN projects pr ON pr.id = w.project_id
             WHERE w.labour_id = $1 AND pr.user_id = $2
             ORDER BY w.work_date DESC, w.created_at DESC"
        );
        sqlx::query_as::<_, WorkDay>(&query)
            .bind(labour_id)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Replace the status and notes of an attendance record.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        status: WorkStatus,
        notes: Option<&str>,
    ) -> Result<Option<WorkDay>, sqlx::Error> {
        let query = format!(
            "UPDATE work_days SET status = $2, notes = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkDay>(&query)
            .bind(id)
            .bind(status.as_str())
            .bind(notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete an attendance record by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM work_days WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
