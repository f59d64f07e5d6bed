use std::str::FromStr;

use sqlx::PgPool;
use thekedar_core::attendance::WorkStatus;
use thekedar_core::dates::parse_calendar_date;
use thekedar_core::fields::validate_notes;
use thekedar_core::types::DbId;
use thekedar_db::models::work_day::{
    CreateWorkDay, NewWorkDay, UpdateWorkDay, WorkDay, WorkDayWithLabour,
};
use thekedar_db::repositories::WorkDayRepo;

use super::{require_assignment, LabourService};
use crate::error::{AppError, AppResult};

/// Attendance records.
pub struct WorkDayService;

impl WorkDayService {
    /// Record attendance for an assigned labourer on a project.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateWorkDay,
    ) -> AppResult<WorkDay> {
        let work_date = parse_calendar_date(&input.work_date)?;
        let status = WorkStatus::from_str(&input.status)?;
        validate_notes(input.notes.as_deref())?;

        require_assignment(pool, project_id, input.labour_id).await?;

        let new = NewWorkDay {
            project_id,
            labour_id: input.labour_id,
            work_date,
            status,
            notes: input.notes.clone(),
        };
        Ok(WorkDayRepo::create(pool, &new).await?)
    }

    pub async fn get(pool: &PgPool, id: DbId) -> AppResult<WorkDay> {
        WorkDayRepo::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::not_found("Work day", id))
    }

    /// Correct the status and notes of a record. Date and pair are fixed.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateWorkDay) -> AppResult<WorkDay> {
        let status = WorkStatus::from_str(&input.status)?;
        validate_notes(input.notes.as_deref())?;

        WorkDayRepo::update(pool, id, status, input.notes.as_deref())
            .await?
            .ok_or_else(|| AppError::not_found("Work day", id))
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
        if WorkDayRepo::delete(pool, id).await? {
            Ok(())
        } else {
            Err(AppError::not_found("Work day", id))
        }
    }

    /// A project's attendance, optionally restricted to one `YYYY-MM-DD` date.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
        date: Option<&str>,
    ) -> AppResult<Vec<WorkDayWithLabour>> {
        let rows = match date {
            Some(raw) => {
                let date = parse_calendar_date(raw)?;
                WorkDayRepo::list_by_project_and_date(pool, project_id, date).await?
            }
            None => WorkDayRepo::list_by_project(pool, project_id).await?,
        };
        Ok(rows)
    }

    /// A labourer's history, limited to the projects `owner_id` owns.
    pub async fn list_by_labour(
        pool: &PgPool,
        labour_id: DbId,
        owner_id: DbId,
    ) -> AppResult<Vec<WorkDay>> {
        LabourService::get(pool, labour_id).await?;
        Ok(WorkDayRepo::list_by_labour(pool, labour_id, owner_id).await?)
    }
}
