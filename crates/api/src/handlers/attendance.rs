//! Handlers for attendance records addressed by their own id.
//!
//! The record is loaded first (404 if absent), then ownership of its
//! project is checked (403 if foreign).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use thekedar_core::types::DbId;
use thekedar_db::models::work_day::{UpdateWorkDay, WorkDay};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::services::{ProjectService, WorkDayService};
use crate::state::AppState;

/// Load a record and require that the caller owns its project.
async fn owned_work_day(state: &AppState, auth: &AuthUser, id: DbId) -> AppResult<WorkDay> {
    let work_day = WorkDayService::get(&state.pool, id).await?;
    ProjectService::require_owner(&state.pool, work_day.project_id, auth.user_id).await?;
    Ok(work_day)
}

/// GET /api/v1/attendance/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<WorkDay>> {
    let work_day = owned_work_day(&state, &auth, id).await?;
    Ok(Json(work_day))
}

/// PUT /api/v1/attendance/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateWorkDay>,
) -> AppResult<Json<WorkDay>> {
    owned_work_day(&state, &auth, id).await?;
    let work_day = WorkDayService::update(&state.pool, id, &input).await?;
    Ok(Json(work_day))
}

/// DELETE /api/v1/attendance/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    owned_work_day(&state, &auth, id).await?;
    WorkDayService::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
