//! Handlers for the `/projects` resource and its nested collections.
//!
//! Every handler here checks ownership of the addressed project first; a
//! missing project and a foreign one both answer 403.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use thekedar_core::types::DbId;
use thekedar_db::models::balance::LabourBalance;
use thekedar_db::models::labour::{AssignLabour, Labour};
use thekedar_db::models::payment::{CreatePayment, Payment, PaymentWithLabour};
use thekedar_db::models::project::{CreateProject, Project, ProjectWithLabours, UpdateProject};
use thekedar_db::models::work_day::{CreateWorkDay, WorkDay, WorkDayWithLabour};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::DateFilterParams;
use crate::response::DataResponse;
use crate::services::{LabourService, PaymentService, ProjectService, WorkDayService};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let project = ProjectService::create(&state.pool, auth.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let projects = ProjectService::list_by_owner(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectWithLabours>> {
    ProjectService::require_owner(&state.pool, id, auth.user_id).await?;
    let project = ProjectService::get(&state.pool, id).await?;
    Ok(Json(project))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    ProjectService::require_owner(&state.pool, id, auth.user_id).await?;
    let project = ProjectService::update(&state.pool, id, &input).await?;
    Ok(Json(project))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    ProjectService::require_owner(&state.pool, id, auth.user_id).await?;
    ProjectService::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Assignments
// ---------------------------------------------------------------------------

/// GET /api/v1/projects/{id}/labours
pub async fn list_labours(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Labour>>>> {
    ProjectService::require_owner(&state.pool, id, auth.user_id).await?;
    let labours = LabourService::list_by_project(&state.pool, id).await?;
    Ok(Json(DataResponse { data: labours }))
}

/// POST /api/v1/projects/{id}/labours
///
/// Idempotent: assigning an already-assigned labourer also answers 201.
pub async fn assign_labour(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<AssignLabour>,
) -> AppResult<(StatusCode, Json<Labour>)> {
    ProjectService::require_owner(&state.pool, id, auth.user_id).await?;
    LabourService::assign_to_project(&state.pool, id, input.labour_id).await?;
    let labour = LabourService::get(&state.pool, input.labour_id).await?;
    Ok((StatusCode::CREATED, Json(labour)))
}

/// DELETE /api/v1/projects/{id}/labours/{labour_id}
pub async fn remove_labour(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, labour_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    ProjectService::require_owner(&state.pool, id, auth.user_id).await?;
    LabourService::remove_from_project(&state.pool, id, labour_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Balances
// ---------------------------------------------------------------------------

/// GET /api/v1/projects/{id}/labours/{labour_id}/balance
pub async fn labour_balance(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, labour_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<LabourBalance>> {
    ProjectService::require_owner(&state.pool, id, auth.user_id).await?;
    let balance = PaymentService::get_balance(&state.pool, id, labour_id).await?;
    Ok(Json(balance))
}

/// GET /api/v1/projects/{id}/balances
pub async fn list_balances(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<LabourBalance>>>> {
    ProjectService::require_owner(&state.pool, id, auth.user_id).await?;
    let balances = PaymentService::list_balances(&state.pool, id).await?;
    Ok(Json(DataResponse { data: balances }))
}

// ---------------------------------------------------------------------------
// Attendance
// ---------------------------------------------------------------------------

/// GET /api/v1/projects/{id}/attendance?date=YYYY-MM-DD
pub async fn list_attendance(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Query(params): Query<DateFilterParams>,
) -> AppResult<Json<DataResponse<Vec<WorkDayWithLabour>>>> {
    ProjectService::require_owner(&state.pool, id, auth.user_id).await?;
    let rows = WorkDayService::list_by_project(&state.pool, id, params.date.as_deref()).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// POST /api/v1/projects/{id}/attendance
pub async fn record_attendance(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreateWorkDay>,
) -> AppResult<(StatusCode, Json<WorkDay>)> {
    ProjectService::require_owner(&state.pool, id, auth.user_id).await?;
    let work_day = WorkDayService::create(&state.pool, id, &input).await?;
    Ok((StatusCode::CREATED, Json(work_day)))
}

// ---------------------------------------------------------------------------
// Payments
// ---------------------------------------------------------------------------

/// GET /api/v1/projects/{id}/payments
pub async fn list_payments(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<PaymentWithLabour>>>> {
    ProjectService::require_owner(&state.pool, id, auth.user_id).await?;
    let payments = PaymentService::list_by_project(&state.pool, id).await?;
    Ok(Json(DataResponse { data: payments }))
}

/// POST /api/v1/projects/{id}/payments
pub async fn record_payment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreatePayment>,
) -> AppResult<(StatusCode, Json<Payment>)> {
    ProjectService::require_owner(&state.pool, id, auth.user_id).await?;
    let payment = PaymentService::create(&state.pool, id, &input).await?;
    Ok((StatusCode::CREATED, Json(payment)))
}
