//! Handlers for the `/labours` resource.
//!
//! Labourer profiles are shared across projects; any authenticated user may
//! manage them. A labourer's attendance and payment history is only listed
//! for the caller's own projects.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use thekedar_core::types::DbId;
use thekedar_db::models::labour::{CreateLabour, Labour, UpdateLabour};
use thekedar_db::models::payment::Payment;
use thekedar_db::models::work_day::WorkDay;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::services::{LabourService, PaymentService, WorkDayService};
use crate::state::AppState;

/// POST /api/v1/labours
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(input): Json<CreateLabour>,
) -> AppResult<(StatusCode, Json<Labour>)> {
    let labour = LabourService::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(labour)))
}

/// GET /api/v1/labours
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Labour>>>> {
    let labours = LabourService::list(&state.pool).await?;
    Ok(Json(DataResponse { data: labours }))
}

/// GET /api/v1/labours/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Labour>> {
    let labour = LabourService::get(&state.pool, id).await?;
    Ok(Json(labour))
}

/// PUT /api/v1/labours/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLabour>,
) -> AppResult<Json<Labour>> {
    let labour = LabourService::update(&state.pool, id, &input).await?;
    Ok(Json(labour))
}

/// DELETE /api/v1/labours/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    LabourService::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/labours/{id}/payments
pub async fn list_payments(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Payment>>>> {
    let payments = PaymentService::list_by_labour(&state.pool, id, auth.user_id).await?;
    Ok(Json(DataResponse { data: payments }))
}

/// GET /api/v1/labours/{id}/attendance
pub async fn list_attendance(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<WorkDay>>>> {
    let rows = WorkDayService::list_by_labour(&state.pool, id, auth.user_id).await?;
    Ok(Json(DataResponse { data: rows }))
}
