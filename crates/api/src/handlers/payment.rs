//! Handlers for payments addressed by their own id.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use thekedar_core::types::DbId;
use thekedar_db::models::payment::Payment;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::services::{PaymentService, ProjectService};
use crate::state::AppState;

/// Load a payment (404 if absent) and require that the caller owns its
/// project (403 otherwise).
async fn owned_payment(state: &AppState, auth: &AuthUser, id: DbId) -> AppResult<Payment> {
    let payment = PaymentService::get(&state.pool, id).await?;
    ProjectService::require_owner(&state.pool, payment.project_id, auth.user_id).await?;
    Ok(payment)
}

/// GET /api/v1/payments/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Payment>> {
    let payment = owned_payment(&state, &auth, id).await?;
    Ok(Json(payment))
}

/// DELETE /api/v1/payments/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    owned_payment(&state, &auth, id).await?;
    PaymentService::delete(&state.pool, id).await?;
    tracing::info!(payment_id = %id, user_id = %auth.user_id, "Payment deleted");
    Ok(StatusCode::NO_CONTENT)
}
