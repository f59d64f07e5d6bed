//! Handlers for the `/auth` resource (OTP login, refresh, current user).

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use thekedar_core::types::Timestamp;
use thekedar_db::models::user::User;
use thekedar_db::repositories::UserRepo;
use validator::Validate;

use crate::auth::session::SessionTokens;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/send-otp`.
#[derive(Debug, Deserialize, Validate)]
pub struct SendOtpRequest {
    #[validate(length(min = 10, max = 15, message = "phone must be 10 to 15 characters"))]
    pub phone: String,
}

/// Response for `POST /auth/send-otp`.
#[derive(Debug, Serialize)]
pub struct SendOtpResponse {
    pub message: &'static str,
    pub expires_at: Timestamp,
    /// Present only when the delivery channel echoes codes (mock).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Request body for `POST /auth/verify-otp`.
#[derive(Debug, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[validate(length(min = 10, max = 15, message = "phone must be 10 to 15 characters"))]
    pub phone: String,
    #[validate(length(equal = 6, message = "otp must be exactly 6 digits"))]
    pub otp: String,
}

/// Request body for `POST /auth/refresh`.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/send-otp
///
/// Issue a passcode for the phone, replacing any pending one.
pub async fn send_otp(
    State(state): State<AppState>,
    Json(input): Json<SendOtpRequest>,
) -> AppResult<Json<SendOtpResponse>> {
    input.validate()?;

    let challenge = state.sessions.issue_challenge(&input.phone).await?;

    Ok(Json(SendOtpResponse {
        message: "OTP sent successfully",
        expires_at: challenge.expires_at,
        code: challenge.code,
    }))
}

/// POST /api/v1/auth/verify-otp
///
/// Consume the passcode and return a session. Unknown phones get a new user.
pub async fn verify_otp(
    State(state): State<AppState>,
    Json(input): Json<VerifyOtpRequest>,
) -> AppResult<Json<SessionTokens>> {
    input.validate()?;

    let tokens = state
        .sessions
        .login(&state.pool, &input.phone, &input.otp)
        .await?;
    Ok(Json(tokens))
}

/// POST /api/v1/auth/refresh
///
/// Exchange a valid refresh token for a new token pair.
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<SessionTokens>> {
    let tokens = state
        .sessions
        .refresh_session(&state.pool, &input.refresh_token)
        .await?;
    Ok(Json(tokens))
}

/// GET /api/v1/auth/me
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> AppResult<Json<User>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User", auth.user_id))?;
    Ok(Json(user))
}
