//! Session lifecycle: passcode challenges and signed session tokens.
//!
//! [`SessionManager`] owns the passcode store and the background sweep that
//! clears expired codes. It is created once at startup via
//! [`SessionManager::start`] and torn down with [`SessionManager::shutdown`].

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use sqlx::PgPool;
use thekedar_core::error::CoreError;
use thekedar_core::otp::generate_otp_code;
use thekedar_core::types::Timestamp;
use thekedar_core::user::validate_user_phone;
use thekedar_db::models::user::User;
use thekedar_db::repositories::UserRepo;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::auth::delivery::{self, OtpDelivery};
use crate::auth::jwt::{generate_token, validate_token, Claims, JwtConfig, TokenKind};
use crate::auth::otp::{OtpConfig, OtpStore};
use crate::background::otp_sweep;
use crate::error::{AppError, AppResult};

/// How long shutdown waits for the sweep task to finish.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// A passcode that has been issued and handed to the delivery channel.
#[derive(Debug, Clone)]
pub struct Challenge {
    pub expires_at: Timestamp,
    /// The code itself, only when the delivery channel allows echoing it.
    pub code: Option<String>,
}

/// A freshly issued token pair and the identity it belongs to.
#[derive(Debug, Clone, Serialize)]
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: String,
    /// Expiry of the access token.
    pub expires_at: Timestamp,
    pub user: User,
}

/// Issues and verifies passcodes and signs session tokens.
pub struct SessionManager {
    otp: Arc<OtpStore>,
    delivery: Arc<dyn OtpDelivery>,
    fixed_code: Option<String>,
    jwt: JwtConfig,
    cancel: CancellationToken,
    sweep_handle: Mutex<Option<JoinHandle<()>>>,
}

impl SessionManager {
    /// Create the manager with the delivery channel named in `otp` and spawn
    /// the expiry sweep. Must be called from within a Tokio runtime.
    pub fn start(jwt: JwtConfig, otp: &OtpConfig) -> Arc<Self> {
        Self::start_with_delivery(jwt, otp, delivery::from_provider(&otp.provider))
    }

    /// Like [`start`](Self::start) with an explicit delivery channel.
    pub fn start_with_delivery(
        jwt: JwtConfig,
        otp: &OtpConfig,
        delivery: Arc<dyn OtpDelivery>,
    ) -> Arc<Self> {
        let store = Arc::new(OtpStore::new(otp.ttl()));
        let cancel = CancellationToken::new();

        let handle = tokio::spawn(otp_sweep::run(
            Arc::clone(&store),
            otp.sweep_interval(),
            cancel.child_token(),
        ));

        tracing::info!(
            delivery = delivery.name(),
            ttl_secs = otp.ttl_secs,
            "Session manager started"
        );

        Arc::new(Self {
            otp: store,
            delivery,
            fixed_code: otp.provider.fixed_code().map(str::to_owned),
            jwt,
            cancel,
            sweep_handle: Mutex::new(Some(handle)),
        })
    }

    /// Stop the sweep and wait briefly for it to exit.
    pub async fn shutdown(&self) {
        tracing::info!("Shutting down session manager");
        self.cancel.cancel();
        if let Some(handle) = self.sweep_handle.lock().await.take() {
            let _ = tokio::time::timeout(SHUTDOWN_GRACE, handle).await;
        }
    }

    // ---- passcodes ----

    /// Deliver a fresh passcode to `phone`, then make it the pending one.
    ///
    /// A failed delivery stores nothing, so any earlier pending code stays
    /// valid.
    pub async fn issue_challenge(&self, phone: &str) -> AppResult<Challenge> {
        validate_user_phone(phone)?;

        let code = self
            .fixed_code
            .clone()
            .unwrap_or_else(generate_otp_code);

        self.delivery
            .deliver(phone, &code)
            .await
            .map_err(|e| AppError::InternalError(format!("OTP delivery failed: {e}")))?;

        let expires_at = self.otp.issue(phone, &code).await;

        Ok(Challenge {
            expires_at,
            code: self.delivery.echoes_code().then_some(code),
        })
    }

    /// Consume a pending passcode. `false` for mismatch, absence or expiry alike.
    pub async fn verify_challenge(&self, phone: &str, code: &str) -> bool {
        self.otp.verify(phone, code).await
    }

    /// Verify a passcode, resolve (or create) the user, and open a session.
    pub async fn login(&self, pool: &PgPool, phone: &str, code: &str) -> AppResult<SessionTokens> {
        validate_user_phone(phone)?;

        if !self.verify_challenge(phone, code).await {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Invalid or expired OTP".into(),
            )));
        }

        let (user, created) = UserRepo::get_or_create(pool, phone).await?;
        tracing::info!(user_id = %user.id, created, "User logged in");

        self.issue_session(user)
    }

    // ---- tokens ----

    /// Sign an access token and a refresh token for `user`.
    pub fn issue_session(&self, user: User) -> AppResult<SessionTokens> {
        let access = generate_token(user.id, &user.phone, TokenKind::Access, &self.jwt)
            .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
        let refresh = generate_token(user.id, &user.phone, TokenKind::Refresh, &self.jwt)
            .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

        Ok(SessionTokens {
            access_token: access.token,
            refresh_token: refresh.token,
            expires_at: access.expires_at,
            user,
        })
    }

    /// Validate a bearer (access) token and return its claims.
    pub fn validate_session(&self, token: &str) -> AppResult<Claims> {
        self.validate_kind(token, TokenKind::Access, "Invalid or expired token")
    }

    /// Exchange a refresh token for a new pair.
    ///
    /// The user must still exist. The presented refresh token stays valid
    /// until it expires.
    pub async fn refresh_session(
        &self,
        pool: &PgPool,
        refresh_token: &str,
    ) -> AppResult<SessionTokens> {
        let claims = self.validate_kind(
            refresh_token,
            TokenKind::Refresh,
            "Invalid or expired refresh token",
        )?;

        let user = UserRepo::find_by_id(pool, claims.sub)
            .await?
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User not found".into())))?;

        self.issue_session(user)
    }

    fn validate_kind(&self, token: &str, kind: TokenKind, message: &str) -> AppResult<Claims> {
        validate_token(token, &self.jwt)
            .ok()
            .filter(|claims| claims.kind == kind)
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized(message.to_string())))
    }
}
