//! In-memory one-time passcode store.
//!
//! A passcode moves through `absent -> pending -> consumed | expired`.
//! Issuing for a phone replaces any pending code. Only a phone-bound SHA-256
//! digest of the code is held.

use std::collections::HashMap;
use std::time::Duration;

use chrono::Utc;
use thekedar_core::otp::{hash_otp, DEFAULT_OTP_SWEEP_INTERVAL_SECS, DEFAULT_OTP_TTL_SECS};
use thekedar_core::types::Timestamp;
use tokio::sync::Mutex;

use crate::auth::delivery::OtpProvider;
use crate::config::env_or;

/// Longest passcode lifetime accepted from configuration (one day).
pub const MAX_OTP_TTL_SECS: u64 = 24 * 60 * 60;

/// Passcode lifetime, sweep cadence and delivery channel.
#[derive(Debug, Clone)]
pub struct OtpConfig {
    /// How long an issued code stays verifiable (default: 300 s).
    pub ttl_secs: u64,
    /// Interval between background sweeps of expired codes (default: 60 s).
    pub sweep_interval_secs: u64,
    pub provider: OtpProvider,
}

impl OtpConfig {
    /// Load passcode configuration from environment variables.
    ///
    /// | Env Var                   | Default |
    /// |---------------------------|---------|
    /// | `OTP_TTL_SECS`            | `300`   |
    /// | `OTP_SWEEP_INTERVAL_SECS` | `60`    |
    ///
    /// The delivery channel is read by [`OtpProvider::from_env`].
    ///
    /// # Panics
    ///
    /// Panics if `OTP_TTL_SECS` is zero or above [`MAX_OTP_TTL_SECS`], or if
    /// the sweep interval is zero.
    pub fn from_env() -> Self {
        let ttl_secs = checked_ttl_secs(env_or("OTP_TTL_SECS", DEFAULT_OTP_TTL_SECS))
            .unwrap_or_else(|e| panic!("{e}"));
        let sweep_interval_secs =
            env_or("OTP_SWEEP_INTERVAL_SECS", DEFAULT_OTP_SWEEP_INTERVAL_SECS);
        assert!(sweep_interval_secs > 0, "OTP_SWEEP_INTERVAL_SECS must be positive");

        Self {
            ttl_secs,
            sweep_interval_secs,
            provider: OtpProvider::from_env(),
        }
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }
}

/// A lifetime must be positive and no longer than [`MAX_OTP_TTL_SECS`], so
/// adding it to a timestamp can never overflow.
fn checked_ttl_secs(secs: u64) -> Result<u64, String> {
    if secs == 0 || secs > MAX_OTP_TTL_SECS {
        return Err(format!(
            "OTP_TTL_SECS must be between 1 and {MAX_OTP_TTL_SECS}, got {secs}"
        ));
    }
    Ok(secs)
}

#[derive(Debug)]
struct PendingOtp {
    code_hash: String,
    expires_at: Timestamp,
}

/// Lock-guarded map of phone number to pending passcode.
///
/// `issue`, `verify` and `sweep` are the only mutators. The `*_at` variants
/// take the current time explicitly.
#[derive(Debug)]
pub struct OtpStore {
    pending: Mutex<HashMap<String, PendingOtp>>,
    ttl: chrono::Duration,
}

impl OtpStore {
    /// `ttl` is capped at [`MAX_OTP_TTL_SECS`].
    pub fn new(ttl: Duration) -> Self {
        let max = chrono::Duration::seconds(MAX_OTP_TTL_SECS as i64);
        let ttl = chrono::Duration::from_std(ttl).map_or(max, |ttl| ttl.min(max));
        Self {
            pending: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Store `code` for `phone`, replacing any pending code. Returns the expiry.
    pub async fn issue(&self, phone: &str, code: &str) -> Timestamp {
        self.issue_at(phone, code, Utc::now()).await
    }

    pub async fn issue_at(&self, phone: &str, code: &str, now: Timestamp) -> Timestamp {
        let expires_at = now + self.ttl;
        let entry = PendingOtp {
            code_hash: hash_otp(phone, code),
            expires_at,
        };
        self.pending.lock().await.insert(phone.to_string(), entry);
        expires_at
    }

    /// `true` only for a matching, unexpired code, which is then consumed.
    ///
    /// Mismatch leaves the pending code in place; an expired code is dropped.
    pub async fn verify(&self, phone: &str, code: &str) -> bool {
        self.verify_at(phone, code, Utc::now()).await
    }

    pub async fn verify_at(&self, phone: &str, code: &str, now: Timestamp) -> bool {
        let mut pending = self.pending.lock().await;
        let Some(entry) = pending.get(phone) else {
            return false;
        };

        if entry.expires_at <= now {
            pending.remove(phone);
            return false;
        }

        if entry.code_hash != hash_otp(phone, code) {
            return false;
        }

        pending.remove(phone);
        true
    }

    /// Drop every expired code. Returns how many were removed.
    pub async fn sweep(&self) -> usize {
        self.sweep_at(Utc::now()).await
    }

    pub async fn sweep_at(&self, now: Timestamp) -> usize {
        let mut pending = self.pending.lock().await;
        let before = pending.len();
        pending.retain(|_, entry| entry.expires_at > now);
        before - pending.len()
    }

    /// Number of codes currently held, expired or not.
    pub async fn len(&self) -> usize {
        self.pending.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
