//! Periodic removal of expired one-time passcodes.
//!
//! Runs on a fixed interval using `tokio::time::interval`, independent of
//! verification traffic. Each pass holds the store lock only while it
//! filters the map.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::auth::otp::OtpStore;

/// Run the sweep loop until `cancel` is triggered.
pub async fn run(store: Arc<OtpStore>, every: Duration, cancel: CancellationToken) {
    tracing::info!(interval_secs = every.as_secs(), "OTP sweep started");

    let mut interval = tokio::time::interval(every);
    // The first tick completes immediately; nothing can have expired yet.
    interval.tick().await;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("OTP sweep stopping");
                break;
            }
            _ = interval.tick() => {
                let removed = store.sweep().await;
                if removed > 0 {
                    tracing::debug!(removed, "OTP sweep: dropped expired codes");
                }
            }
        }
    }
}
