//! One-time passcode format, generation and hashing.
//!
//! Lives in `core` so the passcode rules can be reused by any delivery
//! backend without pulling in the HTTP layer.

use rand::Rng;

use crate::hashing::sha256_hex;

/// Number of ASCII digits in a passcode.
pub const OTP_LENGTH: usize = 6;

/// Default passcode lifetime in seconds (5 minutes).
pub const DEFAULT_OTP_TTL_SECS: u64 = 300;

/// Default interval between sweeps of expired passcodes, in seconds.
pub const DEFAULT_OTP_SWEEP_INTERVAL_SECS: u64 = 60;

/// Generate a uniformly random, zero-padded 6-digit passcode.
pub fn generate_otp_code() -> String {
    let n: u32 = rand::rng().random_range(0..1_000_000);
    format!("{n:0width$}", width = OTP_LENGTH)
}

/// `true` when `code` is exactly [`OTP_LENGTH`] ASCII digits.
pub fn is_well_formed_otp(code: &str) -> bool {
    code.len() == OTP_LENGTH && code.bytes().all(|b| b.is_ascii_digit())
}

/// Digest stored in place of a pending passcode. Bound to the phone so the
/// same code issued to two phones never produces the same digest.
pub fn hash_otp(phone: &str, code: &str) -> String {
    sha256_hex(format!("{phone}:{code}").as_bytes())
}
