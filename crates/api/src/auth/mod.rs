//! Phone-verified authentication and session tokens.
//!
//! - [`otp`] -- in-memory one-time passcode store and its configuration.
//! - [`delivery`] -- passcode delivery channels (mock and SMS gateway).
//! - [`jwt`] -- access/refresh token generation and validation.
//! - [`session`] -- [`session::SessionManager`], tying the above together and
//!   owning the background sweep.

pub mod delivery;
pub mod jwt;
pub mod otp;
pub mod session;
