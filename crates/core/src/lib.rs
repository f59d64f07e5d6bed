//! Domain rules for the labour contractor backend.
//!
//! Pure logic only: no database or HTTP types. Both the repository layer and
//! the API server depend on this crate.

pub mod attendance;
pub mod balance;
pub mod dates;
pub mod error;
pub mod fields;
pub mod hashing;
pub mod labour;
pub mod money;
pub mod otp;
pub mod payment;
pub mod project;
pub mod types;
pub mod user;
