//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO as received from clients
//! - Where input needs parsing first, a validated `New*` struct handed to the
//!   repository

pub mod balance;
pub mod labour;
pub mod payment;
pub mod project;
pub mod user;
pub mod work_day;
