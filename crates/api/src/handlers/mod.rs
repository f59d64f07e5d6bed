pub mod attendance;
pub mod auth;
pub mod labour;
pub mod payment;
pub mod project;
