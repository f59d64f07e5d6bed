//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod balance_repo;
pub mod labour_repo;
pub mod payment_repo;
pub mod project_repo;
pub mod user_repo;
pub mod work_day_repo;

pub use balance_repo::BalanceRepo;
pub use labour_repo::LabourRepo;
pub use payment_repo::PaymentRepo;
pub use project_repo::ProjectRepo;
pub use user_repo::UserRepo;
pub use work_day_repo::WorkDayRepo;
