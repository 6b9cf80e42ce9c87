//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&DbPool` as the first argument. Repositories return raw
//! `sqlx::Error`s; translation into domain errors happens in the catalog.

pub mod category_repo;
pub mod item_repo;
pub mod report_repo;
pub mod user_repo;

pub use category_repo::CategoryRepo;
pub use item_repo::ItemRepo;
pub use report_repo::ReportRepo;
pub use user_repo::UserRepo;
