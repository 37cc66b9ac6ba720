//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that accept
//! `&PgPool` as the first argument. New rows get their id from
//! [`beacon_core::object_id::generate`].

pub mod alert_repo;
pub mod location_repo;
pub mod officer_repo;
pub mod report_photo_repo;
pub mod report_repo;
pub mod user_repo;

pub use alert_repo::AlertRepo;
pub use location_repo::LocationRepo;
pub use officer_repo::OfficerRepo;
pub use report_photo_repo::ReportPhotoRepo;
pub use report_repo::ReportRepo;
pub use user_repo::UserRepo;
