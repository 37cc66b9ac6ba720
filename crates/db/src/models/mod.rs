//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - Create DTOs for inserts

pub mod alert;
pub mod location;
pub mod officer;
pub mod report;
pub mod user;
