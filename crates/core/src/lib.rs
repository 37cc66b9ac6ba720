//! Domain logic for the Beacon missing-person platform.
//!
//! Everything in this crate is free of I/O: identifier rules, report status
//! rules, submission and registration validation, and the alert enrichment
//! join. The `db` and `api` crates build on these.

pub mod alert_enrichment;
pub mod alert_feed;
pub mod error;
pub mod object_id;
pub mod registration;
pub mod report_status;
pub mod report_submission;
pub mod roles;
pub mod types;
