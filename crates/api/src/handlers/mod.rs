//! Request handlers, one module per resource.
//!
//! Handlers validate input with `beacon_core`, delegate persistence to the
//! repositories in `beacon_db`, and map errors via [`crate::error::AppError`].

pub mod alerts;
pub mod locations;
pub mod police;
pub mod reports;
pub mod users;

use serde::Serialize;

/// `{ "message": ... }` body used by endpoints that only acknowledge.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
