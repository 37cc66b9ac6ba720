//! Authentication and authorization middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated identity from a JWT Bearer token.
//! - [`rbac::RequireCitizen`] -- Requires the `citizen` role.
//! - [`rbac::RequireOfficer`] -- Requires the `officer` role.

pub mod auth;
pub mod rbac;
