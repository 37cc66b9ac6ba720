//! Well-known role name constants carried in the `role` claim of access tokens.

/// A member of the public who files missing-person reports.
pub const ROLE_CITIZEN: &str = "citizen";

/// A police officer who reviews reports and updates case status.
pub const ROLE_OFFICER: &str = "officer";
