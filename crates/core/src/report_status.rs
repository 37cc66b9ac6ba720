//! Missing-person report status constants and validation.
//!
//! Any status may be set from any other; there is no transition graph, only
//! the closed set of values below.

use crate::error::CoreError;

/// The person is still missing. Default for new reports.
pub const STATUS_ACTIVE: &str = "active";
/// The person has been located.
pub const STATUS_FOUND: &str = "found";
/// Police are actively following a lead.
pub const STATUS_INVESTIGATING: &str = "investigating";

/// All valid report statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_ACTIVE, STATUS_FOUND, STATUS_INVESTIGATING];

/// Validate that a status string is one of the known statuses.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid status value '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn all_statuses_are_valid() {
        for s in VALID_STATUSES {
            assert!(validate_status(s).is_ok(), "Status '{s}' should be valid");
        }
    }

    #[test]
    fn unknown_status_is_invalid() {
        assert_matches!(validate_status("closed"), Err(CoreError::Validation(_)));
        assert_matches!(validate_status(""), Err(CoreError::Validation(_)));
    }

    #[test]
    fn status_check_is_case_sensitive() {
        assert!(validate_status("Found").is_err());
        assert!(validate_status("ACTIVE").is_err());
    }

    #[test]
    fn error_lists_allowed_values() {
        let err = validate_status("lost").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("active, found, investigating"), "got: {msg}");
    }
}
