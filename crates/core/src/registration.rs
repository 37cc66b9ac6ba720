//! Registration payloads for citizens and officers, with field validation.
//!
//! Both payloads derive [`Validate`]; call [`validate_input`] to run the rules
//! and collapse any failures into a single [`CoreError::Validation`]. Every
//! field is required and nothing else is enforced; a duplicate email or badge
//! number is the only other way registration fails.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Body of `POST /users/register`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CitizenRegistration {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub full_name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub email: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub phone: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub address: String,
    pub date_of_birth: NaiveDate,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub emergency_contact: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub emergency_phone: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
}

/// Body of `POST /police/register`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OfficerRegistration {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub badge_number: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub station: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
}

/// Run the derived validation rules, reporting every failing field.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(describe(&errors)))
}

fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let reason = errs
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| "is invalid".to_string());
            format!("{field} {reason}")
        })
        .collect();
    parts.sort();
    parts.join("; ")
}
