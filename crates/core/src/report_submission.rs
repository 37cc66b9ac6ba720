//! Validation for missing-person report submissions.
//!
//! Reports arrive as multipart forms whose text parts use the dashboard's
//! camelCase field names. [`SubmissionForm`] collects those parts and
//! [`SubmissionForm::validate`] turns them into a typed [`ValidatedSubmission`].

use std::collections::HashMap;

use chrono::{NaiveDateTime, Utc};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Maximum number of photos accepted with a single report.
pub const MAX_PHOTOS_PER_REPORT: usize = 5;

/// Content type recorded for a photo part that did not declare one.
pub const DEFAULT_PHOTO_CONTENT_TYPE: &str = "application/octet-stream";

/// Maximum length for any single text field.
pub const MAX_FIELD_LENGTH: usize = 5_000;

/// Text fields the submission form understands.
pub const KNOWN_FIELDS: &[&str] = &[
    "reporterName",
    "reporterPhone",
    "reporterRelation",
    "personName",
    "personAge",
    "personGender",
    "personHeight",
    "personClothing",
    "description",
    "lastSeenLocation",
    "lastSeenTime",
];

/// Accumulates the text parts of a report submission.
#[derive(Debug, Default)]
pub struct SubmissionForm {
    fields: HashMap<String, String>,
}

/// A fully validated report submission, ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSubmission {
    pub reporter_name: String,
    pub reporter_phone: String,
    pub reporter_relation: Option<String>,
    pub person_name: String,
    pub person_age: i32,
    pub person_gender: String,
    pub person_height: Option<String>,
    pub person_clothing: Option<String>,
    pub description: Option<String>,
    pub last_seen_location: String,
    pub last_seen_time: Timestamp,
}

impl SubmissionForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a text part. Returns `false` (and ignores the value) for field
    /// names the form does not know.
    pub fn insert(&mut self, name: &str, value: String) -> bool {
        if !KNOWN_FIELDS.contains(&name) {
            return false;
        }
        self.fields.insert(name.to_string(), value);
        true
    }

    pub fn validate(mut self) -> Result<ValidatedSubmission, CoreError> {
        for (name, value) in &self.fields {
            if value.len() > MAX_FIELD_LENGTH {
                return Err(CoreError::Validation(format!(
                    "Field '{name}' exceeds maximum length of {MAX_FIELD_LENGTH} characters"
                )));
            }
        }

        let reporter_name = self.required("reporterName")?;
        let reporter_phone = self.required("reporterPhone")?;
        let person_name = self.required("personName")?;
        let person_age = parse_age(&self.required("personAge")?)?;
        let person_gender = self.required("personGender")?;
        let last_seen_location = self.required("lastSeenLocation")?;
        let last_seen_time = parse_last_seen_time(&self.required("lastSeenTime")?)?;

        Ok(ValidatedSubmission {
            reporter_name,
            reporter_phone,
            reporter_relation: self.optional("reporterRelation"),
            person_name,
            person_age,
            person_gender,
            person_height: self.optional("personHeight"),
            person_clothing: self.optional("personClothing"),
            description: self.optional("description"),
            last_seen_location,
            last_seen_time,
        })
    }

    fn required(&mut self, name: &str) -> Result<String, CoreError> {
        self.optional(name)
            .ok_or_else(|| CoreError::Validation(format!("Missing required field '{name}'")))
    }

    fn optional(&mut self, name: &str) -> Option<String> {
        self.fields
            .remove(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

/// Parse a non-negative age in whole years.
pub fn parse_age(raw: &str) -> Result<i32, CoreError> {
    let age: i32 = raw
        .trim()
        .parse()
        .map_err(|_| CoreError::Validation(format!("personAge must be a whole number, got '{raw}'")))?;
    if !(0..=150).contains(&age) {
        return Err(CoreError::Validation(format!(
            "personAge must be between 0 and 150, got {age}"
        )));
    }
    Ok(age)
}

/// Parse the last-seen time.
///
/// Accepts RFC 3339 (`2025-03-05T14:07:09Z`, `...+05:30`) or the zone-less
/// `datetime-local` form (`2025-03-05T14:07` or with seconds), which is taken
/// as UTC.
pub fn parse_last_seen_time(raw: &str) -> Result<Timestamp, CoreError> {
    let raw = raw.trim();
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Ok(naive.and_utc());
        }
    }
    Err(CoreError::Validation(format!(
        "lastSeenTime must be an ISO 8601 date-time, got '{raw}'"
    )))
}

/// Reject submissions carrying more than [`MAX_PHOTOS_PER_REPORT`] photos.
pub fn validate_photo_count(count: usize) -> Result<(), CoreError> {
    if count > MAX_PHOTOS_PER_REPORT {
        return Err(CoreError::Validation(format!(
            "At most {MAX_PHOTOS_PER_REPORT} photos may be attached to a report"
        )));
    }
    Ok(())
}
