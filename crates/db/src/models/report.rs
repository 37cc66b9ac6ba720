//! Missing-person report model, photo rows and DTOs.

use beacon_core::report_submission::ValidatedSubmission;
use beacon_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full row from the `missing_reports` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingReport {
    #[serde(rename = "_id")]
    pub id: DbId,
    pub user_id: DbId,
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
    pub status: String,
    /// Incremented on every status change; used for optimistic concurrency.
    pub version: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Id and subject name only, for the alert enrichment join.
#[derive(Debug, Clone, FromRow)]
pub struct ReportName {
    pub id: DbId,
    pub person_name: String,
}

/// Photo metadata without the binary payload.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct PhotoMeta {
    pub report_id: DbId,
    pub photo_index: i32,
    pub content_type: String,
    pub size_bytes: i64,
}

/// A stored photo's content type and bytes.
#[derive(Debug, Clone, FromRow)]
pub struct PhotoData {
    pub content_type: String,
    pub data: Vec<u8>,
}

/// A photo to be stored alongside a new report.
#[derive(Debug, Clone)]
pub struct NewPhoto {
    pub content_type: String,
    pub data: Vec<u8>,
}

/// DTO for inserting a report on behalf of `user_id`.
#[derive(Debug, Clone)]
pub struct CreateReport {
    pub user_id: DbId,
    pub fields: ValidatedSubmission,
}

/// Result of a status update attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusUpdate {
    Updated(MissingReport),
    NotFound,
    /// The caller's expected version did not match; carries the stored version.
    VersionMismatch { current: i64 },
}
