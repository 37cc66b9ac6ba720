/// Document identifiers are 24-character lowercase hex strings.
///
/// See [`crate::object_id`] for generation and format checks.
pub type DbId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
