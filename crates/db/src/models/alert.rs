//! Recognition alert rows (read-only from this system's side).

use beacon_core::alert_enrichment::RawAlert;
use beacon_core::types::Timestamp;
use sqlx::FromRow;
use sqlx::types::Json;

/// Full row from the `alerts` table.
#[derive(Debug, Clone, FromRow)]
pub struct Alert {
    pub id: String,
    pub person_id: Option<Json<serde_json::Value>>,
    pub location: Option<String>,
    pub message: Option<String>,
    pub confidence: Option<f64>,
    pub image_path: Option<String>,
    pub status: Option<String>,
    pub timestamp: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl From<Alert> for RawAlert {
    fn from(row: Alert) -> Self {
        RawAlert {
            id: row.id,
            person_id: row.person_id.map(|Json(v)| v),
            location: row.location,
            message: row.message,
            confidence: row.confidence,
            image_path: row.image_path,
            status: row.status,
            timestamp: row.timestamp,
        }
    }
}

/// DTO for inserting an alert, as the recognition process would.
#[derive(Debug, Clone, Default)]
pub struct CreateAlert {
    pub id: Option<String>,
    pub person_id: Option<serde_json::Value>,
    pub location: Option<String>,
    pub message: Option<String>,
    pub confidence: Option<f64>,
    pub image_path: Option<String>,
    pub status: Option<String>,
    pub timestamp: Option<Timestamp>,
}
