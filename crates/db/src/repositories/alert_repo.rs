//! Repository for the `alerts` table.

use beacon_core::object_id;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::alert::{Alert, CreateAlert};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, person_id, location, message, confidence, image_path, status, \
                        \"timestamp\", created_at";

/// Read access to recognition alerts.
pub struct AlertRepo;

impl AlertRepo {
    /// Every alert, newest first by event time. Alerts without a timestamp
    /// sort after all timestamped ones.
    pub async fn list_newest_first(pool: &PgPool) -> Result<Vec<Alert>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM alerts
             ORDER BY \"timestamp\" DESC NULLS LAST, created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Alert>(&query).fetch_all(pool).await
    }

    /// Insert an alert the way the external recognition process does.
    ///
    /// Nothing in the HTTP surface writes alerts; this exists for seeding and
    /// tests.
    pub async fn insert(pool: &PgPool, input: &CreateAlert) -> Result<Alert, sqlx::Error> {
        let query = format!(
            "INSERT INTO alerts (id, person_id, location, message, confidence, image_path,
                                 status, \"timestamp\")
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Alert>(&query)
            .bind(input.id.clone().unwrap_or_else(object_id::generate))
            .bind(input.person_id.clone().map(Json))
            .bind(&input.location)
            .bind(&input.message)
            .bind(input.confidence)
            .bind(&input.image_path)
            .bind(&input.status)
            .bind(input.timestamp)
            .fetch_one(pool)
            .await
    }
}
