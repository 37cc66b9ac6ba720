//! Repository for the `locations` table.

use beacon_core::object_id;
use sqlx::PgPool;

use crate::models::location::{CreateLocation, Location};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, camera_name, rtsp_link, location, created_at, updated_at";

/// Provides listing and bulk insert for camera locations.
pub struct LocationRepo;

impl LocationRepo {
    /// List all cameras, most recently registered first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Location>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM locations ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Location>(&query).fetch_all(pool).await
    }

    /// Insert several cameras in one transaction, returning the created rows
    /// in input order.
    pub async fn create_many(
        pool: &PgPool,
        inputs: &[CreateLocation],
    ) -> Result<Vec<Location>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut results = Vec::with_capacity(inputs.len());

        let query = format!(
            "INSERT INTO locations (id, camera_name, rtsp_link, location)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );

        for input in inputs {
            let row = sqlx::query_as::<_, Location>(&query)
                .bind(object_id::generate())
                .bind(input.camera_name.trim())
                .bind(&input.rtsp_link)
                .bind(input.location.trim())
                .fetch_one(&mut *tx)
                .await?;
            results.push(row);
        }

        tx.commit().await?;
        Ok(results)
    }
}
