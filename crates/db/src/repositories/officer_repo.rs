//! Repository for the `officers` table.

use beacon_core::object_id;
use sqlx::PgPool;

use crate::models::officer::{CreateOfficer, Officer};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, badge_number, station, password_hash, created_at, updated_at";

/// Provides CRUD operations for police officers.
pub struct OfficerRepo;

impl OfficerRepo {
    /// Insert a new officer, returning the created row.
    ///
    /// A duplicate badge number surfaces as a unique violation on
    /// `uq_officers_badge_number`.
    pub async fn create(pool: &PgPool, input: &CreateOfficer) -> Result<Officer, sqlx::Error> {
        let query = format!(
            "INSERT INTO officers (id, badge_number, station, password_hash)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Officer>(&query)
            .bind(object_id::generate())
            .bind(&input.badge_number)
            .bind(&input.station)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    /// Find an officer by id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Officer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM officers WHERE id = $1");
        sqlx::query_as::<_, Officer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an officer by badge number.
    pub async fn find_by_badge_number(
        pool: &PgPool,
        badge_number: &str,
    ) -> Result<Option<Officer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM officers WHERE badge_number = $1");
        sqlx::query_as::<_, Officer>(&query)
            .bind(badge_number)
            .fetch_optional(pool)
            .await
    }

    /// Find an officer whose badge number and station both match.
    pub async fn find_by_badge_and_station(
        pool: &PgPool,
        badge_number: &str,
        station: &str,
    ) -> Result<Option<Officer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM officers WHERE badge_number = $1 AND station = $2");
        sqlx::query_as::<_, Officer>(&query)
            .bind(badge_number)
            .bind(station)
            .fetch_optional(pool)
            .await
    }

    /// Replace an officer's password hash. Returns `true` if the row was updated.
    pub async fn update_password(
        pool: &PgPool,
        id: &str,
        password_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE officers SET password_hash = $2 WHERE id = $1")
            .bind(id)
            .bind(password_hash)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
