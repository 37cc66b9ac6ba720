//! Repository for the `users` table.

use beacon_core::object_id;
use beacon_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, ReportOwner, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, full_name, email, phone, address, date_of_birth, \
                        emergency_contact, emergency_phone, password_hash, created_at, updated_at";

/// Provides CRUD operations for citizen users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// A duplicate email surfaces as a unique violation on `uq_users_email`.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (id, full_name, email, phone, address, date_of_birth,
                                emergency_contact, emergency_phone, password_hash)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(object_id::generate())
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.address)
            .bind(input.date_of_birth)
            .bind(&input.emergency_contact)
            .bind(&input.emergency_phone)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    /// Find a user by id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Fetch the public identity of each listed user in one query.
    pub async fn find_owners(pool: &PgPool, ids: &[DbId]) -> Result<Vec<ReportOwner>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, ReportOwner>(
            "SELECT id, full_name, email FROM users WHERE id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(pool)
        .await
    }

    /// Replace a user's password hash. Returns `true` if the row was updated.
    ///
    /// This is the only write path for `password_hash` after registration.
    pub async fn update_password(
        pool: &PgPool,
        id: &str,
        password_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE users SET password_hash = $2 WHERE id = $1")
            .bind(id)
            .bind(password_hash)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
