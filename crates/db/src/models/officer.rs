//! Police officer entity model and DTOs.

use beacon_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full row from the `officers` table. Never serialized directly.
#[derive(Debug, Clone, FromRow)]
pub struct Officer {
    pub id: DbId,
    pub badge_number: String,
    pub station: String,
    pub password_hash: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new officer. The password must already be hashed.
#[derive(Debug, Clone)]
pub struct CreateOfficer {
    pub badge_number: String,
    pub station: String,
    pub password_hash: String,
}
