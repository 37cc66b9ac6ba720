//! Camera location model and DTOs.

use beacon_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full row from the `locations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(rename = "_id")]
    pub id: DbId,
    #[serde(rename = "camera_name")]
    pub camera_name: String,
    #[serde(rename = "rtsp_link")]
    pub rtsp_link: String,
    pub location: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a camera.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLocation {
    pub camera_name: String,
    pub rtsp_link: String,
    pub location: String,
}
