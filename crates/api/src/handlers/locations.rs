//! Handler for camera locations (`/locations`).

use axum::extract::State;
use axum::Json;
use beacon_db::models::location::Location;
use beacon_db::repositories::LocationRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/locations
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Location>>> {
    let locations = LocationRepo::list(&state.pool).await?;
    Ok(Json(locations))
}
