//! Route definitions for the `/reports` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::reports;
use crate::state::AppState;

/// Routes mounted at `/reports`.
///
/// ```text
/// GET   /                       -> list
/// POST  /                       -> create (citizen, multipart)
/// GET   /my-reports             -> my_reports (citizen)
/// GET   /{id}/photos/{index}    -> get_photo
/// PATCH /{id}/status            -> update_status (token optional, officer if sent)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(reports::list).post(reports::create))
        .route("/my-reports", get(reports::my_reports))
        .route("/{id}/photos/{index}", get(reports::get_photo))
        .route("/{id}/status", patch(reports::update_status))
}
