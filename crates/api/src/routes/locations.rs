use axum::routing::get;
use axum::Router;

use crate::handlers::locations;
use crate::state::AppState;

/// Routes mounted at `/locations`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(locations::list))
}
