//! Route definitions for the `/police` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::police;
use crate::state::AppState;

/// Routes mounted at `/police`.
///
/// ```text
/// POST /register  -> register
/// POST /login     -> login
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(police::register))
        .route("/login", post(police::login))
}
