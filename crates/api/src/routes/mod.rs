pub mod alerts;
pub mod health;
pub mod locations;
pub mod police;
pub mod reports;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users/register                     citizen sign-up (public)
/// /users/login                        citizen login (public)
///
/// /police/register                    officer sign-up (public)
/// /police/login                       officer login (public)
///
/// /reports                            list (public), submit (citizen, multipart)
/// /reports/my-reports                 caller's reports (citizen)
/// /reports/{id}/photos/{index}        photo bytes (public)
/// /reports/{id}/status                status change (PATCH; open, officer if token sent)
///
/// /alerts                             enriched recognition alerts (public)
///
/// /locations                          camera registry (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", users::router())
        .nest("/police", police::router())
        .nest("/reports", reports::router())
        .nest("/alerts", alerts::router())
        .nest("/locations", locations::router())
}
