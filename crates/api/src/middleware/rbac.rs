//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role does not
//! match. Use these in route handlers to enforce authorization at the type
//! level.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use beacon_core::error::CoreError;
use beacon_core::roles::{ROLE_CITIZEN, ROLE_OFFICER};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `citizen` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn file_report(RequireCitizen(user): RequireCitizen) -> AppResult<Json<()>> {
///     // user.user_id is a citizen id here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireCitizen(pub AuthUser);

impl FromRequestParts<AppState> for RequireCitizen {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_CITIZEN {
            return Err(AppError::Core(CoreError::Forbidden(
                "Citizen account required".into(),
            )));
        }
        Ok(RequireCitizen(user))
    }
}

/// Requires the `officer` role. Rejects with 403 Forbidden otherwise.
pub struct RequireOfficer(pub AuthUser);

impl FromRequestParts<AppState> for RequireOfficer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_OFFICER {
            return Err(AppError::Core(CoreError::Forbidden(
                "Police officer account required".into(),
            )));
        }
        Ok(RequireOfficer(user))
    }
}

/// Accepts anonymous requests, but when an `Authorization` header is present
/// it must carry a valid officer token (401 if invalid, 403 for other roles).
pub struct OptionalOfficer(pub Option<AuthUser>);

impl FromRequestParts<AppState> for OptionalOfficer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if !parts.headers.contains_key(AUTHORIZATION) {
            return Ok(OptionalOfficer(None));
        }
        let RequireOfficer(user) = RequireOfficer::from_request_parts(parts, state).await?;
        Ok(OptionalOfficer(Some(user)))
    }
}
