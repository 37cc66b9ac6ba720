//! Handlers for officer registration and login (`/police`).
//!
//! Login requires badge number, station and password. Every credential
//! failure returns the same message so callers cannot probe which badge
//! numbers exist.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use beacon_core::error::CoreError;
use beacon_core::registration::{validate_input, OfficerRegistration};
use beacon_core::roles::ROLE_OFFICER;
use beacon_core::types::DbId;
use beacon_db::models::officer::CreateOfficer;
use beacon_db::repositories::OfficerRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::handlers::MessageResponse;
use crate::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Request body for `POST /police/login`. Fields are optional so a missing one
/// yields a 400 naming all three rather than a deserialization error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficerLogin {
    pub badge_number: Option<String>,
    pub station: Option<String>,
    pub password: Option<String>,
}

/// Successful officer login.
#[derive(Debug, Serialize)]
pub struct OfficerLoginResponse {
    pub token: String,
    pub message: &'static str,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub officer: OfficerInfo,
}

/// Public officer info embedded in [`OfficerLoginResponse`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficerInfo {
    pub id: DbId,
    pub badge_number: String,
    pub station: String,
}

/// POST /api/police/register
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<OfficerRegistration>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    validate_input(&input)?;

    if OfficerRepo::find_by_badge_number(&state.pool, &input.badge_number)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Police officer already registered".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let officer = OfficerRepo::create(
        &state.pool,
        &CreateOfficer {
            badge_number: input.badge_number,
            station: input.station,
            password_hash,
        },
    )
    .await?;

    tracing::info!(officer_id = %officer.id, station = %officer.station, "Officer registered");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Registration successful! Please wait for admin approval.",
        }),
    ))
}

/// POST /api/police/login
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<OfficerLogin>,
) -> AppResult<Json<OfficerLoginResponse>> {
    let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
    let (Some(badge_number), Some(station), Some(password)) = (
        non_empty(input.badge_number),
        non_empty(input.station),
        non_empty(input.password),
    ) else {
        return Err(AppError::Core(CoreError::Validation(
            "Missing required fields. Please provide badge number, station, and password.".into(),
        )));
    };

    let officer = OfficerRepo::find_by_badge_and_station(&state.pool, &badge_number, &station)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into())))?;

    let password_valid = verify_password(&password, &officer.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::warn!(officer_id = %officer.id, "Officer login rejected");
        return Err(AppError::Core(CoreError::Unauthorized(
            INVALID_CREDENTIALS.into(),
        )));
    }

    let token = generate_access_token(&officer.id, ROLE_OFFICER, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(officer_id = %officer.id, "Officer logged in");

    Ok(Json(OfficerLoginResponse {
        token,
        message: "Login successful",
        expires_in: state.config.jwt.expires_in_secs(),
        officer: OfficerInfo {
            id: officer.id,
            badge_number: officer.badge_number,
            station: officer.station,
        },
    }))
}
