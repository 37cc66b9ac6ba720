//! Handlers for citizen registration and login (`/users`).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use beacon_core::error::CoreError;
use beacon_core::registration::{validate_input, CitizenRegistration};
use beacon_core::roles::ROLE_CITIZEN;
use beacon_core::types::DbId;
use beacon_db::models::user::CreateUser;
use beacon_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::handlers::MessageResponse;
use crate::state::AppState;

/// Shared by unknown-email and wrong-password failures.
const INVALID_LOGIN: &str = "Invalid email or password";

/// Request body for `POST /users/login`.
#[derive(Debug, Deserialize)]
pub struct CitizenLogin {
    pub email: String,
    pub password: String,
}

/// Successful citizen login.
#[derive(Debug, Serialize)]
pub struct CitizenLoginResponse {
    pub message: &'static str,
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub user: CitizenInfo,
}

/// Public citizen info embedded in [`CitizenLoginResponse`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CitizenInfo {
    pub id: DbId,
    pub full_name: String,
    pub email: String,
    pub phone: String,
}

/// POST /api/users/register
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<CitizenRegistration>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    validate_input(&input)?;

    if UserRepo::find_by_email(&state.pool, &input.email).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "Email already registered".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            full_name: input.full_name,
            email: input.email,
            phone: input.phone,
            address: input.address,
            date_of_birth: input.date_of_birth,
            emergency_contact: input.emergency_contact,
            emergency_phone: input.emergency_phone,
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = %user.id, "Citizen registered");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Registration successful",
        }),
    ))
}

/// POST /api/users/login
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<CitizenLogin>,
) -> AppResult<Json<CitizenLoginResponse>> {
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(INVALID_LOGIN.into())))?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(INVALID_LOGIN.into())));
    }

    let token = generate_access_token(&user.id, ROLE_CITIZEN, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = %user.id, "Citizen logged in");

    Ok(Json(CitizenLoginResponse {
        message: "Login successful",
        token,
        expires_in: state.config.jwt.expires_in_secs(),
        user: CitizenInfo {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            phone: user.phone,
        },
    }))
}
