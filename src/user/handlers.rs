use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::models::PublicUser;
use crate::shared::{AppError, AppState};

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: PublicUser,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: Profile,
}

#[derive(Debug, Serialize)]
pub struct Profile {
    pub id: u64,
    pub username: String,
    pub email: String,
}

fn require_credentials(request: CredentialsRequest) -> Result<(String, String), AppError> {
    match (request.username, request.password) {
        (Some(username), Some(password))
            if !username.trim().is_empty() && !password.is_empty() =>
        {
            Ok((username, password))
        }
        _ => Err(AppError::BadRequest(
            "Username and password are required".to_string(),
        )),
    }
}

/// HTTP handler for user registration
///
/// POST /register
#[instrument(name = "register_user", skip(state, request))]
pub async fn register_user(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let (username, password) = require_credentials(request)?;

    let user = state.users.create_user(&username, &password).await?;
    info!(user_id = user.id, username = %username, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            user: user.public(),
        }),
    ))
}

/// HTTP handler for user login
///
/// POST /login
/// Plain credential comparison; session security is out of scope
#[instrument(name = "login_user", skip(state, request))]
pub async fn login_user(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let (username, password) = require_credentials(request)?;

    let user = state
        .users
        .get_by_username(&username)
        .await?
        .filter(|u| u.password == password)
        .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;

    Ok(Json(UserResponse {
        user: user.public(),
    }))
}

/// HTTP handler for a user profile
///
/// GET /profile/:username
#[instrument(name = "get_profile", skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<ProfileResponse>, AppError> {
    let user = state
        .users
        .get_by_username(&username)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(ProfileResponse {
        profile: Profile {
            id: user.id,
            email: format!("{}@example.com", user.username),
            username: user.username,
        },
    }))
}
