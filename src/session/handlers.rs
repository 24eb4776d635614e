use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, instrument};

use super::models::GameSession;
use crate::catalog;
use crate::shared::{AppError, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSessionRequest {
    pub user_id: Option<u64>,
    pub game_id: Option<u64>,
    pub mode: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStateResponse {
    pub session: GameSession,
    /// Board logic is out of scope; a placeholder is returned so clients
    /// have a stable shape to bind against.
    pub game_state: serde_json::Value,
}

/// HTTP handler for starting a game session
///
/// POST /game/start
#[instrument(name = "start_game_session", skip(state, request))]
pub async fn start_game_session(
    State(state): State<AppState>,
    Json(request): Json<StartSessionRequest>,
) -> Result<(StatusCode, Json<GameSession>), AppError> {
    let (user_id, game_id, mode) = match (request.user_id, request.game_id, request.mode) {
        (Some(user_id), Some(game_id), Some(mode)) if !mode.trim().is_empty() => {
            (user_id, game_id, mode)
        }
        _ => {
            return Err(AppError::BadRequest(
                "userId, gameId and mode are required".to_string(),
            ))
        }
    };

    if catalog::find_game(game_id as u32).is_none() {
        return Err(AppError::NotFound("Game not found".to_string()));
    }

    let session = GameSession::new(user_id, game_id, mode);
    state.sessions.create_session(&session).await?;

    info!(session_id = %session.id, user_id, game_id, "Game session started");
    Ok((StatusCode::CREATED, Json(session)))
}

/// HTTP handler for reading a session's state
///
/// GET /game/session/:session_id
#[instrument(name = "get_game_session", skip(state))]
pub async fn get_game_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionStateResponse>, AppError> {
    let session = state
        .sessions
        .get_session(&session_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Game session not found".to_string()))?;

    Ok(Json(SessionStateResponse {
        session,
        game_state: json!({ "board": [], "players": [] }),
    }))
}

/// HTTP handler for finishing a session
///
/// POST /game/end/:session_id
#[instrument(name = "end_game_session", skip(state))]
pub async fn end_game_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<GameSession>, AppError> {
    let session = state
        .sessions
        .end_session(&session_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Game session not found".to_string()))?;

    info!(session_id = %session_id, "Game session ended");
    Ok(Json(session))
}
