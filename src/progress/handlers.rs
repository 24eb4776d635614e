use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::instrument;

use super::models::{ProgressRecord, ProgressUpdate};
use crate::shared::{AppError, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertProgressRequest {
    pub user_id: Option<u64>,
    pub game_id: Option<u64>,
    pub score: Option<i64>,
    pub level: Option<u32>,
    pub status: Option<String>,
}

/// HTTP handler for reading a user's progress in a game
///
/// GET /progress/:user_id/:game_id
#[instrument(name = "get_progress", skip(state))]
pub async fn get_progress(
    State(state): State<AppState>,
    Path((user_id, game_id)): Path<(u64, u64)>,
) -> Result<Json<ProgressRecord>, AppError> {
    state
        .progress
        .get_progress(user_id, game_id)
        .await?
        .map(Json)
        .ok_or_else(|| {
            AppError::NotFound("No progress found for this user and game".to_string())
        })
}

/// HTTP handler for creating or updating progress
///
/// POST /progress
/// Returns 201 when a record was created, 200 when updated
#[instrument(name = "upsert_progress", skip(state, request))]
pub async fn upsert_progress(
    State(state): State<AppState>,
    Json(request): Json<UpsertProgressRequest>,
) -> Result<(StatusCode, Json<ProgressRecord>), AppError> {
    let (user_id, game_id) = match (request.user_id, request.game_id) {
        (Some(user_id), Some(game_id)) => (user_id, game_id),
        _ => {
            return Err(AppError::BadRequest(
                "userId and gameId are required".to_string(),
            ))
        }
    };

    let update = ProgressUpdate {
        score: request.score,
        level: request.level,
        status: request.status,
    };
    let (record, created) = state
        .progress
        .upsert_progress(user_id, game_id, update)
        .await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(record)))
}
