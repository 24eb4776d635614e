use axum::{extract::Path, Json};
use tracing::instrument;

use super::{find_game, GameInfo, GAMES};
use crate::shared::AppError;

/// HTTP handler for listing the game catalog
///
/// GET /games
#[instrument(name = "list_games")]
pub async fn list_games() -> Json<Vec<GameInfo>> {
    Json(GAMES.to_vec())
}

/// HTTP handler for a single catalog entry
///
/// GET /games/:game_id
#[instrument(name = "get_game")]
pub async fn get_game(Path(game_id): Path<u32>) -> Result<Json<GameInfo>, AppError> {
    find_game(game_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Game not found".to_string()))
}
