use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::service::{MatchReportRequest, MatchResultResponse, RankingService};
use crate::shared::{AppError, AppState};

/// HTTP handler for reporting a match result
///
/// POST /player/:player_id/game-result
/// Applies the result to the player and returns the rating/experience
/// changes plus any newly unlocked achievements
#[instrument(name = "report_game_result", skip(state, request))]
pub async fn report_game_result(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
    Json(request): Json<MatchReportRequest>,
) -> Result<Json<MatchResultResponse>, AppError> {
    info!(player_id = %player_id, "Reporting match result");

    let service = RankingService::new(Arc::clone(&state.players));
    let response = service.report_match(&player_id, request).await?;

    Ok(Json(response))
}
