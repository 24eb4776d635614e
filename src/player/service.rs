use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

use super::models::Player;
use super::repository::PlayerRepository;
use crate::ranking::rating::{self, GameReport};
use crate::shared::AppError;

/// Wire format for a match report. Required fields arrive as options so the
/// service can reject missing ones with a 400 rather than a decode error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReportRequest {
    pub game_name: Option<String>,
    pub won: Option<bool>,
    /// Game duration in seconds
    pub game_time: Option<u32>,
    pub opponent_rating: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResultResponse {
    pub player: Player,
    pub rating_change: i32,
    pub experience_gained: u32,
    pub leveled_up: bool,
    pub new_achievements: Vec<String>,
}

/// Service for reporting match results into the player store
pub struct RankingService {
    players: Arc<dyn PlayerRepository>,
}

impl RankingService {
    pub fn new(players: Arc<dyn PlayerRepository>) -> Self {
        Self { players }
    }

    /// Validates a match report, applies it to the player and returns the
    /// resulting rating/experience changes plus any achievements unlocked.
    ///
    /// Validation failures leave the player untouched.
    #[instrument(skip(self, request))]
    pub async fn report_match(
        &self,
        player_id: &str,
        request: MatchReportRequest,
    ) -> Result<MatchResultResponse, AppError> {
        let report = Self::validate(request)?;

        let outcome = self
            .players
            .apply_match(player_id, &report)
            .await?
            .ok_or_else(|| AppError::NotFound("Player not found".to_string()))?;

        info!(
            player_id = %player_id,
            game = %report.game_name,
            rating_change = outcome.rating_change,
            "Match reported"
        );

        Ok(MatchResultResponse {
            player: outcome.player,
            rating_change: outcome.rating_change,
            experience_gained: outcome.experience_gained,
            leveled_up: outcome.leveled_up,
            new_achievements: outcome.new_achievements,
        })
    }

    fn validate(request: MatchReportRequest) -> Result<GameReport, AppError> {
        let game_name = match request.game_name {
            Some(name) if !name.trim().is_empty() => name,
            _ => {
                return Err(AppError::BadRequest(
                    "gameName (string) is required".to_string(),
                ))
            }
        };
        let won = request.won.ok_or_else(|| {
            AppError::BadRequest("won (boolean) is required".to_string())
        })?;

        Ok(GameReport {
            game_name,
            won,
            game_time_secs: request.game_time.unwrap_or(rating::DEFAULT_GAME_TIME_SECS),
            opponent_rating: request
                .opponent_rating
                .unwrap_or(rating::DEFAULT_OPPONENT_RATING),
        })
    }
}
