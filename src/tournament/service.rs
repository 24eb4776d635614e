use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::models::{Participant, Tournament, TournamentType, DEFAULT_MAX_PLAYERS};
use super::repository::{RegisterOutcome, TournamentRepository};
use crate::player::repository::PlayerRepository;
use crate::shared::AppError;

/// Wire format for tournament creation. Required fields arrive as options
/// so missing ones produce a 400 instead of a decode error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTournamentRequest {
    pub name: Option<String>,
    pub game: Option<String>,
    #[serde(rename = "type")]
    pub tournament_type: Option<TournamentType>,
    pub max_players: Option<u32>,
    pub entry_fee: Option<u64>,
    pub prize_pool: Option<u64>,
    pub created_by: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub player_id: Option<String>,
}

/// Service for tournament lifecycle and registration
pub struct TournamentService {
    tournaments: Arc<dyn TournamentRepository>,
    players: Arc<dyn PlayerRepository>,
}

impl TournamentService {
    pub fn new(
        tournaments: Arc<dyn TournamentRepository>,
        players: Arc<dyn PlayerRepository>,
    ) -> Self {
        Self {
            tournaments,
            players,
        }
    }

    /// Creates a tournament in registration status with defaults filled in.
    #[instrument(skip(self, request))]
    pub async fn create_tournament(
        &self,
        request: CreateTournamentRequest,
    ) -> Result<Tournament, AppError> {
        let name = match request.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(AppError::BadRequest("name is required".to_string())),
        };
        let game = match request.game {
            Some(game) if !game.trim().is_empty() => game,
            _ => return Err(AppError::BadRequest("game is required".to_string())),
        };

        let tournament = Tournament::new(
            name,
            game,
            request.tournament_type.unwrap_or(TournamentType::Elimination),
            request.max_players.unwrap_or(DEFAULT_MAX_PLAYERS),
            request.entry_fee.unwrap_or(0),
            request.prize_pool.unwrap_or(0),
            request.created_by.unwrap_or_else(|| "unknown".to_string()),
        );

        self.tournaments.create_tournament(&tournament).await?;

        info!(
            tournament_id = %tournament.id,
            name = %tournament.name,
            game = %tournament.game,
            "Tournament created"
        );

        Ok(tournament)
    }

    /// Tournaments currently open or running, soonest first.
    #[instrument(skip(self))]
    pub async fn active_tournaments(&self) -> Result<Vec<Tournament>, AppError> {
        self.tournaments.list_active().await
    }

    /// Registers a player, snapshotting their name and rating at
    /// registration time.
    #[instrument(skip(self))]
    pub async fn register_player(
        &self,
        tournament_id: &str,
        player_id: &str,
    ) -> Result<Tournament, AppError> {
        let player = self
            .players
            .get_player(player_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Player not found".to_string()))?;

        let participant = Participant {
            player_id: player.id,
            player_name: player.name,
            player_rating: player.rating,
            registered_at: Utc::now(),
        };

        match self
            .tournaments
            .try_register(tournament_id, participant)
            .await?
        {
            RegisterOutcome::Success(tournament) => {
                info!(
                    tournament_id = %tournament_id,
                    player_id = %player_id,
                    "Player registered"
                );
                Ok(tournament)
            }
            RegisterOutcome::TournamentNotFound => {
                Err(AppError::NotFound("Tournament not found".to_string()))
            }
            RegisterOutcome::RegistrationClosed => Err(AppError::InvalidState(
                "Registration is closed".to_string(),
            )),
            RegisterOutcome::Full => {
                Err(AppError::Capacity("Tournament is full".to_string()))
            }
            RegisterOutcome::AlreadyRegistered => {
                Err(AppError::Conflict("Player already registered".to_string()))
            }
        }
    }
}
