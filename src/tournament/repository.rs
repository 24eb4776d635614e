use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use super::models::{Participant, Tournament, TournamentStatus};
use crate::shared::AppError;

/// Result of attempting to register a player in a tournament
#[derive(Debug, Clone)]
pub enum RegisterOutcome {
    /// Successfully registered, returns updated tournament data
    Success(Tournament),
    /// Tournament does not exist
    TournamentNotFound,
    /// Tournament is no longer accepting registrations
    RegistrationClosed,
    /// Tournament is at capacity
    Full,
    /// Player is already registered
    AlreadyRegistered,
}

/// Trait for tournament registry operations
#[async_trait]
pub trait TournamentRepository: Send + Sync {
    async fn create_tournament(&self, tournament: &Tournament) -> Result<(), AppError>;
    async fn get_tournament(&self, tournament_id: &str) -> Result<Option<Tournament>, AppError>;

    /// Tournaments in registration or active status, start date ascending.
    async fn list_active(&self) -> Result<Vec<Tournament>, AppError>;
    async fn count_tournaments(&self) -> Result<usize, AppError>;

    /// Atomically attempts to register a participant: the status, capacity
    /// and duplicate checks plus the append happen under one lock, so
    /// concurrent registrations cannot exceed `max_players` or register a
    /// player twice.
    async fn try_register(
        &self,
        tournament_id: &str,
        participant: Participant,
    ) -> Result<RegisterOutcome, AppError>;
}

/// In-memory implementation of TournamentRepository
pub struct InMemoryTournamentRepository {
    tournaments: RwLock<HashMap<String, Tournament>>,
}

impl Default for InMemoryTournamentRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryTournamentRepository {
    pub fn new() -> Self {
        Self {
            tournaments: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl TournamentRepository for InMemoryTournamentRepository {
    #[instrument(skip(self, tournament), fields(tournament_id = %tournament.id))]
    async fn create_tournament(&self, tournament: &Tournament) -> Result<(), AppError> {
        let mut tournaments = self.tournaments.write().await;
        if tournaments.contains_key(&tournament.id) {
            warn!(tournament_id = %tournament.id, "Tournament already exists");
            return Err(AppError::Conflict("Tournament already exists".to_string()));
        }
        tournaments.insert(tournament.id.clone(), tournament.clone());

        debug!(tournament_id = %tournament.id, name = %tournament.name, "Tournament stored");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_tournament(&self, tournament_id: &str) -> Result<Option<Tournament>, AppError> {
        let tournaments = self.tournaments.read().await;
        Ok(tournaments.get(tournament_id).cloned())
    }

    #[instrument(skip(self))]
    async fn list_active(&self) -> Result<Vec<Tournament>, AppError> {
        let tournaments = self.tournaments.read().await;
        let mut active: Vec<Tournament> = tournaments
            .values()
            .filter(|t| {
                matches!(
                    t.status,
                    TournamentStatus::Registration | TournamentStatus::Active
                )
            })
            .cloned()
            .collect();
        active.sort_by_key(|t| t.start_date);
        Ok(active)
    }

    #[instrument(skip(self))]
    async fn count_tournaments(&self) -> Result<usize, AppError> {
        let tournaments = self.tournaments.read().await;
        Ok(tournaments.len())
    }

    #[instrument(skip(self, participant), fields(player_id = %participant.player_id))]
    async fn try_register(
        &self,
        tournament_id: &str,
        participant: Participant,
    ) -> Result<RegisterOutcome, AppError> {
        let mut tournaments = self.tournaments.write().await;

        let tournament = match tournaments.get_mut(tournament_id) {
            Some(tournament) => tournament,
            None => {
                debug!(tournament_id = %tournament_id, "Tournament not found");
                return Ok(RegisterOutcome::TournamentNotFound);
            }
        };

        if tournament.status != TournamentStatus::Registration {
            debug!(
                tournament_id = %tournament_id,
                status = %tournament.status,
                "Registration is closed"
            );
            return Ok(RegisterOutcome::RegistrationClosed);
        }

        if tournament.is_full() {
            debug!(
                tournament_id = %tournament_id,
                participants = tournament.participants.len(),
                "Tournament is full"
            );
            return Ok(RegisterOutcome::Full);
        }

        if tournament.has_participant(&participant.player_id) {
            debug!(
                tournament_id = %tournament_id,
                player_id = %participant.player_id,
                "Player already registered"
            );
            return Ok(RegisterOutcome::AlreadyRegistered);
        }

        tournament.participants.push(participant);
        let updated = tournament.clone();

        info!(
            tournament_id = %tournament_id,
            participants = updated.participants.len(),
            max_players = updated.max_players,
            "Player registered in tournament"
        );

        Ok(RegisterOutcome::Success(updated))
    }
}
