use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use super::models::Player;
use crate::ranking::{achievements, rating, GameReport};
use crate::shared::AppError;

/// Everything a single match did to a player, reported back to the caller.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    /// The player record after the update.
    pub player: Player,
    pub rating_change: i32,
    pub experience_gained: u32,
    pub leveled_up: bool,
    pub new_achievements: Vec<String>,
}

/// Trait for player store operations
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    async fn insert_player(&self, player: &Player) -> Result<(), AppError>;
    async fn get_player(&self, player_id: &str) -> Result<Option<Player>, AppError>;
    async fn list_players(&self) -> Result<Vec<Player>, AppError>;
    async fn count_players(&self) -> Result<usize, AppError>;

    /// Atomically applies a match result to a player: rating, counters,
    /// experience and achievement derivation all run as one unit under the
    /// store lock, so two concurrent reports for the same player cannot
    /// interleave and lose updates.
    ///
    /// Returns `None` when the player is unknown; nothing is mutated in that
    /// case.
    async fn apply_match(
        &self,
        player_id: &str,
        report: &GameReport,
    ) -> Result<Option<MatchOutcome>, AppError>;
}

/// In-memory implementation of PlayerRepository
pub struct InMemoryPlayerRepository {
    players: RwLock<HashMap<String, Player>>,
}

impl Default for InMemoryPlayerRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryPlayerRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            players: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    #[instrument(skip(self, player))]
    async fn insert_player(&self, player: &Player) -> Result<(), AppError> {
        let mut players = self.players.write().await;
        if players.contains_key(&player.id) {
            warn!(player_id = %player.id, "Player already exists in store");
            return Err(AppError::Conflict("Player already exists".to_string()));
        }
        players.insert(player.id.clone(), player.clone());

        debug!(player_id = %player.id, name = %player.name, "Player inserted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_player(&self, player_id: &str) -> Result<Option<Player>, AppError> {
        let players = self.players.read().await;
        Ok(players.get(player_id).cloned())
    }

    #[instrument(skip(self))]
    async fn list_players(&self) -> Result<Vec<Player>, AppError> {
        let players = self.players.read().await;
        Ok(players.values().cloned().collect())
    }

    #[instrument(skip(self))]
    async fn count_players(&self) -> Result<usize, AppError> {
        let players = self.players.read().await;
        Ok(players.len())
    }

    #[instrument(skip(self, report), fields(game = %report.game_name, won = report.won))]
    async fn apply_match(
        &self,
        player_id: &str,
        report: &GameReport,
    ) -> Result<Option<MatchOutcome>, AppError> {
        let mut players = self.players.write().await;

        let player = match players.get_mut(player_id) {
            Some(player) => player,
            None => {
                debug!(player_id = %player_id, "Player not found for match report");
                return Ok(None);
            }
        };

        // Rating, counters and achievements update under the same write
        // lock so the whole report is one atomic unit.
        let update = rating::apply_result(player, report);
        let new_achievements = achievements::evaluate(player);

        info!(
            player_id = %player_id,
            rating_change = update.rating_change,
            experience_gained = update.experience_gained,
            leveled_up = update.leveled_up,
            new_achievements = new_achievements.len(),
            "Match result applied"
        );

        Ok(Some(MatchOutcome {
            player: player.clone(),
            rating_change: update.rating_change,
            experience_gained: update.experience_gained,
            leveled_up: update.leveled_up,
            new_achievements,
        }))
    }
}
