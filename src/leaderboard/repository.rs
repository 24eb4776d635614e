use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use super::models::GameStat;
use crate::shared::AppError;

/// Trait for the per-game stats table.
///
/// Entries hold seeded aggregate counters and a cached top-player snapshot;
/// nothing here refreshes them from live player state.
#[async_trait]
pub trait GameStatsRepository: Send + Sync {
    async fn insert_stats(&self, stats: GameStat) -> Result<(), AppError>;
    async fn get_stats(&self, game: &str) -> Result<Option<GameStat>, AppError>;
    async fn list_stats(&self) -> Result<Vec<GameStat>, AppError>;
}

/// In-memory implementation of GameStatsRepository
pub struct InMemoryGameStatsRepository {
    stats: RwLock<HashMap<String, GameStat>>,
}

impl Default for InMemoryGameStatsRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryGameStatsRepository {
    pub fn new() -> Self {
        Self {
            stats: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl GameStatsRepository for InMemoryGameStatsRepository {
    #[instrument(skip(self, stats), fields(game = %stats.game))]
    async fn insert_stats(&self, stats: GameStat) -> Result<(), AppError> {
        let mut table = self.stats.write().await;
        debug!(game = %stats.game, "Storing game stats snapshot");
        table.insert(stats.game.clone(), stats);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_stats(&self, game: &str) -> Result<Option<GameStat>, AppError> {
        let table = self.stats.read().await;
        Ok(table.get(game).cloned())
    }

    #[instrument(skip(self))]
    async fn list_stats(&self) -> Result<Vec<GameStat>, AppError> {
        let table = self.stats.read().await;
        Ok(table.values().cloned().collect())
    }
}
