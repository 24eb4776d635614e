use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use super::models::{ProgressRecord, ProgressUpdate};
use crate::shared::AppError;

/// Trait for progress record storage
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    async fn get_progress(
        &self,
        user_id: u64,
        game_id: u64,
    ) -> Result<Option<ProgressRecord>, AppError>;

    /// Applies an update to the (user, game) record, creating it with
    /// defaults first if necessary. Returns the record and whether it was
    /// newly created.
    async fn upsert_progress(
        &self,
        user_id: u64,
        game_id: u64,
        update: ProgressUpdate,
    ) -> Result<(ProgressRecord, bool), AppError>;
}

/// In-memory implementation of ProgressRepository
pub struct InMemoryProgressRepository {
    records: RwLock<HashMap<(u64, u64), ProgressRecord>>,
}

impl Default for InMemoryProgressRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryProgressRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl ProgressRepository for InMemoryProgressRepository {
    #[instrument(skip(self))]
    async fn get_progress(
        &self,
        user_id: u64,
        game_id: u64,
    ) -> Result<Option<ProgressRecord>, AppError> {
        let records = self.records.read().await;
        Ok(records.get(&(user_id, game_id)).cloned())
    }

    #[instrument(skip(self, update))]
    async fn upsert_progress(
        &self,
        user_id: u64,
        game_id: u64,
        update: ProgressUpdate,
    ) -> Result<(ProgressRecord, bool), AppError> {
        let mut records = self.records.write().await;
        let created = !records.contains_key(&(user_id, game_id));
        let record = records
            .entry((user_id, game_id))
            .or_insert_with(|| ProgressRecord::new(user_id, game_id));

        if let Some(score) = update.score {
            record.score = score;
        }
        if let Some(level) = update.level {
            record.level = level;
        }
        if let Some(status) = update.status {
            record.status = status;
        }

        debug!(user_id, game_id, created, "Progress upserted");
        Ok((record.clone(), created))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_upsert_creates_with_defaults() {
        let repo = InMemoryProgressRepository::new();

        let (record, created) = repo
            .upsert_progress(1, 2, ProgressUpdate::default())
            .await
            .unwrap();

        assert!(created);
        assert_eq!(record.score, 0);
        assert_eq!(record.level, 1);
        assert_eq!(record.status, "started");
    }

    #[tokio::test]
    async fn test_upsert_updates_only_provided_fields() {
        let repo = InMemoryProgressRepository::new();
        repo.upsert_progress(
            1,
            2,
            ProgressUpdate {
                score: Some(500),
                level: Some(3),
                status: None,
            },
        )
        .await
        .unwrap();

        let (record, created) = repo
            .upsert_progress(
                1,
                2,
                ProgressUpdate {
                    score: Some(900),
                    level: None,
                    status: None,
                },
            )
            .await
            .unwrap();

        assert!(!created);
        assert_eq!(record.score, 900);
        assert_eq!(record.level, 3);
        assert_eq!(record.status, "started");
    }

    #[tokio::test]
    async fn test_get_missing_progress() {
        let repo = InMemoryProgressRepository::new();
        assert!(repo.get_progress(1, 2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_records_keyed_per_user_and_game() {
        let repo = InMemoryProgressRepository::new();
        repo.upsert_progress(1, 1, ProgressUpdate::default())
            .await
            .unwrap();
        repo.upsert_progress(1, 2, ProgressUpdate::default())
            .await
            .unwrap();

        assert!(repo.get_progress(1, 1).await.unwrap().is_some());
        assert!(repo.get_progress(1, 2).await.unwrap().is_some());
        assert!(repo.get_progress(2, 1).await.unwrap().is_none());
    }
}
