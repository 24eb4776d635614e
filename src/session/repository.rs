use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use super::models::{GameSession, SessionStatus};
use crate::shared::AppError;

/// Trait for game session storage
#[async_trait]
pub trait GameSessionRepository: Send + Sync {
    async fn create_session(&self, session: &GameSession) -> Result<(), AppError>;
    async fn get_session(&self, session_id: &str) -> Result<Option<GameSession>, AppError>;

    /// Marks a session completed and stamps its end time. Returns `None`
    /// when the session is unknown.
    async fn end_session(&self, session_id: &str) -> Result<Option<GameSession>, AppError>;
}

/// In-memory implementation of GameSessionRepository
pub struct InMemoryGameSessionRepository {
    sessions: RwLock<HashMap<String, GameSession>>,
}

impl Default for InMemoryGameSessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryGameSessionRepository {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl GameSessionRepository for InMemoryGameSessionRepository {
    #[instrument(skip(self, session), fields(session_id = %session.id))]
    async fn create_session(&self, session: &GameSession) -> Result<(), AppError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id.clone(), session.clone());
        debug!(session_id = %session.id, user_id = session.user_id, "Session started");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_session(&self, session_id: &str) -> Result<Option<GameSession>, AppError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(session_id).cloned())
    }

    #[instrument(skip(self))]
    async fn end_session(&self, session_id: &str) -> Result<Option<GameSession>, AppError> {
        let mut sessions = self.sessions.write().await;
        let session = match sessions.get_mut(session_id) {
            Some(session) => session,
            None => return Ok(None),
        };

        session.status = SessionStatus::Completed;
        session.end_time = Some(Utc::now());

        debug!(session_id = %session_id, "Session completed");
        Ok(Some(session.clone()))
    }
}
