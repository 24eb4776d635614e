use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rand::rngs::StdRng;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::leaderboard::repository::GameStatsRepository;
use crate::player::repository::PlayerRepository;
use crate::progress::repository::ProgressRepository;
use crate::session::repository::GameSessionRepository;
use crate::tournament::repository::TournamentRepository;
use crate::user::repository::UserRepository;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub players: Arc<dyn PlayerRepository>,
    pub game_stats: Arc<dyn GameStatsRepository>,
    pub tournaments: Arc<dyn TournamentRepository>,
    pub users: Arc<dyn UserRepository>,
    pub progress: Arc<dyn ProgressRepository>,
    pub sessions: Arc<dyn GameSessionRepository>,
    /// Randomness source for seasonal rankings. Injected so tests can seed it.
    pub seasonal_rng: Arc<Mutex<StdRng>>,
}

impl AppState {
    pub fn new(
        players: Arc<dyn PlayerRepository>,
        game_stats: Arc<dyn GameStatsRepository>,
        tournaments: Arc<dyn TournamentRepository>,
        users: Arc<dyn UserRepository>,
        progress: Arc<dyn ProgressRepository>,
        sessions: Arc<dyn GameSessionRepository>,
        seasonal_rng: StdRng,
    ) -> Self {
        Self {
            players,
            game_stats,
            tournaments,
            users,
            progress,
            sessions,
            seasonal_rng: Arc::new(Mutex::new(seasonal_rng)),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("At capacity: {0}")]
    Capacity(String),

    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            AppError::InvalidState(msg) => (StatusCode::CONFLICT, msg),
            AppError::Capacity(msg) => (StatusCode::CONFLICT, msg),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
pub mod test_utils {
    use super::*;
    use crate::leaderboard::repository::InMemoryGameStatsRepository;
    use crate::player::repository::InMemoryPlayerRepository;
    use crate::progress::repository::InMemoryProgressRepository;
    use crate::session::repository::InMemoryGameSessionRepository;
    use crate::tournament::repository::InMemoryTournamentRepository;
    use crate::user::repository::InMemoryUserRepository;
    use rand::SeedableRng;

    /// Builder for creating AppState with overrides for testing.
    /// Every repository defaults to a fresh in-memory instance and the
    /// seasonal RNG defaults to a fixed seed so tests are reproducible.
    pub struct AppStateBuilder {
        players: Option<Arc<dyn PlayerRepository>>,
        game_stats: Option<Arc<dyn GameStatsRepository>>,
        tournaments: Option<Arc<dyn TournamentRepository>>,
        seed: u64,
    }

    impl AppStateBuilder {
        pub fn new() -> Self {
            Self {
                players: None,
                game_stats: None,
                tournaments: None,
                seed: 0,
            }
        }

        pub fn with_players(mut self, repo: Arc<dyn PlayerRepository>) -> Self {
            self.players = Some(repo);
            self
        }

        pub fn with_game_stats(mut self, repo: Arc<dyn GameStatsRepository>) -> Self {
            self.game_stats = Some(repo);
            self
        }

        pub fn with_tournaments(mut self, repo: Arc<dyn TournamentRepository>) -> Self {
            self.tournaments = Some(repo);
            self
        }

        pub fn with_seed(mut self, seed: u64) -> Self {
            self.seed = seed;
            self
        }

        pub fn build(self) -> AppState {
            AppState::new(
                self.players
                    .unwrap_or_else(|| Arc::new(InMemoryPlayerRepository::new())),
                self.game_stats
                    .unwrap_or_else(|| Arc::new(InMemoryGameStatsRepository::new())),
                self.tournaments
                    .unwrap_or_else(|| Arc::new(InMemoryTournamentRepository::new())),
                Arc::new(InMemoryUserRepository::new()),
                Arc::new(InMemoryProgressRepository::new()),
                Arc::new(InMemoryGameSessionRepository::new()),
                StdRng::seed_from_u64(self.seed),
            )
        }
    }

    impl Default for AppStateBuilder {
        fn default() -> Self {
            Self::new()
        }
    }
}
