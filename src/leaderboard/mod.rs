pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

pub use models::GameStat;
pub use repository::{GameStatsRepository, InMemoryGameStatsRepository};
pub use service::LeaderboardService;
