pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

pub use models::Player;
pub use repository::{InMemoryPlayerRepository, PlayerRepository};
pub use service::RankingService;
