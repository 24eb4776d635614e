pub mod handlers;
pub mod models;
pub mod repository;

pub use models::{GameSession, SessionStatus};
pub use repository::{GameSessionRepository, InMemoryGameSessionRepository};
