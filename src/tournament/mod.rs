pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

pub use models::{Participant, Tournament, TournamentStatus, TournamentType};
pub use repository::{InMemoryTournamentRepository, TournamentRepository};
pub use service::TournamentService;
