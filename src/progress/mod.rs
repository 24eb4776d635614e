pub mod handlers;
pub mod models;
pub mod repository;

pub use models::{ProgressRecord, ProgressUpdate};
pub use repository::{InMemoryProgressRepository, ProgressRepository};
