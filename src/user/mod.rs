pub mod handlers;
pub mod models;
pub mod repository;

pub use models::{PublicUser, User};
pub use repository::{InMemoryUserRepository, UserRepository};
