use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use super::models::User;
use crate::shared::AppError;

/// Trait for the user registry
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates a user with the next sequential id. Usernames are unique;
    /// the check and insert happen under one lock.
    async fn create_user(&self, username: &str, password: &str) -> Result<User, AppError>;
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
}

/// In-memory implementation of UserRepository
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    #[instrument(skip(self, password))]
    async fn create_user(&self, username: &str, password: &str) -> Result<User, AppError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.username == username) {
            warn!(username = %username, "Username already taken");
            return Err(AppError::Conflict("Username already exists".to_string()));
        }

        let user = User {
            id: users.len() as u64 + 1,
            username: username.to_string(),
            password: password.to_string(),
        };
        users.push(user.clone());

        debug!(user_id = user.id, username = %username, "User registered");
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }
}
