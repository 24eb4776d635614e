use serde::Serialize;

/// A registered user account. Passwords are stored as provided; real
/// credential handling is outside this service's scope.
#[derive(Debug, Clone)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub password: String,
}

impl User {
    /// The externally visible view of this account.
    pub fn public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            username: self.username.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PublicUser {
    pub id: u64,
    pub username: String,
}
