use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SessionStatus {
    Active,
    Completed,
}

/// A running or finished play session. Board state for the individual
/// games lives client-side; this record only tracks the lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    pub id: String,
    pub user_id: u64,
    pub game_id: u64,
    pub mode: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub status: SessionStatus,
}

impl GameSession {
    /// Starts a new active session with a generated id.
    pub fn new(user_id: u64, game_id: u64, mode: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            game_id,
            mode,
            start_time: Utc::now(),
            end_time: None,
            status: SessionStatus::Active,
        }
    }
}
