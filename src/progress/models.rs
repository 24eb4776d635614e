use serde::{Deserialize, Serialize};

/// A user's saved progress in one game, keyed by (user, game).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub user_id: u64,
    pub game_id: u64,
    pub score: i64,
    pub level: u32,
    pub status: String,
}

impl ProgressRecord {
    /// A fresh record with default values, before any update is applied.
    pub fn new(user_id: u64, game_id: u64) -> Self {
        Self {
            user_id,
            game_id,
            score: 0,
            level: 1,
            status: "started".to_string(),
        }
    }
}

/// Partial update applied to a progress record; absent fields are left
/// unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProgressUpdate {
    pub score: Option<i64>,
    pub level: Option<u32>,
    pub status: Option<String>,
}
