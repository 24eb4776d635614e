use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ranking::rating;

/// A player's profile and lifetime statistics.
///
/// `level` is always derived from `experience` (one level per 1000 XP,
/// starting at 1) and is never set independently. `achievements` only ever
/// grows; the rating floor and streak invariants are maintained by
/// `ranking::rating::apply_result`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub experience: u64,
    pub rating: i32,
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub best_streak: u32,
    pub favorite_game: String,
    pub join_date: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
    pub achievements: Vec<String>,
    pub avatar: String,
}

impl Player {
    /// Creates a fresh player with default counters and a starting rating.
    pub fn new(id: impl Into<String>, name: impl Into<String>, avatar: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            level: 1,
            experience: 0,
            rating: rating::STARTING_RATING,
            games_played: 0,
            games_won: 0,
            current_streak: 0,
            best_streak: 0,
            favorite_game: String::new(),
            join_date: now,
            last_active: now,
            achievements: Vec::new(),
            avatar: avatar.into(),
        }
    }

    /// Fraction of games won, 0.0 when no games have been played yet.
    pub fn win_rate(&self) -> f64 {
        if self.games_played > 0 {
            f64::from(self.games_won) / f64::from(self.games_played)
        } else {
            0.0
        }
    }

    pub fn has_achievement(&self, achievement_id: &str) -> bool {
        self.achievements.iter().any(|a| a == achievement_id)
    }
}
