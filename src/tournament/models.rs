use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use uuid::Uuid;

/// Number of participants a tournament accepts unless specified.
pub const DEFAULT_MAX_PLAYERS: u32 = 16;

/// Tournament lifecycle. Only creation and registration are implemented
/// here; nothing advances a tournament past `Registration`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TournamentStatus {
    Registration,
    Active,
    Completed,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TournamentType {
    Elimination,
    RoundRobin,
    Swiss,
}

/// Snapshot of a player taken at registration time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub player_id: String,
    pub player_name: String,
    pub player_rating: i32,
    pub registered_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: String,
    pub name: String,
    pub game: String,
    #[serde(rename = "type")]
    pub tournament_type: TournamentType,
    pub max_players: u32,
    pub entry_fee: u64,
    pub prize_pool: u64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: TournamentStatus,
    pub participants: Vec<Participant>,
    /// Bracket execution is out of scope; this stays empty.
    pub matches: Vec<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
}

impl Tournament {
    /// Creates a tournament open for registration, starting in one day and
    /// running for a week.
    pub fn new(
        name: String,
        game: String,
        tournament_type: TournamentType,
        max_players: u32,
        entry_fee: u64,
        prize_pool: u64,
        created_by: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            game,
            tournament_type,
            max_players,
            entry_fee,
            prize_pool,
            start_date: now + Duration::days(1),
            end_date: now + Duration::days(7),
            status: TournamentStatus::Registration,
            participants: Vec::new(),
            matches: Vec::new(),
            created_at: now,
            created_by,
        }
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_players as usize
    }

    pub fn has_participant(&self, player_id: &str) -> bool {
        self.participants.iter().any(|p| p.player_id == player_id)
    }
}
