use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::player::models::Player;

/// Aggregate statistics for one catalog game, including a cached top-N
/// player snapshot ordered by rating descending.
///
/// Snapshots are seeded once and refreshed out of band; they are not kept
/// consistent with live player mutations, so a player's standing here can
/// lag their live rating.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStat {
    pub game: String,
    pub total_games: u64,
    pub total_players: u64,
    /// Average game duration in minutes
    pub average_game_time: u32,
    pub top_players: Vec<GameTopPlayer>,
}

/// One row of a per-game top-player snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameTopPlayer {
    pub player_id: String,
    pub player_name: String,
    pub rating: i32,
    pub games_played: u32,
    pub win_rate: f64,
}

/// A player entry in the global leaderboard, with its 1-based rank.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedPlayer {
    pub rank: u32,
    #[serde(flatten)]
    pub player: Player,
    pub win_rate: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalLeaderboardResponse {
    pub leaderboard: Vec<RankedPlayer>,
    pub total_players: usize,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameLeaderboardResponse {
    pub game: String,
    pub leaderboard: Vec<GameTopPlayer>,
    pub total_players: u64,
    pub total_games: u64,
    pub average_game_time: u32,
    pub last_updated: DateTime<Utc>,
}

/// A player's standing within one game's cached snapshot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerGameStanding {
    pub rank: u32,
    pub rating: i32,
    pub games_played: u32,
    pub win_rate: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatsResponse {
    #[serde(flatten)]
    pub player: Player,
    pub global_rank: u32,
    pub game_stats: HashMap<String, PlayerGameStanding>,
    pub win_rate: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopGame {
    pub name: String,
    pub total_games: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStatsResponse {
    pub total_players: usize,
    pub active_players: usize,
    pub total_games: u64,
    pub total_tournaments: usize,
    pub top_games: Vec<TopGame>,
    pub average_player_level: f64,
}

/// A player entry in the simulated seasonal ranking.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalPlayer {
    #[serde(flatten)]
    pub player: Player,
    pub seasonal_rating: i32,
    pub seasonal_games: u32,
}

/// Per-game seasonal view: the game's cached snapshot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalGameRanking {
    pub season: String,
    pub game: String,
    pub ranking: Vec<GameTopPlayer>,
    pub total_participants: u64,
}

/// Platform-wide seasonal view over a 30-day window.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalPlatformRanking {
    pub season: String,
    pub ranking: Vec<SeasonalPlayer>,
    pub total_participants: usize,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SeasonalRankingResponse {
    Game(SeasonalGameRanking),
    Platform(SeasonalPlatformRanking),
}
