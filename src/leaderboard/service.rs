use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use super::models::{
    GameLeaderboardResponse, GlobalLeaderboardResponse, PlatformStatsResponse, PlayerGameStanding,
    PlayerStatsResponse, RankedPlayer, SeasonalGameRanking, SeasonalPlatformRanking,
    SeasonalPlayer, SeasonalRankingResponse, TopGame,
};
use super::repository::GameStatsRepository;
use crate::player::repository::PlayerRepository;
use crate::tournament::repository::TournamentRepository;
use crate::shared::AppError;

/// Default number of entries returned by leaderboard queries.
pub const DEFAULT_LIMIT: usize = 50;

/// Entries in a per-game seasonal view.
const SEASONAL_GAME_LIMIT: usize = 20;

/// Entries in the platform-wide seasonal view.
const SEASONAL_PLATFORM_LIMIT: usize = 50;

/// Players active within this many days count toward platform stats.
const ACTIVE_WINDOW_DAYS: i64 = 7;

/// Lookback window for the seasonal ranking.
const SEASON_WINDOW_DAYS: i64 = 30;

/// Read-only aggregation over the player store and the per-game stats
/// table. Nothing here mutates player state.
pub struct LeaderboardService {
    players: Arc<dyn PlayerRepository>,
    game_stats: Arc<dyn GameStatsRepository>,
    tournaments: Arc<dyn TournamentRepository>,
    seasonal_rng: Arc<Mutex<StdRng>>,
}

impl LeaderboardService {
    pub fn new(
        players: Arc<dyn PlayerRepository>,
        game_stats: Arc<dyn GameStatsRepository>,
        tournaments: Arc<dyn TournamentRepository>,
        seasonal_rng: Arc<Mutex<StdRng>>,
    ) -> Self {
        Self {
            players,
            game_stats,
            tournaments,
            seasonal_rng,
        }
    }

    /// All players ranked by rating, experience breaking ties.
    #[instrument(skip(self))]
    pub async fn global_leaderboard(
        &self,
        limit: usize,
    ) -> Result<GlobalLeaderboardResponse, AppError> {
        let mut players = self.players.list_players().await?;
        let total_players = players.len();

        players.sort_by(|a, b| {
            b.rating
                .cmp(&a.rating)
                .then_with(|| b.experience.cmp(&a.experience))
        });
        players.truncate(limit);

        let leaderboard = players
            .into_iter()
            .enumerate()
            .map(|(i, player)| RankedPlayer {
                rank: i as u32 + 1,
                win_rate: player.win_rate(),
                player,
            })
            .collect();

        Ok(GlobalLeaderboardResponse {
            leaderboard,
            total_players,
            last_updated: Utc::now(),
        })
    }

    /// The cached snapshot for one game, truncated to `limit`.
    #[instrument(skip(self))]
    pub async fn game_leaderboard(
        &self,
        game_name: &str,
        limit: usize,
    ) -> Result<GameLeaderboardResponse, AppError> {
        let stats = self
            .game_stats
            .get_stats(game_name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Game {game_name} not found")))?;

        let mut leaderboard = stats.top_players;
        leaderboard.truncate(limit);

        Ok(GameLeaderboardResponse {
            game: stats.game,
            leaderboard,
            total_players: stats.total_players,
            total_games: stats.total_games,
            average_game_time: stats.average_game_time,
            last_updated: Utc::now(),
        })
    }

    /// One player's record merged with their global rank and their standing
    /// in each game's cached snapshot. Games where the player is outside the
    /// snapshot contribute no entry.
    #[instrument(skip(self))]
    pub async fn player_stats(&self, player_id: &str) -> Result<PlayerStatsResponse, AppError> {
        let player = self
            .players
            .get_player(player_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Player not found".to_string()))?;

        let mut all_players = self.players.list_players().await?;
        all_players.sort_by(|a, b| b.rating.cmp(&a.rating));
        let global_rank = all_players
            .iter()
            .position(|p| p.id == player_id)
            .map(|i| i as u32 + 1)
            .unwrap_or(0);

        let mut game_stats = HashMap::new();
        for stats in self.game_stats.list_stats().await? {
            if let Some(pos) = stats.top_players.iter().position(|p| p.player_id == player_id) {
                let entry = &stats.top_players[pos];
                game_stats.insert(
                    stats.game.clone(),
                    PlayerGameStanding {
                        rank: pos as u32 + 1,
                        rating: entry.rating,
                        games_played: entry.games_played,
                        win_rate: entry.win_rate,
                    },
                );
            }
        }

        debug!(
            player_id = %player_id,
            global_rank,
            games_ranked = game_stats.len(),
            "Computed player stats"
        );

        Ok(PlayerStatsResponse {
            global_rank,
            game_stats,
            win_rate: player.win_rate(),
            player,
        })
    }

    /// Platform-wide summary counters.
    #[instrument(skip(self))]
    pub async fn platform_stats(&self) -> Result<PlatformStatsResponse, AppError> {
        let players = self.players.list_players().await?;
        let total_players = players.len();

        let now = Utc::now();
        let active_players = players
            .iter()
            .filter(|p| now - p.last_active <= Duration::days(ACTIVE_WINDOW_DAYS))
            .count();

        let mut game_stats = self.game_stats.list_stats().await?;
        let total_games: u64 = game_stats.iter().map(|s| s.total_games).sum();

        game_stats.sort_by(|a, b| b.total_games.cmp(&a.total_games));
        let top_games = game_stats
            .into_iter()
            .take(5)
            .map(|s| TopGame {
                name: s.game,
                total_games: s.total_games,
            })
            .collect();

        let average_player_level = if total_players > 0 {
            let sum: u64 = players.iter().map(|p| u64::from(p.level)).sum();
            (sum as f64 / total_players as f64 * 10.0).round() / 10.0
        } else {
            0.0
        };

        Ok(PlatformStatsResponse {
            total_players,
            active_players,
            total_games,
            total_tournaments: self.tournaments.count_tournaments().await?,
            top_games,
            average_player_level,
        })
    }

    /// Time-windowed ranking view. For a known game this is the cached
    /// snapshot; otherwise a simulated seasonal rating (live rating
    /// perturbed by up to +/-50) drawn from the injected RNG.
    #[instrument(skip(self))]
    pub async fn seasonal_ranking(
        &self,
        season: &str,
        game: Option<&str>,
    ) -> Result<SeasonalRankingResponse, AppError> {
        if let Some(game_name) = game {
            if let Some(stats) = self.game_stats.get_stats(game_name).await? {
                let mut ranking = stats.top_players;
                ranking.truncate(SEASONAL_GAME_LIMIT);
                return Ok(SeasonalRankingResponse::Game(SeasonalGameRanking {
                    season: season.to_string(),
                    game: stats.game,
                    ranking,
                    total_participants: stats.total_players,
                }));
            }
            // Unknown games fall through to the platform-wide view.
        }

        let players = self.players.list_players().await?;
        let total_participants = players.len();

        let mut ranking: Vec<SeasonalPlayer> = {
            let mut rng = self.seasonal_rng.lock().await;
            players
                .into_iter()
                .map(|player| SeasonalPlayer {
                    seasonal_rating: player.rating + rng.random_range(-50..50),
                    seasonal_games: rng.random_range(5..25),
                    player,
                })
                .collect()
        };
        ranking.sort_by(|a, b| b.seasonal_rating.cmp(&a.seasonal_rating));
        ranking.truncate(SEASONAL_PLATFORM_LIMIT);

        let now = Utc::now();
        Ok(SeasonalRankingResponse::Platform(SeasonalPlatformRanking {
            season: season.to_string(),
            ranking,
            total_participants,
            start_date: now - Duration::days(SEASON_WINDOW_DAYS),
            end_date: now,
        }))
    }
}
