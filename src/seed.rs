//! Demo data for development and local demos. The production deployment
//! would load real records instead; until then the server boots with a
//! handful of historical figures and per-game stat snapshots.

use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;

use crate::leaderboard::models::{GameStat, GameTopPlayer};
use crate::leaderboard::repository::GameStatsRepository;
use crate::player::models::Player;
use crate::player::repository::PlayerRepository;
use crate::ranking::rating;
use crate::shared::AppError;

const DEMO_PLAYERS: &[(&str, &str, u64, &str)] = &[
    ("1", "Alexander the Great", 15420, "👑"),
    ("2", "Cleopatra VII", 12890, "👸"),
    ("3", "Sun Tzu", 18750, "🥋"),
    ("4", "Joan of Arc", 11200, "⚔️"),
    ("5", "Leonardo da Vinci", 22100, "🎨"),
];

const FAVORITE_GAMES: &[&str] = &["Senet", "Go", "Mancala", "Chaturanga"];

// Pachisi and friends get a snapshot; the Royal Game of Ur launched without
// enough play history to have one.
const SNAPSHOT_GAMES: &[&str] = &[
    "Senet",
    "Go",
    "Mancala",
    "Chaturanga",
    "Patolli",
    "Hanafuda",
    "NineMensMorris",
    "Hnefatafl",
    "Pachisi",
];

const ACHIEVEMENT_POOL: &[&str] = &[
    "first_win",
    "win_streak_5",
    "win_streak_10",
    "games_played_100",
    "master_senet",
    "master_go",
    "master_mancala",
    "level_10",
    "level_20",
];

/// Populates the player and game-stats repositories with demo data.
/// Deterministic for a given RNG seed.
pub async fn seed_demo_data(
    players: &dyn PlayerRepository,
    game_stats: &dyn GameStatsRepository,
    rng: &mut StdRng,
) -> Result<(), AppError> {
    let now = Utc::now();

    for &(id, name, experience, avatar) in DEMO_PLAYERS {
        let games_played = rng.random_range(50..150);
        let games_won = rng.random_range(20..80u32).min(games_played);
        let current_streak = rng.random_range(0..10);
        let best_streak = rng.random_range(5..25).max(current_streak);
        let favorite_game = FAVORITE_GAMES[rng.random_range(0..FAVORITE_GAMES.len())];
        let achievement_count = rng.random_range(2..7);

        let player = Player {
            id: id.to_string(),
            name: name.to_string(),
            level: rating::level_for_experience(experience),
            experience,
            rating: rng.random_range(1200..2200),
            games_played,
            games_won,
            current_streak,
            best_streak,
            favorite_game: favorite_game.to_string(),
            join_date: now - Duration::days(rng.random_range(30..365)),
            last_active: now - Duration::hours(rng.random_range(0..168)),
            achievements: ACHIEVEMENT_POOL[..achievement_count]
                .iter()
                .map(|a| a.to_string())
                .collect(),
            avatar: avatar.to_string(),
        };
        players.insert_player(&player).await?;
    }

    let roster = players.list_players().await?;
    for &game in SNAPSHOT_GAMES {
        let mut shuffled: Vec<&Player> = roster.iter().collect();
        shuffled.shuffle(rng);
        let top_players = shuffled
            .into_iter()
            .take(10)
            .enumerate()
            .map(|(index, player)| GameTopPlayer {
                player_id: player.id.clone(),
                player_name: player.name.clone(),
                rating: 1500 - (index as i32 * 50) + rng.random_range(0..100),
                games_played: rng.random_range(20..70),
                win_rate: (0.9 - index as f64 * 0.05 + rng.random::<f64>() * 0.1).max(0.3),
            })
            .collect();

        game_stats
            .insert_stats(GameStat {
                game: game.to_string(),
                total_games: rng.random_range(5000..15000),
                total_players: rng.random_range(500..1500),
                average_game_time: rng.random_range(10..30),
                top_players,
            })
            .await?;
    }

    info!(
        players = DEMO_PLAYERS.len(),
        games = SNAPSHOT_GAMES.len(),
        "Seeded demo data"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaderboard::repository::InMemoryGameStatsRepository;
    use crate::player::repository::InMemoryPlayerRepository;
    use rand::SeedableRng;

    async fn seeded(seed: u64) -> (InMemoryPlayerRepository, InMemoryGameStatsRepository) {
        let players = InMemoryPlayerRepository::new();
        let game_stats = InMemoryGameStatsRepository::new();
        let mut rng = StdRng::seed_from_u64(seed);
        seed_demo_data(&players, &game_stats, &mut rng)
            .await
            .unwrap();
        (players, game_stats)
    }

    #[tokio::test]
    async fn test_seed_populates_players_and_stats() {
        let (players, game_stats) = seeded(42).await;

        let roster = players.list_players().await.unwrap();
        assert_eq!(roster.len(), 5);
        for player in &roster {
            assert!(player.games_won <= player.games_played);
            assert!(player.best_streak >= player.current_streak);
            assert_eq!(player.level, rating::level_for_experience(player.experience));
            assert!((1200..2200).contains(&player.rating));
            assert!(player.achievements.len() >= 2);
        }

        let stats = game_stats.list_stats().await.unwrap();
        assert_eq!(stats.len(), 9);
        for stat in &stats {
            assert_eq!(stat.top_players.len(), 5);
            for entry in &stat.top_players {
                assert!(entry.win_rate >= 0.3);
            }
        }
    }

    #[tokio::test]
    async fn test_seed_skips_royal_game_of_ur() {
        let (_, game_stats) = seeded(42).await;
        assert!(game_stats
            .get_stats("Royal Game of Ur")
            .await
            .unwrap()
            .is_none());
        assert!(game_stats.get_stats("Senet").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_seed_is_deterministic_for_a_fixed_seed() {
        let (players_a, _) = seeded(7).await;
        let (players_b, _) = seeded(7).await;

        let mut a = players_a.list_players().await.unwrap();
        let mut b = players_b.list_players().await.unwrap();
        a.sort_by(|x, y| x.id.cmp(&y.id));
        b.sort_by(|x, y| x.id.cmp(&y.id));

        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.rating, y.rating);
            assert_eq!(x.games_played, y.games_played);
            assert_eq!(x.favorite_game, y.favorite_game);
        }
    }
}
