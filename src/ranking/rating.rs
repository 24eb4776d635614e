//! ELO-style rating updates and experience/level progression.
//!
//! These functions are pure with respect to everything except the player
//! record passed in, so they can be exercised directly in tests. Callers are
//! responsible for making the surrounding read-modify-write atomic; the
//! in-memory player repository runs them under its store lock.

use chrono::Utc;

use crate::player::models::Player;

/// K-factor controlling the magnitude of rating change per match.
pub const K_FACTOR: f64 = 32.0;

/// Ratings never drop below this floor.
pub const RATING_FLOOR: i32 = 800;

/// Rating assigned to newly created players.
pub const STARTING_RATING: i32 = 1200;

/// Assumed opponent rating when the report does not carry one.
pub const DEFAULT_OPPONENT_RATING: i32 = 1500;

/// Assumed game duration when the report does not carry one (seconds).
pub const DEFAULT_GAME_TIME_SECS: u32 = 900;

/// Experience needed per level.
const EXPERIENCE_PER_LEVEL: u64 = 1000;

/// A single match outcome, as reported by a game client.
#[derive(Debug, Clone)]
pub struct GameReport {
    pub game_name: String,
    pub won: bool,
    pub game_time_secs: u32,
    pub opponent_rating: i32,
}

impl GameReport {
    pub fn new(game_name: impl Into<String>, won: bool) -> Self {
        Self {
            game_name: game_name.into(),
            won,
            game_time_secs: DEFAULT_GAME_TIME_SECS,
            opponent_rating: DEFAULT_OPPONENT_RATING,
        }
    }

    pub fn with_game_time(mut self, secs: u32) -> Self {
        self.game_time_secs = secs;
        self
    }

    pub fn with_opponent_rating(mut self, rating: i32) -> Self {
        self.opponent_rating = rating;
        self
    }
}

/// What a single match did to a player's rating and experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchUpdate {
    pub rating_change: i32,
    pub experience_gained: u32,
    pub leveled_up: bool,
}

/// The level implied by an experience total: one level per 1000 XP,
/// starting at level 1.
pub fn level_for_experience(experience: u64) -> u32 {
    (experience / EXPERIENCE_PER_LEVEL) as u32 + 1
}

/// Applies a match result to a player record in place.
///
/// Updates rating (ELO with a fixed K-factor and an 800 floor), win/loss
/// counters, streaks, experience and the derived level, and stamps
/// `last_active`.
pub fn apply_result(player: &mut Player, report: &GameReport) -> MatchUpdate {
    let expected_score =
        1.0 / (1.0 + 10f64.powf(f64::from(report.opponent_rating - player.rating) / 400.0));
    let actual_score = if report.won { 1.0 } else { 0.0 };
    let rating_change = (K_FACTOR * (actual_score - expected_score)).round() as i32;
    player.rating = (player.rating + rating_change).max(RATING_FLOOR);

    player.games_played += 1;
    if report.won {
        player.games_won += 1;
        player.current_streak += 1;
        player.best_streak = player.best_streak.max(player.current_streak);
    } else {
        player.current_streak = 0;
    }

    let base_exp: u32 = if report.won { 100 } else { 25 };
    let time_bonus = 30u32.saturating_sub(report.game_time_secs / 60);
    let streak_bonus = if player.current_streak > 1 {
        player.current_streak * 10
    } else {
        0
    };
    let experience_gained = base_exp + time_bonus + streak_bonus;

    player.experience += u64::from(experience_gained);
    let new_level = level_for_experience(player.experience);
    let leveled_up = new_level > player.level;
    player.level = new_level;

    player.last_active = Utc::now();

    MatchUpdate {
        rating_change,
        experience_gained,
        leveled_up,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn player_with_rating(rating: i32) -> Player {
        let mut player = Player::new("p-1", "Tester", "X");
        player.rating = rating;
        player
    }

    #[rstest]
    // Even match, win: expected 0.5, change = round(32 * 0.5) = +16.
    #[case(1500, 1500, true, 16, 1516)]
    // Upset win against a much stronger opponent: expected ~0.091, +29.
    #[case(1500, 1900, true, 29, 1529)]
    // Even match, loss.
    #[case(1500, 1500, false, -16, 1484)]
    fn test_elo_rating_change(
        #[case] rating: i32,
        #[case] opponent: i32,
        #[case] won: bool,
        #[case] expected_change: i32,
        #[case] expected_rating: i32,
    ) {
        let mut player = player_with_rating(rating);
        let report = GameReport::new("Go", won).with_opponent_rating(opponent);

        let update = apply_result(&mut player, &report);

        assert_eq!(update.rating_change, expected_change);
        assert_eq!(player.rating, expected_rating);
    }

    #[test]
    fn test_rating_never_drops_below_floor() {
        let mut player = player_with_rating(805);
        let report = GameReport::new("Go", false).with_opponent_rating(1500);

        let update = apply_result(&mut player, &report);

        assert!(update.rating_change < -5);
        assert_eq!(player.rating, RATING_FLOOR);
    }

    #[test]
    fn test_win_updates_counters_and_streaks() {
        let mut player = player_with_rating(1500);
        player.current_streak = 3;
        player.best_streak = 3;

        apply_result(&mut player, &GameReport::new("Senet", true));

        assert_eq!(player.games_played, 1);
        assert_eq!(player.games_won, 1);
        assert_eq!(player.current_streak, 4);
        assert_eq!(player.best_streak, 4);
    }

    #[test]
    fn test_loss_resets_current_streak_but_keeps_best() {
        let mut player = player_with_rating(1500);
        player.current_streak = 6;
        player.best_streak = 6;

        apply_result(&mut player, &GameReport::new("Senet", false));

        assert_eq!(player.current_streak, 0);
        assert_eq!(player.best_streak, 6);
        assert!(player.best_streak >= player.current_streak);
    }

    #[test]
    fn test_experience_win_with_time_bonus() {
        let mut player = player_with_rating(1500);

        // 5 minute game: base 100 + time bonus (30 - 5) = 125. First win of a
        // streak gets no streak bonus.
        let report = GameReport::new("Go", true).with_game_time(300);
        let update = apply_result(&mut player, &report);

        assert_eq!(update.experience_gained, 125);
        assert_eq!(player.experience, 125);
    }

    #[test]
    fn test_experience_streak_bonus() {
        let mut player = player_with_rating(1500);
        player.current_streak = 2;
        player.best_streak = 2;

        // Streak reaches 3: base 100 + time bonus (30 - 15) + streak 30 = 145.
        let update = apply_result(&mut player, &GameReport::new("Go", true));

        assert_eq!(update.experience_gained, 145);
    }

    #[test]
    fn test_long_game_has_no_time_bonus() {
        let mut player = player_with_rating(1500);

        // 45 minute loss: base 25, bonus saturates at zero.
        let report = GameReport::new("Go", false).with_game_time(2700);
        let update = apply_result(&mut player, &report);

        assert_eq!(update.experience_gained, 25);
    }

    #[test]
    fn test_level_is_derived_from_experience() {
        let mut player = player_with_rating(1500);
        player.experience = 950;

        let update = apply_result(&mut player, &GameReport::new("Go", true));

        assert!(update.leveled_up);
        assert_eq!(player.level, level_for_experience(player.experience));
        assert_eq!(player.level, 2);
    }

    #[rstest]
    #[case(0, 1)]
    #[case(999, 1)]
    #[case(1000, 2)]
    #[case(15420, 16)]
    fn test_level_for_experience(#[case] experience: u64, #[case] expected: u32) {
        assert_eq!(level_for_experience(experience), expected);
    }
}
