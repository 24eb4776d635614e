//! Derives newly unlocked achievements from a player's counters.

use crate::player::models::Player;

/// Threshold checks evaluated after every match, in a fixed order.
/// Mastery and collector achievements exist only in the static catalog and
/// are never unlocked here.
const CHECKS: &[(&str, fn(&Player) -> bool)] = &[
    ("first_win", |p| p.games_won >= 1),
    ("win_streak_5", |p| p.current_streak >= 5),
    ("win_streak_10", |p| p.current_streak >= 10),
    ("games_played_100", |p| p.games_played >= 100),
    ("level_10", |p| p.level >= 10),
    ("level_20", |p| p.level >= 20),
];

/// Evaluates all achievement checks against the player's current counters
/// and appends any newly earned ids to the player's achievement list.
///
/// Each achievement fires at most once per player, so running this twice
/// without an intervening match yields an empty second result.
pub fn evaluate(player: &mut Player) -> Vec<String> {
    let mut unlocked = Vec::new();

    for (id, check) in CHECKS {
        if check(player) && !player.has_achievement(id) {
            unlocked.push((*id).to_string());
        }
    }

    player.achievements.extend(unlocked.iter().cloned());
    unlocked
}
