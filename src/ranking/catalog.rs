//! Static achievement catalog exposed over the API.

use serde::Serialize;

/// A catalog entry describing an achievement players can earn.
#[derive(Debug, Clone, Serialize)]
pub struct AchievementInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub rarity: &'static str,
}

/// All achievements known to the platform. The threshold-based entries are
/// granted by `achievements::evaluate`; mastery and collector entries are
/// catalog-only.
pub const ACHIEVEMENTS: &[AchievementInfo] = &[
    AchievementInfo {
        id: "first_win",
        name: "First Victory",
        description: "Win your first game",
        icon: "\u{1F3C6}",
        rarity: "common",
    },
    AchievementInfo {
        id: "win_streak_5",
        name: "Streak of 5",
        description: "Win 5 games in a row",
        icon: "\u{1F525}",
        rarity: "uncommon",
    },
    AchievementInfo {
        id: "win_streak_10",
        name: "Streak of 10",
        description: "Win 10 games in a row",
        icon: "\u{26A1}",
        rarity: "rare",
    },
    AchievementInfo {
        id: "games_played_100",
        name: "Veteran",
        description: "Play 100 games",
        icon: "\u{1F396}\u{FE0F}",
        rarity: "uncommon",
    },
    AchievementInfo {
        id: "level_10",
        name: "Explorer",
        description: "Reach level 10",
        icon: "\u{1F31F}",
        rarity: "common",
    },
    AchievementInfo {
        id: "level_20",
        name: "Adventurer",
        description: "Reach level 20",
        icon: "\u{2B50}",
        rarity: "uncommon",
    },
    AchievementInfo {
        id: "master_senet",
        name: "Senet Master",
        description: "Win 10 games of Senet",
        icon: "\u{1F3FA}",
        rarity: "rare",
    },
    AchievementInfo {
        id: "master_go",
        name: "Go Master",
        description: "Win 10 games of Go",
        icon: "\u{26AB}",
        rarity: "rare",
    },
    AchievementInfo {
        id: "master_mancala",
        name: "Mancala Master",
        description: "Win 10 games of Mancala",
        icon: "\u{1F330}",
        rarity: "rare",
    },
    AchievementInfo {
        id: "collector",
        name: "Collector",
        description: "Play every available game",
        icon: "\u{1F4DA}",
        rarity: "legendary",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_ten_unique_entries() {
        assert_eq!(ACHIEVEMENTS.len(), 10);

        let ids: std::collections::HashSet<&str> =
            ACHIEVEMENTS.iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), 10);
    }
}
