//! Fixed game catalog. Plain data, no algorithmic content.

pub mod handlers;

use serde::Serialize;

/// A catalog entry for one of the platform's games.
#[derive(Debug, Clone, Serialize)]
pub struct GameInfo {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

pub const GAMES: &[GameInfo] = &[
    GameInfo {
        id: 1,
        name: "Senet",
        description: "The game of the dead from Ancient Egypt.",
        category: "board_game",
    },
    GameInfo {
        id: 2,
        name: "Go",
        description: "Ancient territorial strategy from Asia.",
        category: "board_game",
    },
    GameInfo {
        id: 3,
        name: "Mancala",
        description: "Seed-sowing strategy game from Africa.",
        category: "board_game",
    },
    GameInfo {
        id: 4,
        name: "Chaturanga",
        description: "The Indian ancestor of chess.",
        category: "board_game",
    },
    GameInfo {
        id: 5,
        name: "Patolli",
        description: "Sacred Aztec game of chance.",
        category: "board_game",
    },
    GameInfo {
        id: 6,
        name: "Hanafuda",
        description: "Traditional Japanese flower cards.",
        category: "card_game",
    },
    GameInfo {
        id: 7,
        name: "Nine Men's Morris",
        description: "Strategic alignment from medieval Europe.",
        category: "board_game",
    },
    GameInfo {
        id: 8,
        name: "Hnefatafl",
        description: "The Viking king's defense.",
        category: "board_game",
    },
    GameInfo {
        id: 9,
        name: "Pachisi",
        description: "The royal race game of India.",
        category: "board_game",
    },
    GameInfo {
        id: 10,
        name: "Royal Game of Ur",
        description: "The royal race game of Mesopotamia.",
        category: "board_game",
    },
];

pub fn find_game(id: u32) -> Option<&'static GameInfo> {
    GAMES.iter().find(|g| g.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_ten_games_with_unique_ids() {
        assert_eq!(GAMES.len(), 10);
        let ids: std::collections::HashSet<u32> = GAMES.iter().map(|g| g.id).collect();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_find_game() {
        assert_eq!(find_game(2).unwrap().name, "Go");
        assert!(find_game(99).is_none());
    }
}
