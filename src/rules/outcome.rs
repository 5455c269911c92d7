//! Win determination.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Strictly more gems than the other player.
    Winner(PlayerId),
    /// Equal gem counts.
    Tie,
}

impl GameResult {
    /// Compare final gem counts, first player first.
    #[must_use]
    pub fn from_gems(first: u32, second: u32) -> Self {
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::FIRST),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::SECOND),
            std::cmp::Ordering::Equal => GameResult::Tie,
        }
    }

    /// Decide the result from both players' final state.
    #[must_use]
    pub fn decide(players: &[Player; 2]) -> Self {
        Self::from_gems(players[0].gems, players[1].gems)
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}
