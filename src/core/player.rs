//! Player identification and per-player state.
//!
//! ## PlayerId
//!
//! Type-safe identifier for one of the two seats. Also used as the occupant
//! marker on the grid.
//!
//! ## Player
//!
//! Name, position and gem count. A player only knows how to apply a
//! direction to its own position; bounds and obstacles are the board's job.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::position::{Direction, Position};
use crate::error::GameError;

/// Number of seats in a game.
pub const PLAYER_COUNT: usize = 2;

/// Identifier for one of the two players.
///
/// Indices are 0-based: the first player is `PlayerId::FIRST` (shown as `P1`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// The player who moves first.
    pub const FIRST: PlayerId = PlayerId(0);
    /// The player who moves second.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Both players in turn order.
    pub const ALL: [PlayerId; PLAYER_COUNT] = [PlayerId::FIRST, PlayerId::SECOND];

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = GameError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        if usize::from(raw) < PLAYER_COUNT {
            Ok(Self(raw))
        } else {
            Err(GameError::InvalidConfig(format!("no player with index {raw}")))
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0 + 1)
    }
}

/// A player on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
    pub gems: u32,
}

impl Player {
    /// Create a player with no gems.
    pub fn new(id: PlayerId, name: impl Into<String>, position: Position) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            gems: 0,
        }
    }

    /// Move one step. The caller validates the move first.
    pub fn move_in(&mut self, direction: Direction) {
        self.position = self.position.step(direction);
    }

    /// Add one gem to this player's score.
    pub fn collect_gem(&mut self) {
        self.gems += 1;
    }
}
