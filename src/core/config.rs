//! Game configuration.
//!
//! The grid is always `GRID_SIZE` x `GRID_SIZE`. Everything else about a game
//! (seed, item counts, turn budget, names, starting squares) comes from a
//! `GameConfig`, built with chained setters:
//!
//! ```
//! use gem_hunters::core::GameConfig;
//!
//! let config = GameConfig::default()
//!     .with_seed(7)
//!     .with_gems(10)
//!     .with_turn_limit(20);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use super::player::PLAYER_COUNT;
use super::position::Position;
use crate::error::{GameError, Result};

/// Width and height of the board.
pub const GRID_SIZE: usize = 6;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Default number of half-turns before the game ends.
pub const DEFAULT_TURN_LIMIT: u32 = 30;

/// Configuration for a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for gem and obstacle placement.
    pub seed: u64,

    /// Gems placed at the start.
    pub gem_count: usize,

    /// Obstacles placed at the start.
    pub obstacle_count: usize,

    /// Valid moves (half-turns) before the game is over.
    pub turn_limit: u32,

    /// Display names, in turn order.
    pub player_names: [String; PLAYER_COUNT],

    /// Starting squares, in turn order.
    pub starts: [Position; PLAYER_COUNT],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            gem_count: 8,
            obstacle_count: 6,
            turn_limit: DEFAULT_TURN_LIMIT,
            player_names: ["P1".to_string(), "P2".to_string()],
            starts: [Position::new(0, 0), Position::new(5, 5)],
        }
    }
}

impl GameConfig {
    /// Set the placement seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set how many gems are placed.
    #[must_use]
    pub fn with_gems(mut self, count: usize) -> Self {
        self.gem_count = count;
        self
    }

    /// Set how many obstacles are placed.
    #[must_use]
    pub fn with_obstacles(mut self, count: usize) -> Self {
        self.obstacle_count = count;
        self
    }

    /// Set the half-turn budget.
    #[must_use]
    pub fn with_turn_limit(mut self, limit: u32) -> Self {
        self.turn_limit = limit;
        self
    }

    /// Set both players' display names.
    #[must_use]
    pub fn with_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.player_names = [first.into(), second.into()];
        self
    }

    /// Set both players' starting squares.
    #[must_use]
    pub fn with_starts(mut self, first: Position, second: Position) -> Self {
        self.starts = [first, second];
        self
    }

    /// Check that a board can be built from this configuration.
    ///
    /// Random placement retries until it finds an empty cell, so the items
    /// plus both players must fit on the grid.
    pub fn validate(&self) -> Result<()> {
        for start in &self.starts {
            if !in_bounds(*start) {
                return Err(GameError::InvalidConfig(format!(
                    "start {start} is outside the {GRID_SIZE}x{GRID_SIZE} grid"
                )));
            }
        }
        if self.starts[0] == self.starts[1] {
            return Err(GameError::InvalidConfig(
                "players cannot share a starting square".to_string(),
            ));
        }
        if self.player_names.iter().any(|name| name.trim().is_empty()) {
            return Err(GameError::InvalidConfig(
                "player names cannot be empty".to_string(),
            ));
        }

        let needed = self
            .gem_count
            .checked_add(self.obstacle_count)
            .and_then(|items| items.checked_add(PLAYER_COUNT));
        if needed.map_or(true, |needed| needed > CELL_COUNT) {
            return Err(GameError::InvalidConfig(format!(
                "{} gems and {} obstacles do not fit next to {PLAYER_COUNT} players on {CELL_COUNT} cells",
                self.gem_count, self.obstacle_count
            )));
        }
        Ok(())
    }
}

/// Is `pos` on the grid?
#[must_use]
pub fn in_bounds(pos: Position) -> bool {
    let size = GRID_SIZE as i32;
    (0..size).contains(&pos.x) && (0..size).contains(&pos.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();

        assert_eq!(config.turn_limit, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_setters() {
        let config = GameConfig::default()
            .with_seed(1)
            .with_gems(3)
            .with_obstacles(4)
            .with_turn_limit(10)
            .with_names("Ada", "Bo")
            .with_starts(Position::new(1, 1), Position::new(4, 4));

        assert_eq!(config.seed, 1);
        assert_eq!(config.gem_count, 3);
        assert_eq!(config.obstacle_count, 4);
        assert_eq!(config.turn_limit, 10);
        assert_eq!(config.player_names, ["Ada".to_string(), "Bo".to_string()]);
        assert_eq!(config.starts[1], Position::new(4, 4));
    }

    #[test]
    fn test_rejects_overfull_board() {
        assert!(GameConfig::default().with_gems(20).with_obstacles(14).validate().is_ok());

        let err = GameConfig::default()
            .with_gems(20)
            .with_obstacles(15)
            .validate()
            .unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_huge_counts() {
        let err = GameConfig::default()
            .with_gems(usize::MAX)
            .with_obstacles(1)
            .validate()
            .unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));

        let err = GameConfig::default()
            .with_gems(usize::MAX - 1)
            .validate()
            .unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_bad_starts() {
        let off_grid = GameConfig::default().with_starts(Position::new(0, 0), Position::new(6, 0));
        assert!(off_grid.validate().is_err());

        let shared = GameConfig::default().with_starts(Position::new(2, 2), Position::new(2, 2));
        assert!(shared.validate().is_err());
    }

    #[test]
    fn test_rejects_blank_name() {
        let config = GameConfig::default().with_names("Ada", "  ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_in_bounds() {
        assert!(in_bounds(Position::new(0, 0)));
        assert!(in_bounds(Position::new(5, 5)));
        assert!(!in_bounds(Position::new(-1, 0)));
        assert!(!in_bounds(Position::new(0, 6)));
    }
}
