//! # gem-hunters
//!
//! A two-player, turn-based gem collecting game on a fixed 6x6 grid.
//!
//! Players take turns moving one square up, down, left or right. Stepping
//! onto a gem collects it; obstacles, the grid edge and the other player
//! block movement. After a fixed number of half-turns (30 by default) the
//! player holding more gems wins, or the game is a tie.
//!
//! ## Design
//!
//! - **Single source of truth**: the grid cells record where players, gems
//!   and obstacles are. Rendering reads cells only.
//! - **Validate, then mutate**: `Board::is_valid_move` is checked before a
//!   move is applied, so `Player` never needs to know the board size.
//! - **Deterministic**: placement draws from a seeded `GameRng`, so a seed
//!   reproduces a game exactly.
//!
//! ## Modules
//!
//! - `core`: positions, directions, players, RNG, configuration
//! - `board`: cells, grid, and the `Board` that owns them
//! - `rules`: winner determination
//! - `game`: the turn state machine and the console driver
//!
//! ```
//! use gem_hunters::{Direction, Game, GameConfig};
//!
//! let mut game = Game::new(&GameConfig::default().with_seed(5)).unwrap();
//! let moved = Direction::ALL
//!     .into_iter()
//!     .any(|d| game.play_turn(d).is_ok());
//! assert_eq!(moved, game.turns_taken() == 1);
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod game;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Direction, GameConfig, GameRng, GameRngState, Player, PlayerId, Position, GRID_SIZE,
};
pub use crate::board::{Board, Cell, CellCounts, Grid};
pub use crate::rules::GameResult;
pub use crate::game::{Console, Game, MoveRecord};
pub use crate::error::{GameError, Result};
