//! Core types: positions, players, RNG, configuration.

pub mod position;
pub mod player;
pub mod rng;
pub mod config;

pub use position::{Direction, Position};
pub use player::{Player, PlayerId, PLAYER_COUNT};
pub use rng::{GameRng, GameRngState};
pub use config::{in_bounds, GameConfig, CELL_COUNT, DEFAULT_TURN_LIMIT, GRID_SIZE};
