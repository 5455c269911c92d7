//! Game rules that sit above the board: how a finished game is scored.
//!
//! The player with strictly more gems wins; equal counts are a tie.

pub mod outcome;

pub use outcome::GameResult;
