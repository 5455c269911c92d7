//! Grid coordinates and movement directions.
//!
//! `Position` is signed on purpose: a move is applied without clamping and
//! the board decides whether the result is still on the grid.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GameError;

/// A grid coordinate. `x` is the column, `y` is the row (row 0 is the top).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position one step away in `direction`. Never clamped.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four cardinal moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in prompt order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Column and row delta for this direction.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The key a player types for this direction.
    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }

    /// Map a single key to a direction, ignoring case.
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_uppercase() {
            'U' => Some(Direction::Up),
            'D' => Some(Direction::Down),
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Direction {
    type Err = GameError;

    /// Parse one line of player input. Surrounding whitespace is ignored;
    /// what remains must be exactly one direction key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(key), None) => Direction::from_key(key)
                .ok_or_else(|| GameError::UnrecognizedInput(trimmed.to_string())),
            _ => Err(GameError::UnrecognizedInput(trimmed.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_applies_delta() {
        let origin = Position::new(2, 3);

        assert_eq!(origin.step(Direction::Up), Position::new(2, 2));
        assert_eq!(origin.step(Direction::Down), Position::new(2, 4));
        assert_eq!(origin.step(Direction::Left), Position::new(1, 3));
        assert_eq!(origin.step(Direction::Right), Position::new(3, 3));
    }

    #[test]
    fn test_step_is_not_clamped() {
        let corner = Position::new(0, 0);

        assert_eq!(corner.step(Direction::Up), Position::new(0, -1));
        assert_eq!(corner.step(Direction::Left), Position::new(-1, 0));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("u".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!("D".parse::<Direction>().unwrap(), Direction::Down);
        assert_eq!("  l\n".parse::<Direction>().unwrap(), Direction::Left);
        assert_eq!("R\r\n".parse::<Direction>().unwrap(), Direction::Right);
    }

    #[test]
    fn test_parse_rejects_other_input() {
        for input in ["", "   ", "x", "up", "UD", "5"] {
            let err = input.parse::<Direction>().unwrap_err();
            assert!(matches!(err, GameError::UnrecognizedInput(_)), "{input:?}");
        }
    }

    #[test]
    fn test_key_round_trips() {
        for direction in Direction::ALL {
            assert_eq!(Direction::from_key(direction.key()), Some(direction));
        }
    }
}
