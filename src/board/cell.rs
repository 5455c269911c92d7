//! Contents of a single grid cell.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::PlayerId;

/// What occupies one square of the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Gem,
    Obstacle,
    Occupied(PlayerId),
}

impl Cell {
    /// Can a player step onto this cell?
    ///
    /// Obstacles block, and so does the other player: one occupant per cell.
    #[must_use]
    pub fn is_passable(self) -> bool {
        matches!(self, Cell::Empty | Cell::Gem)
    }

    /// The player standing here, if any.
    #[must_use]
    pub fn occupant(self) -> Option<PlayerId> {
        match self {
            Cell::Occupied(id) => Some(id),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => f.pad("-"),
            Cell::Gem => f.pad("G"),
            Cell::Obstacle => f.pad("O"),
            Cell::Occupied(id) => f.pad(&id.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers() {
        assert_eq!(Cell::Empty.to_string(), "-");
        assert_eq!(Cell::Gem.to_string(), "G");
        assert_eq!(Cell::Obstacle.to_string(), "O");
        assert_eq!(Cell::Occupied(PlayerId::SECOND).to_string(), "P2");
        assert_eq!(format!("{:<3}|", Cell::Gem), "G  |");
    }

    #[test]
    fn test_passable_cells() {
        assert!(Cell::Empty.is_passable());
        assert!(Cell::Gem.is_passable());
        assert!(!Cell::Obstacle.is_passable());
        assert!(!Cell::Occupied(PlayerId::FIRST).is_passable());
    }
}
