//! Fixed-size grid of cells.
//!
//! Cells are stored row-major: `cells[y][x]`. Lookups take a `Position` and
//! return `None` off the grid instead of panicking.

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use crate::core::{in_bounds, Position, CELL_COUNT, GRID_SIZE};

/// The 6x6 playing field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create a grid with every cell empty.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Reset every cell to empty.
    pub fn initialize(&mut self) {
        for row in self.cells.iter_mut() {
            row.fill(Cell::Empty);
        }
    }

    /// Is `pos` on the grid?
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        in_bounds(pos)
    }

    /// The cell at `pos`, or `None` off the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.contains(pos)
            .then(|| self.cells[pos.y as usize][pos.x as usize])
    }

    /// Mutable access to the cell at `pos`.
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        if self.contains(pos) {
            Some(&mut self.cells[pos.y as usize][pos.x as usize])
        } else {
            None
        }
    }

    /// Overwrite the cell at `pos`, returning what was there.
    ///
    /// Returns `None` (and changes nothing) off the grid.
    pub fn set(&mut self, pos: Position, cell: Cell) -> Option<Cell> {
        self.get_mut(pos).map(|slot| std::mem::replace(slot, cell))
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; GRID_SIZE]> {
        self.cells.iter()
    }

    /// Every cell with its position, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, cell)| (Position::new(x as i32, y as i32), *cell))
        })
    }

    /// Tally cells by kind.
    #[must_use]
    pub fn counts(&self) -> CellCounts {
        let mut counts = CellCounts::default();
        for (_, cell) in self.iter() {
            match cell {
                Cell::Empty => counts.empty += 1,
                Cell::Gem => counts.gems += 1,
                Cell::Obstacle => counts.obstacles += 1,
                Cell::Occupied(_) => counts.occupied += 1,
            }
        }
        counts
    }
}

/// Number of cells of each kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellCounts {
    pub empty: usize,
    pub gems: usize,
    pub obstacles: usize,
    pub occupied: usize,
}

impl CellCounts {
    /// Sum of all kinds. Always `CELL_COUNT` for a real grid.
    #[must_use]
    pub fn total(&self) -> usize {
        self.empty + self.gems + self.obstacles + self.occupied
    }

    /// Whether the tally covers the whole grid.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total() == CELL_COUNT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new();
        let counts = grid.counts();

        assert_eq!(counts.empty, 36);
        assert!(counts.is_complete());
    }

    #[test]
    fn test_get_and_set() {
        let mut grid = Grid::new();
        let pos = Position::new(4, 1);

        assert_eq!(grid.set(pos, Cell::Gem), Some(Cell::Empty));
        assert_eq!(grid.get(pos), Some(Cell::Gem));
        assert_eq!(grid.set(pos, Cell::Occupied(PlayerId::FIRST)), Some(Cell::Gem));
    }

    #[test]
    fn test_off_grid_access() {
        let mut grid = Grid::new();

        assert_eq!(grid.get(Position::new(-1, 0)), None);
        assert_eq!(grid.get(Position::new(0, 6)), None);
        assert_eq!(grid.set(Position::new(6, 6), Cell::Gem), None);
        assert_eq!(grid.counts().empty, 36);
    }

    #[test]
    fn test_storage_is_row_major() {
        let mut grid = Grid::new();
        grid.set(Position::new(3, 0), Cell::Obstacle);

        let first_row = grid.rows().next().unwrap();
        assert_eq!(first_row[3], Cell::Obstacle);
    }

    #[test]
    fn test_initialize_clears() {
        let mut grid = Grid::new();
        grid.set(Position::new(1, 1), Cell::Gem);
        grid.set(Position::new(2, 2), Cell::Obstacle);

        grid.initialize();
        assert_eq!(grid, Grid::new());
    }
}
