//! The board: grid ownership, placement, move validation and gem pickup.
//!
//! The grid is the only record of where things are. Player markers are
//! written into cells, and rendering reads cells only.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use super::cell::Cell;
use super::grid::{CellCounts, Grid};
use crate::core::{Direction, GameConfig, GameRng, Player, Position, GRID_SIZE};
use crate::error::{GameError, Result};

/// Where a move took a player and what was under their feet on arrival.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Landing {
    pub from: Position,
    pub to: Position,
    /// Contents of the target cell before the player marker replaced it.
    pub found: Cell,
}

/// Playing field for one game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    grid: Grid,
}

impl Board {
    /// A board with nothing on it.
    #[must_use]
    pub fn empty() -> Self {
        Self { grid: Grid::new() }
    }

    /// Build the starting board for `config`: players first, then gems,
    /// then obstacles, all on distinct cells.
    pub fn generate(config: &GameConfig, players: &[Player], rng: &mut GameRng) -> Result<Self> {
        config.validate()?;

        let mut board = Self::empty();
        board.initialize();
        for player in players {
            board.put_player(player)?;
        }
        board.place_random(Cell::Gem, config.gem_count, rng)?;
        board.place_random(Cell::Obstacle, config.obstacle_count, rng)?;

        debug!(seed = rng.seed(), counts = ?board.counts(), "board generated");
        Ok(board)
    }

    /// Set every cell to empty.
    pub fn initialize(&mut self) {
        self.grid.initialize();
    }

    /// Drop `count` copies of `kind` on uniformly random empty cells.
    ///
    /// Draws positions until each one lands on an empty cell. The board is
    /// sparse, so this takes a handful of draws per item; it fails up front
    /// if there are not enough empty cells to ever finish.
    pub fn place_random(&mut self, kind: Cell, count: usize, rng: &mut GameRng) -> Result<()> {
        let free = self.counts().empty;
        if count > free {
            return Err(GameError::InvalidConfig(format!(
                "cannot place {count} x {kind:?} on {free} empty cells"
            )));
        }

        let mut remaining = count;
        let mut draws = 0usize;
        while remaining > 0 {
            let pos = rng.gen_position(GRID_SIZE);
            draws += 1;
            if self.grid.get(pos) == Some(Cell::Empty) {
                self.grid.set(pos, kind);
                remaining -= 1;
            }
        }

        debug!(?kind, count, draws, "random placement done");
        Ok(())
    }

    /// Put `cell` at a fixed position. Only empty cells can be filled.
    pub fn place(&mut self, pos: Position, cell: Cell) -> Result<()> {
        match self.grid.get(pos) {
            None => Err(GameError::OutOfBounds(pos)),
            Some(Cell::Empty) => {
                self.grid.set(pos, cell);
                Ok(())
            }
            Some(_) => Err(GameError::CellTaken(pos)),
        }
    }

    /// Mark the player's current position as occupied by them.
    pub fn put_player(&mut self, player: &Player) -> Result<()> {
        match self.grid.get(player.position) {
            Some(Cell::Occupied(id)) if id == player.id => Ok(()),
            _ => self.place(player.position, Cell::Occupied(player.id)),
        }
    }

    /// The cell at `pos`, or `None` off the board.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.grid.get(pos)
    }

    /// Read-only view of the grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Tally cells by kind.
    #[must_use]
    pub fn counts(&self) -> CellCounts {
        self.grid.counts()
    }

    /// Gems still on the board.
    #[must_use]
    pub fn gems_remaining(&self) -> usize {
        self.counts().gems
    }

    /// Can a piece at `from` step in `direction`?
    ///
    /// The target must be on the grid and hold neither an obstacle nor the
    /// other player.
    #[must_use]
    pub fn is_valid_move(&self, from: Position, direction: Direction) -> bool {
        self.grid
            .get(from.step(direction))
            .is_some_and(Cell::is_passable)
    }

    /// Does a piece at `from` have any legal move at all?
    #[must_use]
    pub fn has_valid_move(&self, from: Position) -> bool {
        Direction::ALL
            .into_iter()
            .any(|direction| self.is_valid_move(from, direction))
    }

    /// Move `player` one step, updating both the grid and the player.
    ///
    /// The caller must have checked `is_valid_move`. The vacated cell becomes
    /// empty and the target cell shows the player; whatever the target held
    /// before is returned in the `Landing` for `collect_gem`.
    pub fn move_player(&mut self, player: &mut Player, direction: Direction) -> Landing {
        debug_assert!(self.is_valid_move(player.position, direction));

        let from = player.position;
        if self.grid.get(from) == Some(Cell::Occupied(player.id)) {
            self.grid.set(from, Cell::Empty);
        }
        player.move_in(direction);
        let found = self
            .grid
            .set(player.position, Cell::Occupied(player.id))
            .unwrap_or(Cell::Empty);

        debug!(player = %player.id, %from, to = %player.position, ?found, "player moved");
        Landing {
            from,
            to: player.position,
            found,
        }
    }

    /// Credit `player` if the cell they landed on held a gem.
    ///
    /// The gem left the grid when the player marker was written, so the cell
    /// is empty once they walk away and a later visit finds nothing.
    pub fn collect_gem(&mut self, player: &mut Player, landing: &Landing) -> bool {
        if landing.found != Cell::Gem || landing.to != player.position {
            return false;
        }
        player.collect_gem();
        debug!(player = %player.id, gems = player.gems, at = %landing.to, "gem collected");
        true
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.rows() {
            for cell in row {
                write!(f, "{cell:<3}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
