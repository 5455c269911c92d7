//! Board model: cells, the 6x6 grid, and the `Board` that owns it.
//!
//! `Board` is responsible for random placement, move validation, moving
//! players between cells and crediting collected gems.

pub mod cell;
pub mod grid;
pub mod model;

pub use cell::Cell;
pub use grid::{CellCounts, Grid};
pub use model::{Board, Landing};
