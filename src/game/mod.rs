//! Turn sequencing and the console front-end.

pub mod session;
pub mod console;

pub use session::{Game, MoveRecord};
pub use console::Console;
