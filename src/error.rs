//! Error type shared by the whole crate.

use thiserror::Error;

use crate::core::{Direction, PlayerId, Position};

/// Everything that can go wrong while setting up or playing a game.
///
/// `InvalidMove` and `UnrecognizedInput` are recovered by re-prompting the
/// same player. The rest end the game.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid move: {player} cannot move {direction} from {from}")]
    InvalidMove {
        player: PlayerId,
        from: Position,
        direction: Direction,
    },

    #[error("unrecognized input {0:?}, expected one of U, D, L, R")]
    UnrecognizedInput(String),

    #[error("the game is already over")]
    GameOver,

    #[error("position {0} is off the board")]
    OutOfBounds(Position),

    #[error("cell {0} is already taken")]
    CellTaken(Position),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("input closed before the game finished")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GameError {
    /// Can the current player simply try again?
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::InvalidMove { .. } | GameError::UnrecognizedInput(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
