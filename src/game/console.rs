//! Terminal driver: renders the board, reads one direction per attempt and
//! feeds it to the `Game` until the turn limit is reached.
//!
//! Generic over `BufRead`/`Write` so a whole game can be scripted in tests.

use std::io::{BufRead, Write};
use tracing::debug;

use super::session::Game;
use crate::core::Direction;
use crate::error::{GameError, Result};
use crate::rules::GameResult;

/// ANSI "clear screen, cursor home".
const CLEAR: &str = "\x1b[2J\x1b[H";

/// Blocking console front-end for a single game.
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_screen: false,
        }
    }

    /// Clear the terminal before each redraw.
    #[must_use]
    pub fn with_clear_screen(mut self, enabled: bool) -> Self {
        self.clear_screen = enabled;
        self
    }

    /// Give back the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Play `game` to the end and announce the result.
    ///
    /// Invalid moves and unrecognized keys re-prompt the same player without
    /// using up a turn. Running out of input before the end is an error.
    pub fn run(&mut self, game: &mut Game) -> Result<GameResult> {
        let mut notice: Option<String> = None;

        while !game.is_over() {
            self.render(game)?;
            if let Some(text) = notice.take() {
                writeln!(self.output, "{text}")?;
            }

            if !game.current_can_move() {
                let record = game.pass_turn()?;
                notice = Some(format!(
                    "{} is boxed in and passes.",
                    game.player(record.player).name
                ));
                continue;
            }

            let current = game.current_player();
            write!(
                self.output,
                "{}'s turn ({}/{}). Enter move (U, D, L, R): ",
                current.name,
                game.turns_taken() + 1,
                game.turn_limit()
            )?;
            self.output.flush()?;

            let line = self.read_line()?;
            notice = match line.parse::<Direction>().and_then(|d| game.play_turn(d)) {
                Ok(record) if record.collected => Some(format!(
                    "{} collected a gem!",
                    game.player(record.player).name
                )),
                Ok(_) => None,
                Err(GameError::InvalidMove { .. }) => Some("Invalid move. Try again.".to_string()),
                Err(GameError::UnrecognizedInput(input)) => {
                    debug!(%input, "unrecognized input");
                    Some(format!("Unrecognized input {input:?}. Use U, D, L or R."))
                }
                Err(err) => return Err(err),
            };
        }

        self.render(game)?;
        if let Some(text) = notice {
            writeln!(self.output, "{text}")?;
        }
        let result = GameResult::decide(game.players());
        self.announce(game, result)?;
        Ok(result)
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(line)
    }

    fn render(&mut self, game: &Game) -> Result<()> {
        if self.clear_screen {
            write!(self.output, "{CLEAR}")?;
        }
        write!(self.output, "{}", game.board())?;

        let [first, second] = game.players();
        writeln!(
            self.output,
            "{} gems: {}  {} gems: {}",
            first.name, first.gems, second.name, second.gems
        )?;
        Ok(())
    }

    fn announce(&mut self, game: &Game, result: GameResult) -> Result<()> {
        let [first, second] = game.players();
        writeln!(
            self.output,
            "Game over! {} gems: {}, {} gems: {}",
            first.name, first.gems, second.name, second.gems
        )?;
        match result {
            GameResult::Winner(id) => writeln!(self.output, "{} wins!", game.player(id).name)?,
            GameResult::Tie => writeln!(self.output, "It's a tie!")?,
        }
        self.output.flush()?;
        Ok(())
    }
}
