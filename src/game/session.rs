//! The turn state machine.
//!
//! ```text
//! AwaitingMove(current)
//!   -- valid move   --> move, collect gem, switch turn, count it --> AwaitingMove(other)
//!   -- invalid move --> InvalidMove error, nothing changes        --> AwaitingMove(current)
//!   -- boxed in     --> pass, switch turn, count it               --> AwaitingMove(other)
//! GameOver once the counted half-turns reach the limit.
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::{Board, Cell};
use crate::core::{Direction, GameConfig, GameRng, Player, PlayerId, Position, PLAYER_COUNT};
use crate::error::{GameError, Result};
use crate::rules::GameResult;

/// One counted half-turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Who acted.
    pub player: PlayerId,

    /// Direction moved, or `None` when the player had no legal move and passed.
    pub direction: Option<Direction>,

    pub from: Position,
    pub to: Position,

    /// Whether a gem was picked up.
    pub collected: bool,

    /// Half-turn number, starting at 1.
    pub turn: u32,
}

/// A game in progress.
///
/// Deserializing goes through `GameSnapshot`, so a restored game has passed
/// the same checks as `Game::from_parts`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameSnapshot")]
pub struct Game {
    board: Board,
    players: [Player; 2],
    current: PlayerId,
    turns_taken: u32,
    turn_limit: u32,
    history: Vec<MoveRecord>,
}

/// Unchecked serialized form of a `Game`, validated by `TryFrom`.
#[derive(Deserialize)]
pub struct GameSnapshot {
    board: Board,
    players: [Player; 2],
    current: PlayerId,
    turns_taken: u32,
    turn_limit: u32,
    history: Vec<MoveRecord>,
}

impl TryFrom<GameSnapshot> for Game {
    type Error = GameError;

    fn try_from(snapshot: GameSnapshot) -> Result<Self> {
        check_turn_order(&snapshot.players)?;
        for player in &snapshot.players {
            if snapshot.board.cell(player.position) != Some(Cell::Occupied(player.id)) {
                return Err(GameError::InvalidConfig(format!(
                    "{} is at {} but the board does not show them there",
                    player.id, player.position
                )));
            }
        }
        let occupied = snapshot.board.counts().occupied;
        if occupied != PLAYER_COUNT {
            return Err(GameError::InvalidConfig(format!(
                "board has {occupied} occupied cells, expected {PLAYER_COUNT}"
            )));
        }
        if snapshot.history.len() != snapshot.turns_taken as usize {
            return Err(GameError::InvalidConfig(format!(
                "{} recorded moves for {} turns taken",
                snapshot.history.len(),
                snapshot.turns_taken
            )));
        }

        Ok(Self {
            board: snapshot.board,
            players: snapshot.players,
            current: snapshot.current,
            turns_taken: snapshot.turns_taken,
            turn_limit: snapshot.turn_limit,
            history: snapshot.history,
        })
    }
}

fn check_turn_order(players: &[Player; 2]) -> Result<()> {
    if players[0].id != PlayerId::FIRST || players[1].id != PlayerId::SECOND {
        return Err(GameError::InvalidConfig(
            "players must be given in turn order".to_string(),
        ));
    }
    Ok(())
}

impl Game {
    /// Start a game from configuration, placing items with the seeded RNG.
    pub fn new(config: &GameConfig) -> Result<Self> {
        config.validate()?;

        let players = PlayerId::ALL.map(|id| {
            Player::new(
                id,
                config.player_names[id.index()].clone(),
                config.starts[id.index()],
            )
        });
        let mut rng = GameRng::new(config.seed);
        let board = Board::generate(config, &players, &mut rng)?;

        info!(
            seed = config.seed,
            gems = config.gem_count,
            obstacles = config.obstacle_count,
            turn_limit = config.turn_limit,
            "game started"
        );
        Ok(Self::assemble(board, players, config.turn_limit))
    }

    /// Start a game on a prepared board.
    ///
    /// The players are written onto `board` at their current positions;
    /// those cells must be empty (or already hold that player).
    pub fn from_parts(mut board: Board, players: [Player; 2], turn_limit: u32) -> Result<Self> {
        check_turn_order(&players)?;
        for player in &players {
            board.put_player(player)?;
        }
        Ok(Self::assemble(board, players, turn_limit))
    }

    fn assemble(board: Board, players: [Player; 2], turn_limit: u32) -> Self {
        Self {
            board,
            players,
            current: PlayerId::FIRST,
            turns_taken: 0,
            turn_limit,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    #[must_use]
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    /// Counted half-turns so far.
    #[must_use]
    pub fn turns_taken(&self) -> u32 {
        self.turns_taken
    }

    #[must_use]
    pub fn turn_limit(&self) -> u32 {
        self.turn_limit
    }

    #[must_use]
    pub fn turns_remaining(&self) -> u32 {
        self.turn_limit.saturating_sub(self.turns_taken)
    }

    /// Every counted half-turn, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Gem counts, first player first.
    #[must_use]
    pub fn scores(&self) -> (u32, u32) {
        (self.players[0].gems, self.players[1].gems)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.turns_taken >= self.turn_limit
    }

    /// The final result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.is_over().then(|| GameResult::decide(&self.players))
    }

    /// Can the current player make any move?
    #[must_use]
    pub fn current_can_move(&self) -> bool {
        self.board.has_valid_move(self.current_player().position)
    }

    /// Attempt a move for the current player.
    ///
    /// An invalid move returns `InvalidMove` and changes nothing: the same
    /// player is still to move and the turn count is unchanged.
    pub fn play_turn(&mut self, direction: Direction) -> Result<MoveRecord> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let id = self.current;
        let from = self.player(id).position;
        if !self.board.is_valid_move(from, direction) {
            debug!(player = %id, %from, %direction, "move rejected");
            return Err(GameError::InvalidMove {
                player: id,
                from,
                direction,
            });
        }

        let player = &mut self.players[id.index()];
        let landing = self.board.move_player(player, direction);
        let collected = self.board.collect_gem(player, &landing);

        Ok(self.finish_turn(MoveRecord {
            player: id,
            direction: Some(direction),
            from: landing.from,
            to: landing.to,
            collected,
            turn: 0,
        }))
    }

    /// Pass for a current player who is boxed in.
    ///
    /// Passing counts toward the turn limit, so a blocked player cannot stall
    /// the game. Fails with `InvalidMove` if any move is available.
    pub fn pass_turn(&mut self) -> Result<MoveRecord> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let (id, at) = (self.current, self.current_player().position);
        if let Some(direction) = Direction::ALL
            .into_iter()
            .find(|d| self.board.is_valid_move(at, *d))
        {
            return Err(GameError::InvalidMove {
                player: id,
                from: at,
                direction,
            });
        }

        debug!(player = %id, %at, "boxed in, passing");
        Ok(self.finish_turn(MoveRecord {
            player: id,
            direction: None,
            from: at,
            to: at,
            collected: false,
            turn: 0,
        }))
    }

    fn finish_turn(&mut self, mut record: MoveRecord) -> MoveRecord {
        self.turns_taken += 1;
        record.turn = self.turns_taken;
        self.current = self.current.opponent();
        self.history.push(record.clone());

        if self.is_over() {
            let (first, second) = self.scores();
            info!(first, second, result = ?GameResult::decide(&self.players), "game over");
        }
        record
    }
}
