//! Property tests for board invariants.
//!
//! These hold for every seed and every sequence of inputs: the grid always
//! accounts for all 36 cells, obstacles never change, and gems only move
//! from the board into a player's score.

use proptest::prelude::*;

use gem_hunters::{Board, Cell, Direction, Game, GameConfig, GameRng, Position, GRID_SIZE};

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn on_grid() -> impl Strategy<Value = Position> {
    (0..GRID_SIZE as i32, 0..GRID_SIZE as i32).prop_map(|(x, y)| Position::new(x, y))
}

proptest! {
    #[test]
    fn generated_board_accounts_for_every_cell(
        seed in any::<u64>(),
        gems in 0usize..=16,
        obstacles in 0usize..=16,
    ) {
        let config = GameConfig::default()
            .with_seed(seed)
            .with_gems(gems)
            .with_obstacles(obstacles);
        let game = Game::new(&config).unwrap();
        let counts = game.board().counts();

        prop_assert_eq!(counts.total(), 36);
        prop_assert_eq!(counts.gems, gems);
        prop_assert_eq!(counts.obstacles, obstacles);
        prop_assert_eq!(counts.occupied, 2);
    }

    #[test]
    fn play_preserves_board_invariants(
        seed in any::<u64>(),
        moves in prop::collection::vec(direction(), 0..80),
    ) {
        let mut game = Game::new(&GameConfig::default().with_seed(seed)).unwrap();
        let initial = game.board().counts();
        let mut last_gems = initial.gems;

        for direction in moves {
            if game.is_over() {
                break;
            }
            if game.current_can_move() {
                let turns = game.turns_taken();
                match game.play_turn(direction) {
                    Ok(record) => {
                        prop_assert_eq!(record.turn, turns + 1);
                    }
                    Err(err) => {
                        prop_assert!(err.is_recoverable());
                        prop_assert_eq!(game.turns_taken(), turns);
                    }
                }
            } else {
                game.pass_turn().unwrap();
            }

            let counts = game.board().counts();
            let (first, second) = game.scores();
            prop_assert_eq!(counts.total(), 36);
            prop_assert_eq!(counts.occupied, 2);
            prop_assert_eq!(counts.obstacles, initial.obstacles);
            prop_assert!(counts.gems <= last_gems);
            prop_assert_eq!(counts.gems + (first + second) as usize, initial.gems);
            last_gems = counts.gems;

            for player in game.players() {
                prop_assert_eq!(game.board().cell(player.position), Some(Cell::Occupied(player.id)));
            }
        }
        prop_assert!(game.turns_taken() <= game.turn_limit());
    }

    #[test]
    fn is_valid_move_matches_target_cell(
        seed in any::<u64>(),
        from in on_grid(),
        direction in direction(),
    ) {
        let game = Game::new(&GameConfig::default().with_seed(seed)).unwrap();
        let board = game.board();
        let target = from.step(direction);

        let expected = match board.cell(target) {
            None => false,
            Some(cell) => matches!(cell, Cell::Empty | Cell::Gem),
        };
        prop_assert_eq!(board.is_valid_move(from, direction), expected);
    }

    #[test]
    fn moves_off_the_grid_are_rejected(from in on_grid(), direction in direction()) {
        let board = Board::empty();
        let target = from.step(direction);
        let size = GRID_SIZE as i32;
        let inside = (0..size).contains(&target.x) && (0..size).contains(&target.y);

        prop_assert_eq!(board.is_valid_move(from, direction), inside);
    }

    #[test]
    fn place_random_only_fills_empty_cells(
        seed in any::<u64>(),
        fixed in prop::collection::hash_set(on_grid(), 0..12),
        count in 0usize..=20,
    ) {
        let mut board = Board::empty();
        for pos in &fixed {
            board.place(*pos, Cell::Obstacle).unwrap();
        }
        let mut rng = GameRng::new(seed);

        board.place_random(Cell::Gem, count, &mut rng).unwrap();

        for pos in &fixed {
            prop_assert_eq!(board.cell(*pos), Some(Cell::Obstacle));
        }
        let counts = board.counts();
        prop_assert_eq!(counts.obstacles, fixed.len());
        prop_assert_eq!(counts.gems, count);
        prop_assert_eq!(counts.total(), 36);
    }
}
