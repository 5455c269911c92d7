//! Command line entry point: play one game in the terminal.

use clap::Parser;
use std::io;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gem_hunters::core::DEFAULT_TURN_LIMIT;
use gem_hunters::{Console, Game, GameConfig};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Placement seed; a random one is chosen (and logged) when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Half-turns before the game ends
    #[arg(long, default_value_t = DEFAULT_TURN_LIMIT)]
    turns: u32,

    /// Gems placed on the board
    #[arg(long, default_value_t = 8)]
    gems: usize,

    /// Obstacles placed on the board
    #[arg(long, default_value_t = 6)]
    obstacles: usize,

    /// First player's name
    #[arg(long, default_value = "P1")]
    p1: String,

    /// Second player's name
    #[arg(long, default_value = "P2")]
    p2: String,

    /// Do not clear the terminal between turns
    #[arg(long)]
    no_clear: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they never mix with the board on stdout.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, "starting gem hunters");

    let config = GameConfig::default()
        .with_seed(seed)
        .with_turn_limit(args.turns)
        .with_gems(args.gems)
        .with_obstacles(args.obstacles)
        .with_names(args.p1, args.p2);
    let mut game = Game::new(&config)?;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock()).with_clear_screen(!args.no_clear);
    console.run(&mut game)?;
    Ok(())
}
