//! Gamma-Rust: the gamma territory game.
//!
//! ## Usage
//!
//! - `gamma-rust` - Read batch mode commands from stdin
//! - `gamma-rust batch` - Same as above
//! - `gamma-rust demo` - Play a random game and print the result

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use gamma_rust::batch::{BatchSession, SessionEnd};
use gamma_rust::board::Board;
use gamma_rust::constants::{DEMO_AREAS, DEMO_HEIGHT, DEMO_PLAYERS, DEMO_WIDTH};
use gamma_rust::playout::random_game;

/// Gamma-Rust: rules engine of the gamma territory game
#[derive(Parser)]
#[command(name = "gamma-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read commands from stdin, one per line
    Batch,
    /// Play a random game
    Demo(DemoArgs),
}

#[derive(Args)]
struct DemoArgs {
    /// Board width
    #[arg(long, default_value_t = DEMO_WIDTH)]
    width: u32,
    /// Board height
    #[arg(long, default_value_t = DEMO_HEIGHT)]
    height: u32,
    /// Number of players
    #[arg(long, default_value_t = DEMO_PLAYERS)]
    players: u32,
    /// Maximum number of areas per player
    #[arg(long, default_value_t = DEMO_AREAS)]
    areas: u32,
    /// Random seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Demo(args)) => run_demo(&args),
        Some(Commands::Batch) | None => run_batch(),
    }
}

fn run_batch() -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    let mut session = BatchSession::new();
    match session.run(stdin.lock(), &mut stdout, &mut stderr)? {
        SessionEnd::Eof => Ok(()),
        SessionEnd::Interactive(board) => {
            // No terminal front end here: report the starting position.
            eprintln!("interactive mode is not available, printing the game summary");
            write!(stdout, "{board}{}", board.summary()).context("failed to write summary")?;
            stdout.flush().context("failed to flush output")
        }
    }
}

fn run_demo(args: &DemoArgs) -> Result<()> {
    let mut board = Board::new(args.width, args.height, args.players, args.areas)
        .context("invalid demo parameters")?;
    let mut rng = match args.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };

    println!("Gamma-Rust: random game\n");
    println!(
        "{}x{} board, {} players, at most {} areas each",
        board.width(),
        board.height(),
        board.players(),
        board.max_areas()
    );

    let turns = random_game(&mut board, &mut rng);
    println!("Game over after {turns} moves\n");
    print!("{board}");
    println!();
    print!("{}", board.summary());
    Ok(())
}
