//! Self-play driver: two one-ply agents alternate until the game ends.
//!
//! From the engine's point of view this loop is an external collaborator:
//! it only consumes the public contract (`step`, `winner`, rendering) plus
//! the policy's `select_move`.

use anyhow::Result;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};

use noughts::{BoardState, policy};

#[derive(Parser)]
#[command(name = "selfplay")]
#[command(version, about = "Run a tic-tac-toe game between two one-ply agents")]
struct Cli {
    /// Seed for the tie-breaking random source; omit for a random game
    #[arg(long)]
    seed: Option<u64>,

    /// Safety limit on simulation steps
    #[arg(long, default_value_t = 1000)]
    max_steps: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut board = BoardState::new();
    println!("** Begin game **");
    println!("{board}");

    for _ in 0..cli.max_steps {
        let mv = policy::select_move(&board, &mut rng)?;
        let (next, _reward, done) = board.step(mv)?;
        board = next;

        println!("{mv}");
        println!("{board}");

        if done {
            match board.winner() {
                Some(winner) => {
                    println!("** Game over: {} wins **", winner.to_cell().to_char())
                }
                None => println!("** Game over: draw **"),
            }
            return Ok(());
        }
    }

    println!("** Step limit reached without a result **");
    Ok(())
}
