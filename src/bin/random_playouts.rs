//! Seeded random playout driver.
//!
//! Runs a series of self-play games with uniformly-random legal moves and
//! prints per-outcome tallies. Handy for eyeballing engine behavior and for
//! reproducing a game by seed.
//!
//! Usage: random_playouts [games] [base-seed] [max-moves]

use std::time::Instant;

use chrono::Local;

use kwazam_chess::game_state::kwazam_types::Side;
use kwazam_chess::utils::playout_harness::{run_playout_series, PlayoutConfig, PlayoutOutcome};

fn main() {
    let mut args = std::env::args().skip(1);
    let games: u32 = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(100);
    let base_seed: u64 = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(1);
    let max_moves: u32 = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(400);

    println!(
        "Running {games} random playouts (base seed {base_seed}, cap {max_moves} moves) at {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    let config = PlayoutConfig {
        seed: base_seed,
        max_moves,
    };
    let start = Instant::now();
    let results = run_playout_series(&config, games);
    let elapsed = start.elapsed();

    let mut blue_wins = 0u32;
    let mut red_wins = 0u32;
    let mut capped = 0u32;
    let mut stuck = 0u32;
    let mut total_moves = 0u64;

    for result in &results {
        total_moves += u64::from(result.moves_played);
        match result.outcome {
            PlayoutOutcome::Win(Side::Blue) => blue_wins += 1,
            PlayoutOutcome::Win(Side::Red) => red_wins += 1,
            PlayoutOutcome::MoveCapReached => capped += 1,
            PlayoutOutcome::NoLegalMoves(_) => stuck += 1,
        }
    }

    println!("Blue wins:       {blue_wins}");
    println!("Red wins:        {red_wins}");
    println!("Move cap hit:    {capped}");
    println!("No legal moves:  {stuck}");
    println!("Total moves:     {total_moves}");
    println!(
        "Elapsed: {:.3}s ({:.1} moves/ms)",
        elapsed.as_secs_f64(),
        total_moves as f64 / elapsed.as_secs_f64().max(f64::EPSILON) / 1000.0
    );
}
