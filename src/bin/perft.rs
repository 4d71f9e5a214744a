use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use ataxxbot::board::{Board, Player};
use ataxxbot::perft::perft;

#[derive(Parser, Debug)]
#[command(name = "perft", about = "Legal-move-tree node counts for Ataxxbot")]
struct Args {
    /// Maximum depth to count to
    #[arg(value_name = "DEPTH")]
    depth: u32,

    /// Board side length
    #[arg(long, default_value_t = 7)]
    size: usize,

    /// Obstacle pairs on the generated board
    #[arg(long, default_value_t = 2)]
    obstacles: usize,

    /// Seed for board generation
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut rng = SmallRng::seed_from_u64(args.seed);
    let board = Board::random_start(args.size, args.obstacles, &mut rng)?;
    print!("{board}");

    for depth in 0..=args.depth {
        let t0 = Instant::now();
        let nodes = perft(&board, Player::P1, depth);
        let dt = t0.elapsed().as_secs_f64();
        println!(
            "perft({depth}) = {nodes} elapsed: {dt:.3}s nps: {:.1}",
            nodes as f64 / dt.max(f64::EPSILON)
        );
    }
    Ok(())
}
