use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::ProgressBar;
use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use ataxxbot::board::rules::{apply_move, check_endgame, random_move, Endgame};
use ataxxbot::board::{Board, Player};
use ataxxbot::search::{SearchParams, Searcher};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play Ataxx matches between the search engine and a random baseline", long_about = None)]
struct Args {
    /// Board side length
    #[arg(long, default_value_t = 7)]
    size: usize,

    /// Obstacle pairs placed centre-mirrored on each fresh board
    #[arg(long, default_value_t = 2)]
    obstacles: usize,

    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: usize,

    /// Per-move time budget in milliseconds
    #[arg(long, default_value_t = 1900)]
    movetime: u64,

    /// Maximum search depth
    #[arg(long, default_value_t = 64)]
    depth: u32,

    /// RNG seed for board generation and the random opponent
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// JSON file overriding the evaluation weight tables
    #[arg(long)]
    weights: Option<PathBuf>,

    /// Pit the engine against itself instead of the random baseline
    #[arg(long)]
    selfplay: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut params = SearchParams::default();
    params.movetime_ms = args.movetime;
    params.max_depth = args.depth;
    if let Some(path) = &args.weights {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading weights from {}", path.display()))?;
        params.eval = serde_json::from_str(&text).context("parsing weight tables")?;
    }

    let mut rng = SmallRng::seed_from_u64(args.seed);
    let mut p1_wins = 0usize;
    let mut p2_wins = 0usize;
    let mut draws = 0usize;

    let bar = ProgressBar::new(args.games as u64);
    for _ in 0..args.games {
        let board = Board::random_start(args.size, args.obstacles, &mut rng)?;
        let end = play_game(board, params, args.selfplay, &mut rng)?;
        if end.p1_score > end.p2_score {
            p1_wins += 1;
        } else if end.p2_score > end.p1_score {
            p2_wins += 1;
        } else {
            draws += 1;
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    println!("engine (P1) wins: {p1_wins}, opponent (P2) wins: {p2_wins}, draws: {draws}");
    Ok(())
}

/// Alternate turns until the game ends, honouring passes. The engine plays
/// P1; P2 plays uniformly random moves unless `selfplay` is set.
fn play_game(
    mut board: Board,
    params: SearchParams,
    selfplay: bool,
    rng: &mut SmallRng,
) -> Result<Endgame> {
    let mut searcher = Searcher::new(params);
    let mut side = Player::P1;
    let mut stuck = 0u32;
    loop {
        let end = check_endgame(&board);
        if end.over {
            return Ok(end);
        }
        let chosen = if side == Player::P1 || selfplay {
            searcher.decide(&board, side, side.opponent())
        } else {
            random_move(&board, side, rng)
        };
        match chosen {
            Some(mv) => {
                apply_move(&mut board, mv, side)?;
                debug!("{side:?} plays {mv}");
                stuck = 0;
            }
            None => {
                debug!("{side:?} passes");
                stuck += 1;
                if stuck >= 2 {
                    // Both sides blocked with empties left; score as it stands.
                    return Ok(check_endgame(&board));
                }
            }
        }
        side = side.opponent();
    }
}
