use serde::{Deserialize, Serialize};

use crate::board::rules::legal_moves;
use crate::board::{Board, Cell, Player};

/// Sentinel for an already-decided position (a player eliminated).
pub const WIN_SCORE: i32 = 1_000_000;

/// Bonus for locking the opponent out of every move while still having
/// moves ourselves. Sits between the ordinary score range and the win
/// sentinel: near-certain advantage, not yet termination.
pub const MOBILITY_LOCK: i32 = 10_000;

/// Relative weights of the three evaluation components.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weights {
    pub disc: i32,
    pub mobility: i32,
    pub position: i32,
}

impl Weights {
    /// Opening/midgame table: centre control dominates so the engine
    /// contests the middle instead of hoarding safe edge discs.
    pub fn opening() -> Self {
        Self {
            disc: 2,
            mobility: 2,
            position: 5,
        }
    }

    /// Endgame table: raw material decides the outcome as the board fills,
    /// so positional weight drops to zero.
    pub fn endgame() -> Self {
        Self {
            disc: 10,
            mobility: 1,
            position: 0,
        }
    }
}

/// Phase-aware weight tables. The 0.5 progress threshold and the table
/// values are tunable defaults; the opening-to-endgame shift is not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalConfig {
    pub opening: Weights,
    pub endgame: Weights,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            opening: Weights::opening(),
            endgame: Weights::endgame(),
        }
    }
}

/// Score a position for `player`; higher is better for them.
///
/// Elimination short-circuits to the win/loss sentinels without a full
/// termination check. Otherwise the score is the phase-weighted sum of
/// disc differential, mobility differential, and centre-proximity control,
/// with the mobility-lockout bonus layered on one-sided stalemates.
pub fn evaluate(board: &Board, player: Player, opponent: Player, cfg: &EvalConfig) -> i32 {
    let own = board.disc_count(player) as i32;
    let theirs = board.disc_count(opponent) as i32;
    if own == 0 {
        return -WIN_SCORE;
    }
    if theirs == 0 {
        return WIN_SCORE;
    }

    let own_moves = legal_moves(board, player).len() as i32;
    let their_moves = legal_moves(board, opponent).len() as i32;
    if their_moves == 0 && own_moves > 0 {
        return MOBILITY_LOCK + (own - theirs);
    }
    if own_moves == 0 && their_moves > 0 {
        return -MOBILITY_LOCK + (own - theirs);
    }

    let w = if board.progress() > 0.5 {
        cfg.endgame
    } else {
        cfg.opening
    };
    w.disc * (own - theirs)
        + w.mobility * (own_moves - their_moves)
        + w.position * centre_control(board, player, opponent)
}

/// Positional control: every disc contributes `size - manhattan distance to
/// centre`, positive for `player`, negative for `opponent`.
fn centre_control(board: &Board, player: Player, opponent: Player) -> i32 {
    let n = board.size() as i32;
    let centre = n / 2;
    let mut score = 0;
    for r in 0..board.size() {
        for c in 0..board.size() {
            let dist = (r as i32 - centre).abs() + (c as i32 - centre).abs();
            match board.get(r, c) {
                Cell::Disc(p) if p == player => score += n - dist,
                Cell::Disc(p) if p == opponent => score -= n - dist,
                _ => {}
            }
        }
    }
    score
}
