use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use super::{Board, Cell, Move, Player, DUP_DIRS, JUMP_DIRS};

#[derive(Debug, Error)]
pub enum RulesError {
    /// Executing a move that fails validation is a defect in the caller's
    /// move generation, never a recoverable game condition.
    #[error("illegal move {mv} for player {player:?}")]
    IllegalMove { mv: Move, player: Player },
}

/// True iff `mv` is legal for `player`: both endpoints in bounds, the
/// destination empty, the source owned by the mover, and the displacement
/// one of the 24 duplication/jump vectors. Out-of-bounds input is a plain
/// `false`, never a panic.
pub fn is_legal(board: &Board, mv: Move, player: Player) -> bool {
    let (sr, sc) = (mv.src.0 as i32, mv.src.1 as i32);
    let (dr, dc) = (mv.dst.0 as i32, mv.dst.1 as i32);
    if !board.in_bounds(sr, sc) || !board.in_bounds(dr, dc) {
        return false;
    }
    if board.get(mv.dst.0, mv.dst.1) != Cell::Empty {
        return false;
    }
    if board.get(mv.src.0, mv.src.1) != Cell::Disc(player) {
        return false;
    }
    let delta = mv.delta();
    DUP_DIRS.iter().chain(JUMP_DIRS.iter()).any(|&d| d == delta)
}

/// Every legal move for `player`: scan the player's discs and probe all 24
/// displacement vectors from each. Output order is arbitrary; ranking is
/// the orderer's job.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Move> {
    let n = board.size();
    let mut moves = Vec::new();
    for r in 0..n {
        for c in 0..n {
            if board.get(r, c) != Cell::Disc(player) {
                continue;
            }
            for &(dr, dc) in DUP_DIRS.iter().chain(JUMP_DIRS.iter()) {
                let (tr, tc) = (r as i32 + dr, c as i32 + dc);
                if board.in_bounds(tr, tc)
                    && board.get(tr as usize, tc as usize) == Cell::Empty
                {
                    moves.push(Move::new((r, c), (tr as usize, tc as usize)));
                }
            }
        }
    }
    moves
}

/// Immediate disc gain of a legal move: opponent discs captured around the
/// destination, plus one for the duplicated disc on single-step moves.
/// This is the move orderer's ranking proxy.
pub fn disc_gain(board: &Board, mv: Move, player: Player) -> i32 {
    let opponent = player.opponent();
    let mut gain = 0;
    for &(dr, dc) in DUP_DIRS.iter() {
        let (nr, nc) = (mv.dst.0 as i32 + dr, mv.dst.1 as i32 + dc);
        if board.in_bounds(nr, nc)
            && board.get(nr as usize, nc as usize) == Cell::Disc(opponent)
        {
            gain += 1;
        }
    }
    if !mv.is_jump() {
        gain += 1;
    }
    gain
}

/// Apply a move: place the mover's disc at the destination, flip every
/// opponent disc among the destination's 8 neighbours, and vacate the
/// source if the move is a jump.
///
/// An illegal move is an invariant violation; the board is left untouched
/// and the offending move is surfaced in the error.
pub fn apply_move(board: &mut Board, mv: Move, player: Player) -> Result<(), RulesError> {
    if !is_legal(board, mv, player) {
        return Err(RulesError::IllegalMove { mv, player });
    }
    board.set(mv.dst.0, mv.dst.1, Cell::Disc(player));
    let opponent = player.opponent();
    for &(dr, dc) in DUP_DIRS.iter() {
        let (nr, nc) = (mv.dst.0 as i32 + dr, mv.dst.1 as i32 + dc);
        if board.in_bounds(nr, nc)
            && board.get(nr as usize, nc as usize) == Cell::Disc(opponent)
        {
            board.set(nr as usize, nc as usize, Cell::Disc(player));
        }
    }
    if mv.is_jump() {
        board.set(mv.src.0, mv.src.1, Cell::Empty);
    }
    Ok(())
}

/// Termination state and scores, computed fresh from the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Endgame {
    pub over: bool,
    pub p1_score: usize,
    pub p2_score: usize,
}

impl Endgame {
    pub fn score(&self, player: Player) -> usize {
        match player {
            Player::P1 => self.p1_score,
            Player::P2 => self.p2_score,
        }
    }
}

/// Check for termination and score the position.
///
/// An eliminated player ends the game immediately and the survivor is
/// awarded every non-obstacle cell. A board with no empty cells ends the
/// game at the literal disc counts. Otherwise the game is live and the
/// current counts serve as a heuristic signal.
pub fn check_endgame(board: &Board) -> Endgame {
    let p1 = board.disc_count(Player::P1);
    let p2 = board.disc_count(Player::P2);
    if p1 == 0 {
        return Endgame {
            over: true,
            p1_score: 0,
            p2_score: board.playable_cells(),
        };
    }
    if p2 == 0 {
        return Endgame {
            over: true,
            p1_score: board.playable_cells(),
            p2_score: 0,
        };
    }
    Endgame {
        over: board.empty_count() == 0,
        p1_score: p1,
        p2_score: p2,
    }
}

/// Uniformly random legal move, or `None` when the player must pass.
/// The baseline opponent in the driver.
pub fn random_move<R: Rng>(board: &Board, player: Player, rng: &mut R) -> Option<Move> {
    legal_moves(board, player).choose(rng).copied()
}
