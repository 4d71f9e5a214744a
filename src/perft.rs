use crate::board::rules::{apply_move, check_endgame, legal_moves};
use crate::board::{Board, Player};

/// Count the leaf positions of the legal-move tree to the given depth,
/// starting with `side` to move. A stuck side passes the turn (consuming a
/// ply); terminated positions and double stalemates are leaves. Audits the
/// generator and executor together.
pub fn perft(board: &Board, side: Player, depth: u32) -> u64 {
    if depth == 0 || check_endgame(board).over {
        return 1;
    }
    let moves = legal_moves(board, side);
    if moves.is_empty() {
        if legal_moves(board, side.opponent()).is_empty() {
            return 1;
        }
        return perft(board, side.opponent(), depth - 1);
    }
    let mut nodes = 0u64;
    for mv in moves {
        let mut child = board.clone();
        apply_move(&mut child, mv, side).unwrap_or_else(|e| panic!("perft move: {e}"));
        nodes += perft(&child, side.opponent(), depth - 1);
    }
    nodes
}
