use ataxxbot::board::rules::legal_moves;
use ataxxbot::board::{Board, Player};
use ataxxbot::perft::perft;

#[test]
fn depth_zero_is_one_leaf() {
    let board = Board::from_sketch(&["1...", "....", "....", "...2"]).expect("valid sketch");
    assert_eq!(perft(&board, Player::P1, 0), 1);
}

#[test]
fn depth_one_counts_the_legal_moves() {
    let board = Board::from_sketch(&["1...", "....", "....", "...2"]).expect("valid sketch");
    // Corner disc: 3 duplications plus 5 in-bounds jumps.
    assert_eq!(legal_moves(&board, Player::P1).len(), 8);
    assert_eq!(perft(&board, Player::P1, 1), 8);
}

#[test]
fn a_stuck_side_passes_and_consumes_a_ply() {
    let board =
        Board::from_sketch(&["1##..", "###..", "###..", ".....", "....2"]).expect("valid sketch");
    // P1 passes immediately; the leaf is reached with no move made.
    assert_eq!(perft(&board, Player::P1, 1), 1);
    // With one more ply, the count is exactly P2's mobility.
    assert_eq!(legal_moves(&board, Player::P2).len(), 7);
    assert_eq!(perft(&board, Player::P1, 2), 7);
}

#[test]
fn terminated_positions_are_leaves_at_any_depth() {
    let eliminated =
        Board::from_sketch(&["2...", "....", "....", "...2"]).expect("valid sketch");
    assert_eq!(perft(&eliminated, Player::P1, 3), 1);

    let full = Board::from_sketch(&["1122", "2211", "1212", "12#1"]).expect("valid sketch");
    assert_eq!(perft(&full, Player::P1, 3), 1);
}
