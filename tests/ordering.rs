use ataxxbot::board::{Board, Player};
use ataxxbot::search::{SearchParams, Searcher};

// P1's quiet corner disc is scanned first by the generator; the rewarding
// capture sits with the far disc, so unordered expansion starts cold.
fn capture_late_board() -> Board {
    Board::from_sketch(&["1....", ".....", ".22..", ".22..", "....1"]).expect("valid sketch")
}

#[test]
fn gain_ordering_reduces_searched_nodes() {
    let board = capture_late_board();

    let mut p1 = SearchParams::default();
    p1.max_depth = 3;
    p1.movetime_ms = 60_000;
    p1.order_moves = false;
    let mut s1 = Searcher::new(p1);
    let r1 = s1.search(&board, Player::P1, Player::P2);

    let mut p2 = p1;
    p2.order_moves = true;
    let mut s2 = Searcher::new(p2);
    let r2 = s2.search(&board, Player::P1, Player::P2);

    assert_eq!(
        r1.score, r2.score,
        "ordering must not change the search outcome"
    );
    assert!(
        r2.nodes < r1.nodes,
        "gain-first ordering should reduce nodes: {} vs {}",
        r2.nodes,
        r1.nodes
    );
}
