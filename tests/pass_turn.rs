use ataxxbot::board::rules::{check_endgame, is_legal, legal_moves};
use ataxxbot::board::{Board, Player};
use ataxxbot::search::{SearchParams, Searcher};

// P1's lone corner disc is walled in: every cell within two steps is an
// obstacle. P2 is free in the opposite corner.
fn blocked_p1_board() -> Board {
    Board::from_sketch(&["1##..", "###..", "###..", ".....", "....2"]).expect("valid sketch")
}

#[test]
fn blocked_side_is_not_terminal() {
    let board = blocked_p1_board();
    assert!(legal_moves(&board, Player::P1).is_empty());
    assert!(!legal_moves(&board, Player::P2).is_empty());
    let end = check_endgame(&board);
    assert!(
        !end.over,
        "one blocked side with empties left must not end the game"
    );
}

#[test]
fn decide_passes_only_when_no_moves_exist() {
    let board = blocked_p1_board();
    let mut params = SearchParams::default();
    params.movetime_ms = 200;
    let mut searcher = Searcher::new(params);

    assert_eq!(
        searcher.decide(&board, Player::P1, Player::P2),
        None,
        "a blocked player passes"
    );

    let mv = searcher
        .decide(&board, Player::P2, Player::P1)
        .expect("P2 has moves");
    assert!(is_legal(&board, mv, Player::P2));
}

#[test]
fn search_keeps_deepening_through_an_opponent_pass() {
    // Searching for P2: in-tree, P1 has no reply, so the recursion must
    // hand the turn back to P2 instead of treating the node as terminal.
    let board = blocked_p1_board();
    let mut params = SearchParams::default();
    params.max_depth = 4;
    params.movetime_ms = 5_000;
    let mut searcher = Searcher::new(params);
    let result = searcher.search(&board, Player::P2, Player::P1);
    assert!(result.best.is_some());
    assert_eq!(result.depth, 4, "all four plies should complete");
    assert!(result.nodes > 0);
}
