use ataxxbot::board::rules::is_legal;
use ataxxbot::board::{Board, Move, Player};
use ataxxbot::search::{SearchParams, Searcher};

#[test]
fn decide_returns_legal_move_on_fresh_board() {
    let board = Board::from_sketch(&[
        "1....2",
        "......",
        "......",
        "......",
        "......",
        "2....1",
    ])
    .expect("valid sketch");
    let mut params = SearchParams::default();
    params.movetime_ms = 300;
    let mut searcher = Searcher::new(params);
    let mv = searcher
        .decide(&board, Player::P1, Player::P2)
        .expect("fresh board has moves");
    assert!(is_legal(&board, mv, Player::P1), "chose illegal move {mv}");
}

#[test]
fn decide_returns_none_for_an_eliminated_player() {
    let board = Board::from_sketch(&["....", ".2..", "..2.", "...."]).expect("valid sketch");
    let mut searcher = Searcher::default();
    assert_eq!(searcher.decide(&board, Player::P1, Player::P2), None);
}

#[test]
fn search_takes_the_eliminating_capture_at_depth_one() {
    // Duplicating into (2,2) flips every remaining opponent disc; anything
    // else leaves P2 alive.
    let board = Board::from_sketch(&["....", ".22.", ".2..", "...1"]).expect("valid sketch");
    let mut params = SearchParams::default();
    params.max_depth = 1;
    params.movetime_ms = 1_000;
    let mut searcher = Searcher::new(params);
    let result = searcher.search(&board, Player::P1, Player::P2);
    assert_eq!(result.depth, 1);
    assert_eq!(result.best, Some(Move::new((3, 3), (2, 2))));
}

#[test]
fn deeper_search_still_returns_a_legal_move() {
    let board = Board::from_sketch(&["1...2", ".....", "..#..", ".....", "2...1"])
        .expect("valid sketch");
    let mut params = SearchParams::default();
    params.max_depth = 5;
    params.movetime_ms = 500;
    let mut searcher = Searcher::new(params);
    let result = searcher.search(&board, Player::P1, Player::P2);
    let mv = result.best.expect("moves exist");
    assert!(is_legal(&board, mv, Player::P1));
    assert!(result.depth >= 1, "at least depth 1 should complete");
}

#[test]
fn root_cap_truncates_but_never_empties_the_candidate_list() {
    let board = Board::from_sketch(&["1...", "....", "....", "...2"]).expect("valid sketch");
    let mut params = SearchParams::default();
    params.max_depth = 2;
    params.movetime_ms = 500;
    params.root_cap = Some(1);
    let mut searcher = Searcher::new(params);
    let mv = searcher
        .decide(&board, Player::P1, Player::P2)
        .expect("capped root still yields a move");
    assert!(is_legal(&board, mv, Player::P1));
}
