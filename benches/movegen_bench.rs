use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ataxxbot::board::rules::{apply_move, legal_moves};
use ataxxbot::board::{Board, Player};

fn midgame_board() -> Board {
    Board::from_sketch(&[
        "11...22",
        "1......",
        "..#.#..",
        "...12..",
        "..#.#..",
        "2......",
        "22...11",
    ])
    .expect("valid sketch")
}

fn bench_movegen(c: &mut Criterion) {
    let board = midgame_board();
    c.bench_function("legal_moves_7x7", |ben| {
        ben.iter(|| black_box(legal_moves(black_box(&board), Player::P1)).len())
    });

    c.bench_function("clone_and_apply_7x7", |ben| {
        let mv = legal_moves(&board, Player::P1)[0];
        ben.iter(|| {
            let mut child = black_box(&board).clone();
            apply_move(&mut child, mv, Player::P1).expect("legal move");
            black_box(child)
        })
    });
}

criterion_group!(benches, bench_movegen);
criterion_main!(benches);
