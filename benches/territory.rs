//! Territory analysis benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wall_go::board::{Board, Cell, Side};
use wall_go::core::Player;
use wall_go::rules::{reachable_from, Territory};

/// A 7x7 board with eight pieces and a scatter of walls.
fn midgame_board() -> Board {
    let mut board = Board::new(7);
    let pieces = [
        (1, 1, Player::Red),
        (5, 5, Player::Red),
        (3, 3, Player::Red),
        (3, 0, Player::Red),
        (1, 5, Player::Blue),
        (5, 1, Player::Blue),
        (0, 0, Player::Blue),
        (6, 6, Player::Blue),
    ];
    for (x, y, owner) in pieces {
        board.add_piece(Cell::new(x, y), owner);
    }
    for y in 0..7 {
        board.add_wall(Cell::new(2, y), Side::Right, Player::Red);
    }
    for x in 3..7 {
        board.add_wall(Cell::new(x, 3), Side::Bottom, Player::Blue);
    }
    board
}

fn bench_analyze(c: &mut Criterion) {
    let open = Board::new(7);
    let midgame = midgame_board();

    c.bench_function("territory_open_7x7", |b| {
        b.iter(|| Territory::analyze(black_box(&open)))
    });
    c.bench_function("territory_midgame_7x7", |b| {
        b.iter(|| Territory::analyze(black_box(&midgame)).winner())
    });
}

fn bench_reachable(c: &mut Criterion) {
    let board = midgame_board();
    c.bench_function("reachable_budget_2", |b| {
        b.iter(|| reachable_from(black_box(&board), Cell::new(3, 3), 2))
    });
}

criterion_group!(benches, bench_analyze, bench_reachable);
criterion_main!(benches);
