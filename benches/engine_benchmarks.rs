//! Benchmarks for rules engine performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_rules::board::Board;

const MIDDLEGAME: &str = "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w";

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let mut board = Board::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| board.perft(black_box(depth)))
        });
    }

    let mut middlegame = Board::from_fen(MIDDLEGAME);
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("middlegame", depth), &depth, |b, &depth| {
            b.iter(|| middlegame.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = Board::new();
    group.bench_function("startpos", |b| b.iter(|| black_box(startpos.legal_moves())));

    let middlegame = Board::from_fen(MIDDLEGAME);
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middlegame.legal_moves()))
    });

    // Two pinned pieces and a knight check.
    let pinned = Board::from_fen("4r2k/8/8/b6b/4R3/3n1Q2/3B4/4K3 w");
    group.bench_function("pins_and_check", |b| {
        b.iter(|| black_box(pinned.legal_moves()))
    });

    group.finish();
}

fn bench_apply_undo(c: &mut Criterion) {
    let mut board = Board::new();
    let moves = board.legal_moves();
    c.bench_function("apply_undo_all_startpos", |b| {
        b.iter(|| {
            for &mv in moves.iter() {
                board.make_move(mv);
                board.undo_move();
            }
        })
    });
}

criterion_group!(benches, bench_perft, bench_movegen, bench_apply_undo);
criterion_main!(benches);
