use criterion::{black_box, criterion_group, criterion_main, Criterion};
use doushou_core::{generate_moves, outcome, parse_board, Board, STARTING_POSITION};

const MIDGAME_POSITION: &str = "2L4/1m5/1T3C1/7/3e3/2M4/1l3W1/3h3/7";

fn movegen_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");
    group.sample_size(100);

    let start = Board::new();
    group.bench_function("starting_position", |b| {
        b.iter(|| generate_moves(black_box(&start)))
    });

    let midgame = parse_board(MIDGAME_POSITION).expect("parse");
    group.bench_function("midgame_position", |b| {
        b.iter(|| generate_moves(black_box(&midgame)))
    });

    group.bench_function("outcome_starting_position", |b| {
        b.iter(|| outcome(black_box(&start)))
    });

    group.bench_function("parse_starting_position", |b| {
        b.iter(|| parse_board(black_box(STARTING_POSITION)))
    });

    group.finish();
}

criterion_group!(benches, movegen_benchmarks);
criterion_main!(benches);
