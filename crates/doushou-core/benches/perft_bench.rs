use criterion::{black_box, criterion_group, criterion_main, Criterion};
use doushou_core::{generate_moves_for_side, Board, Side};

fn perft(board: &mut Board, side: Side, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_moves_for_side(board, side);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        let displaced = board.make_move(mv);
        nodes += perft(board, side.opponent(), depth - 1);
        board.unmake_move(mv, displaced);
    }
    nodes
}

fn perft_cloning(board: &Board, side: Side, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    generate_moves_for_side(board, side)
        .into_iter()
        .map(|mv| {
            let mut child = board.clone();
            child.make_move(mv);
            perft_cloning(&child, side.opponent(), depth - 1)
        })
        .sum()
}

fn perft_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.sample_size(10);

    group.bench_function("start_depth_2", |b| {
        let mut board = Board::new();
        b.iter(|| perft(&mut board, Side::A, black_box(2)))
    });

    group.bench_function("start_depth_3", |b| {
        let mut board = Board::new();
        b.iter(|| perft(&mut board, Side::A, black_box(3)))
    });

    group.bench_function("start_depth_3_cloning", |b| {
        let board = Board::new();
        b.iter(|| perft_cloning(&board, Side::A, black_box(3)))
    });

    group.finish();
}

criterion_group!(benches, perft_benchmarks);
criterion_main!(benches);
