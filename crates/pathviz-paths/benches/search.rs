use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use pathviz_core::{Board, Point, scatter_barriers};
use pathviz_paths::{Algorithm, NoRedraw};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn scattered_board(rows: i32, density: f64) -> (Board, Point, Point) {
    let start = Point::new(0, 0);
    let end = Point::new(rows - 1, rows - 1);
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut board = Board::new(rows);
    scatter_barriers(&mut board, density, &mut rng, &[start, end]);
    board.update_neighbors();
    (board, start, end)
}

fn bench_board(c: &mut Criterion, rows: i32) {
    let (board, start, end) = scattered_board(rows, 0.25);
    let mut group = c.benchmark_group(format!("board_{rows}"));
    for algo in Algorithm::ALL {
        group.bench_function(algo.name(), |b| {
            b.iter_batched(
                || board.clone(),
                |mut board| algo.run(&mut board, black_box(start), black_box(end), &mut NoRedraw),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

pub fn board_small(c: &mut Criterion) {
    bench_board(c, 50);
}

pub fn board_large(c: &mut Criterion) {
    bench_board(c, 120);
}

criterion_group!(benches, board_small, board_large);
criterion_main!(benches);
