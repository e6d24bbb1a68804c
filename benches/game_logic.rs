use criterion::{black_box, criterion_group, criterion_main, Criterion};
use match3_tui::core::{resolve_cascade, shift_columns, Board, PendingSet, RandomSource, SimpleRng};
use match3_tui::types::DEFAULT_COLOR_COUNT;

/// 10x10 board drawn from three colors, so it is full of runs.
fn noisy_board(seed: u32) -> Board {
    let mut rng = SimpleRng::new(seed);
    let colors: Vec<u8> = (0..100).map(|_| rng.next_range(3) as u8 + 1).collect();
    Board::from_colors(10, 10, &colors).unwrap_or_default()
}

fn bench_seed(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    c.bench_function("seed_10x10", |b| {
        b.iter(|| Board::seed(black_box(10), black_box(10), DEFAULT_COLOR_COUNT, &mut rng))
    });
}

fn bench_cascade(c: &mut Criterion) {
    let template = noisy_board(7);
    c.bench_function("resolve_cascade_10x10", |b| {
        b.iter(|| {
            let mut board = template.clone();
            let mut pending = PendingSet::new(board.len());
            let mut points = 0;
            resolve_cascade(&mut board, &mut pending, &mut points);
            black_box(points)
        })
    });
}

fn bench_shift(c: &mut Criterion) {
    let mut template = noisy_board(7);
    let mut pending = PendingSet::new(template.len());
    let mut points = 0;
    resolve_cascade(&mut template, &mut pending, &mut points);
    let mut rng = SimpleRng::new(99);

    c.bench_function("shift_columns_10x10", |b| {
        b.iter(|| {
            let mut board = template.clone();
            shift_columns(&mut board, &pending, DEFAULT_COLOR_COUNT, &mut rng).map(|f| f.len())
        })
    });
}

criterion_group!(benches, bench_seed, bench_cascade, bench_shift);
criterion_main!(benches);
