use gomoku::board::{Board, Color};
use gomoku::gomoku_search::solve_position;
use gomoku::proof_searcher::{SearchContext, TimeBudget};

use criterion::{criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("solve 7x7 opening at depth 2", |b| {
        b.iter(solve_opening)
    });
    c.bench_function("solve 7x7 open four at depth 2", |b| {
        b.iter(solve_open_four)
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn solve(position: &str, color: Color) {
    let mut board: Board = position.parse().unwrap();
    let mut context = SearchContext::with_time_budget(2, TimeBudget::from_secs(60));
    solve_position(&mut context, &mut board, color).unwrap();
}

fn solve_opening() {
    solve(
        ".......\
         /.......\
         /.......\
         /...X...\
         /...O...\
         /.......\
         /.......",
        Color::Black,
    );
}

fn solve_open_four() {
    solve(
        ".......\
         /.......\
         /.......\
         /.......\
         /.......\
         /OOO.O..\
         /XXXX...",
        Color::Black,
    );
}
