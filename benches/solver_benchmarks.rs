use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ramify::{
    examples::{
        map_colouring::{map_colouring_problem, Colour},
        sudoku::sudoku_problem,
    },
    solver::{
        assignment::Assignment,
        engine::{solve, solve_mrv_lcv},
    },
};

fn bench_sudoku(c: &mut Criterion) {
    let mut group = c.benchmark_group("sudoku_blank");
    for board_size in [4usize, 9] {
        let problem = sudoku_problem(board_size).unwrap();
        group.bench_with_input(
            BenchmarkId::new("default", board_size),
            &problem,
            |b, problem| b.iter(|| solve(black_box(problem), Assignment::blank())),
        );
        group.bench_with_input(
            BenchmarkId::new("mrv_lcv", board_size),
            &problem,
            |b, problem| b.iter(|| solve_mrv_lcv(black_box(problem), Assignment::blank())),
        );
    }
    group.finish();
}

fn bench_map_colouring(c: &mut Criterion) {
    let regions = ["WA", "NT", "SA", "Q", "NSW", "V"];
    let borders = [
        (0, 1),
        (0, 2),
        (1, 2),
        (1, 3),
        (2, 3),
        (2, 4),
        (2, 5),
        (3, 4),
        (4, 5),
    ];
    let colours = [Colour::Red, Colour::Green, Colour::Blue];
    let problem = map_colouring_problem(&regions, &borders, &colours).unwrap();

    let mut group = c.benchmark_group("map_colouring_australia");
    group.bench_function("default", |b| {
        b.iter(|| solve(black_box(&problem), Assignment::blank()))
    });
    group.bench_function("mrv_lcv", |b| {
        b.iter(|| solve_mrv_lcv(black_box(&problem), Assignment::blank()))
    });
    group.finish();
}

criterion_group!(benches, bench_sudoku, bench_map_colouring);
criterion_main!(benches);
