//! Benchmarks for the daily solvers over the puzzle examples.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use aoc2024::{day11, day14, day18, day20};

/// Benchmark both parts of every day on its first example.
fn bench_examples(c: &mut Criterion) {
    let examples = [
        (1, include_str!("../inputs/day1test1.in")),
        (2, include_str!("../inputs/day2test1.in")),
        (3, include_str!("../inputs/day3test2.in")),
        (4, include_str!("../inputs/day4test1.in")),
        (5, include_str!("../inputs/day5test1.in")),
        (6, include_str!("../inputs/day6test1.in")),
        (7, include_str!("../inputs/day7test1.in")),
        (8, include_str!("../inputs/day8test1.in")),
        (9, include_str!("../inputs/day9test1.in")),
        (10, include_str!("../inputs/day10test1.in")),
        (12, include_str!("../inputs/day12test3.in")),
        (13, include_str!("../inputs/day13test1.in")),
        (15, include_str!("../inputs/day15test1.in")),
        (16, include_str!("../inputs/day16test2.in")),
        (17, include_str!("../inputs/day17test1.in")),
        (19, include_str!("../inputs/day19test1.in")),
        (21, include_str!("../inputs/day21test1.in")),
        (22, include_str!("../inputs/day22test1.in")),
        (23, include_str!("../inputs/day23test1.in")),
        (25, include_str!("../inputs/day25test1.in")),
    ];
    let mut group = c.benchmark_group("examples");
    for (day, input) in examples {
        for part in 1 ..= aoc2024::parts(day) {
            group.bench_function(format!("day{:02}_part{}", day, part), |b| {
                b.iter(|| aoc2024::solve(day, part, black_box(input)))
            });
        }
    }
    group.finish();
}

/// Benchmark the parameterised helpers at example sizes.
fn bench_helpers(c: &mut Criterion) {
    c.bench_function("day11_blink_75", |b| {
        b.iter(|| day11::count_stones(black_box(&[125, 17]), 75))
    });

    let robots = day14::parse(include_str!("../inputs/day14test1.in")).unwrap();
    let room = day14::Room::new(11, 7).unwrap();
    c.bench_function("day14_easter_egg", |b| {
        b.iter(|| day14::easter_egg_time(black_box(&robots), room))
    });

    let bytes = day18::parse(include_str!("../inputs/day18test1.in")).unwrap();
    c.bench_function("day18_first_blocker", |b| {
        b.iter(|| day18::first_blocker(black_box(&bytes), 6))
    });

    c.bench_function("day20_long_cheats", |b| {
        b.iter(|| day20::count_cheats(black_box(include_str!("../inputs/day20test1.in")), 20, 50))
    });

    c.bench_function("day24_wires", |b| {
        b.iter(|| aoc2024::solve(24, 1, black_box(include_str!("../inputs/day24test1.in"))))
    });
}

criterion_group!(benches, bench_examples, bench_helpers);
criterion_main!(benches);
