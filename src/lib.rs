//! Advent of Code 2024, one module per day.
//!
//! Every day exposes `solve(part, input)`, returning the answer as text.
//! Days with puzzle-size parameters also expose the parameterised helpers
//! the examples need.

pub mod answers;
mod error;
pub mod grid;
pub mod logging;
pub mod parse;

pub mod day01;
pub mod day02;
pub mod day03;
pub mod day04;
pub mod day05;
pub mod day06;
pub mod day07;
pub mod day08;
pub mod day09;
pub mod day10;
pub mod day11;
pub mod day12;
pub mod day13;
pub mod day14;
pub mod day15;
pub mod day16;
pub mod day17;
pub mod day18;
pub mod day19;
pub mod day20;
pub mod day21;
pub mod day22;
pub mod day23;
pub mod day24;
pub mod day25;

pub use error::Error;

pub type Solver = fn(u8, &str) -> anyhow::Result<String>;

pub const DAYS: [Solver; 25] = [
    day01::solve, day02::solve, day03::solve, day04::solve, day05::solve,
    day06::solve, day07::solve, day08::solve, day09::solve, day10::solve,
    day11::solve, day12::solve, day13::solve, day14::solve, day15::solve,
    day16::solve, day17::solve, day18::solve, day19::solve, day20::solve,
    day21::solve, day22::solve, day23::solve, day24::solve, day25::solve,
];

/// Number of parts a day has; the last day has only one.
pub fn parts(day: usize) -> u8 {
    if day == 25 {1} else {2}
}

pub fn solve(day: usize, part: u8, input: &str) -> Result<String, Error> {
    let solver = day.checked_sub(1).and_then(|i| DAYS.get(i)).ok_or(Error::UnknownDay(day))?;
    if part == 0 || part > parts(day) {
        return Err(Error::UnknownPart { day, part });
    }
    solver(part, input).map_err(|cause| Error::Solve { day, part, cause })
}
