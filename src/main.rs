use anyhow::Context;
use aoc2024::answers::{Answers, Verdict};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// Advent of Code 2024 solutions.
#[derive(Debug, Parser)]
#[command(name = "aoc2024", version, about)]
struct Cli {
    /// Day to solve
    #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
    day: u8,

    /// Part to solve, every part if omitted
    #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
    part: Option<u8>,

    /// Solve example N (`day{DAY}test{N}.in`) instead of the puzzle input
    #[arg(short, long)]
    test: Option<u32>,

    /// Directory holding the inputs
    #[arg(short, long, env = "AOC_INPUTS", default_value = "inputs")]
    inputs: PathBuf,

    /// Known answers [default: answers.toml in the inputs directory]
    #[arg(short, long)]
    answers: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    aoc2024::logging::init();
    let cli = Cli::parse();
    let day = cli.day as usize;

    let stem = match cli.test {
        Some(test) => format!("day{}test{}", day, test),
        None => format!("day{}", day),
    };
    let path = cli.inputs.join(format!("{}.in", stem));
    info!(path = %path.display(), "reading input");
    let input = std::fs::read_to_string(&path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let answers = Answers::load(&cli.answers.unwrap_or_else(|| cli.inputs.join("answers.toml")))?;

    let parts = match cli.part {
        Some(part) => part ..= part,
        None => 1 ..= aoc2024::parts(day),
    };
    for part in parts {
        let time = Instant::now();
        let answer = aoc2024::solve(day, part, &input)?;
        let elapsed = time.elapsed();
        let verdict = answers.check(&stem, part, &answer)?;
        println!("part {}: {}{}", part, answer, if verdict == Verdict::Correct {" (correct)"} else {""});
        println!("{} seconds elapsed", elapsed.as_secs_f32());
    }
    Ok(())
}
