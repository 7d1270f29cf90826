use crate::parse::{lines, numbers};
use anyhow::{bail, Result};
use itertools::Itertools;
use std::iter::zip;

fn parse(input: &str) -> Result<(Vec<i64>, Vec<i64>)> {
    let mut lefts = vec![];
    let mut rights = vec![];
    for line in lines(input) {
        let [left, right] = numbers::<i64>(line)?[..] else {
            bail!("cannot parse {:?} as two numbers", line)
        };
        lefts.push(left);
        rights.push(right);
    }
    Ok((lefts, rights))
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let (mut lefts, mut rights) = parse(input)?;
    let answer = if part == 1 {
        lefts.sort_unstable();
        rights.sort_unstable();
        zip(lefts, rights).map(|(left, right)| (left - right).abs()).sum::<i64>()
    } else {
        let occurrences = rights.iter().counts();
        lefts.iter()
             .map(|left| left * occurrences.get(left).copied().unwrap_or(0) as i64)
             .sum()
    };
    Ok(answer.to_string())
}
