use anyhow::Result;
use regex::Regex;

pub fn solve(part: u8, input: &str) -> Result<String> {
    let instruction = Regex::new(r"mul\((\d+),(\d+)\)|do\(\)|don't\(\)")?;
    let (_, total) = instruction.captures_iter(input).try_fold(
        (true, 0u64),
        |(enabled, total), caps| -> Result<_> {
            Ok(match &caps[0] {
                "do()" => (true, total),
                "don't()" => (part == 1, total),
                _ if enabled => (enabled, total + caps[1].parse::<u64>()? * caps[2].parse::<u64>()?),
                _ => (enabled, total),
            })
        },
    )?;
    Ok(total.to_string())
}
