use crate::parse::paragraphs;
use anyhow::{bail, Result};

/// Number of ways to lay out `design` from `towels`, counted per suffix.
fn arrangements(design: &str, towels: &[&str]) -> u64 {
    let mut ways = vec![0u64; design.len() + 1];
    ways[design.len()] = 1;
    for start in (0 .. design.len()).rev() {
        ways[start] = towels.iter()
                            .filter(|towel| design[start ..].starts_with(**towel))
                            .map(|towel| ways[start + towel.len()])
                            .sum();
    }
    ways[0]
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let sections = paragraphs(input);
    let [towels, designs] = &sections[..] else {
        bail!("expected towels and designs, got {} sections", sections.len())
    };
    let [towels] = towels[..] else {bail!("towels must be on a single line")};
    let towels: Vec<&str> = towels.split(',').map(str::trim).filter(|t| !t.is_empty()).collect();
    let counts = designs.iter().map(|design| arrangements(design, &towels));
    let total = if part == 1 {counts.filter(|&n| n > 0).count() as u64} else {counts.sum()};
    Ok(total.to_string())
}
