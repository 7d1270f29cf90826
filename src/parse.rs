use anyhow::{Context, Result};
use std::str::FromStr;

/// Every integer in `s`, in order. A `-` directly before digits makes it negative.
pub fn numbers<T>(s: &str) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    s.split(|c: char| !(c.is_ascii_digit() || c == '-'))
     .filter(|token| !token.is_empty())
     .map(|token| token.parse().with_context(|| format!("bad number {:?}", token)))
     .collect()
}

pub fn lines(input: &str) -> impl Iterator<Item = &str> {
    input.lines().map(str::trim_end).filter(|line| !line.is_empty())
}

/// Groups of consecutive non-blank lines.
pub fn paragraphs(input: &str) -> Vec<Vec<&str>> {
    let mut groups = vec![vec![]];
    for line in input.lines().map(str::trim_end) {
        match (line.is_empty(), groups.last_mut()) {
            (true, Some(last)) if !last.is_empty() => groups.push(vec![]),
            (false, Some(last)) => last.push(line),
            _ => (),
        }
    }
    groups.retain(|group| !group.is_empty());
    groups
}
