use crate::parse::{lines, numbers};
use anyhow::{bail, Result};

fn concat(left: u64, right: u64) -> Option<u64> {
    let shift = 10u64.checked_pow(right.checked_ilog10().map_or(1, |digits| digits + 1))?;
    left.checked_mul(shift)?.checked_add(right)
}

/// Evaluates left to right, dropping partial results that overshoot.
fn calibrates(target: u64, numbers: &[u64], concatenation: bool) -> bool {
    let Some((&first, rest)) = numbers.split_first() else {return false};
    let mut values = vec![first];
    for &n in rest {
        values = values.iter().flat_map(|&v| [
            v.checked_add(n),
            v.checked_mul(n),
            if concatenation {concat(v, n)} else {None},
        ]).flatten().filter(|&v| v <= target).collect();
    }
    values.contains(&target)
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let mut total = 0;
    for line in lines(input) {
        let Some((target, operands)) = line.split_once(':') else {
            bail!("missing ':' in {:?}", line)
        };
        let target = target.trim().parse::<u64>()?;
        if calibrates(target, &numbers::<u64>(operands)?, part == 2) {
            total += target;
        }
    }
    Ok(total.to_string())
}
