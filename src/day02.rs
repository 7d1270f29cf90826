use crate::parse::{lines, numbers};
use anyhow::Result;

fn gentle_rise(from: i64, to: i64) -> bool {
    (1 ..= 3).contains(&(to - from))
}

/// Single pass; the dampener may drop one level, trying the later one first.
fn safe_ascending(report: &[i64], mut dampener: bool) -> bool {
    let mut i = 0;
    while i + 1 < report.len() {
        if gentle_rise(report[i], report[i + 1]) {
            i += 1;
            continue;
        }
        if !dampener {return false}
        dampener = false;
        if i + 2 == report.len() || gentle_rise(report[i], report[i + 2]) {
            i += 2;
        } else if i == 0 || gentle_rise(report[i - 1], report[i + 1]) {
            i += 1;
        } else {
            return false;
        }
    }
    true
}

fn safe(report: &[i64], dampener: bool) -> bool {
    let descending = report.iter().map(|level| -level).collect::<Vec<_>>();
    safe_ascending(report, dampener) || safe_ascending(&descending, dampener)
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let reports = lines(input).map(numbers::<i64>).collect::<Result<Vec<_>>>()?;
    Ok(reports.iter().filter(|report| safe(report, part == 2)).count().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dampener_drops_either_side_of_a_bad_step() {
        assert!(safe(&[1, 3, 2, 4, 5], true));
        assert!(safe(&[8, 6, 4, 4, 1], true));
        assert!(!safe(&[1, 3, 2, 4, 5], false));
        assert!(safe(&[5, 1, 2, 3], true));
        assert!(safe(&[1, 2, 3, 9], true));
        assert!(!safe(&[1, 2, 7, 8, 9], true));
        assert!(!safe(&[9, 7, 6, 2, 1], true));
    }
}
