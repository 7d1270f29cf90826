use anyhow::{ensure, Result};
use regex::Regex;

#[derive(Clone, Copy, Debug)]
struct Machine {
    a: (i64, i64),
    b: (i64, i64),
    prize: (i64, i64),
}

const PRIZE_OFFSET: i64 = 10_000_000_000_000;

fn parse(input: &str) -> Result<Vec<Machine>> {
    let re = Regex::new(concat!(
        r"Button A: X\+(\d+), Y\+(\d+)\s+",
        r"Button B: X\+(\d+), Y\+(\d+)\s+",
        r"Prize: X=(\d+), Y=(\d+)",
    ))?;
    let machines = re.captures_iter(input).map(|caps| -> Result<Machine> {
        let n = |i: usize| caps[i].parse::<i64>();
        Ok(Machine { a: (n(1)?, n(2)?), b: (n(3)?, n(4)?), prize: (n(5)?, n(6)?) })
    }).collect::<Result<Vec<_>>>()?;
    ensure!(!machines.is_empty(), "no claw machines found");
    Ok(machines)
}

/// Fewest tokens (3 per A press, 1 per B press) to reach the prize exactly.
fn tokens(m: Machine) -> Option<i64> {
    let Machine { a: (ax, ay), b: (bx, by), prize: (px, py) } = m;
    let det = ax * by - ay * bx;
    if det != 0 {
        let a = px * by - py * bx;
        let b = ax * py - ay * px;
        if a % det != 0 || b % det != 0 {return None}
        let (a, b) = (a / det, b / det);
        return (a >= 0 && b >= 0).then_some(3 * a + b);
    }

    // Collinear buttons. Cost is linear along the line of solutions, so the
    // cheapest is either the one with fewest A presses or fewest B presses,
    // and each of those needs fewer presses than the other button's step.
    let reaches = |a: i64, b: i64| {
        a >= 0 && b >= 0 && a * ax + b * bx == px && a * ay + b * by == py
    };
    let (ua, ub, p) = if ax != 0 || bx != 0 {(ax, bx, px)} else {(ay, by, py)};
    let rest_presses = |n: i64, step: i64, unit: i64| {
        let rest = p - n * step;
        if unit == 0 {(rest == 0).then_some(0)} else {(rest % unit == 0).then_some(rest / unit)}
    };
    let fewest_a = (0 ..= ub.abs()).map(|a| (a, rest_presses(a, ua, ub)))
                                    .find_map(|(a, b)| b.filter(|&b| reaches(a, b)).map(|b| (a, b)));
    let fewest_b = (0 ..= ua.abs()).map(|b| (b, rest_presses(b, ub, ua)))
                                    .find_map(|(b, a)| a.filter(|&a| reaches(a, b)).map(|a| (a, b)));
    fewest_a.into_iter().chain(fewest_b).map(|(a, b)| 3 * a + b).min()
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let offset = if part == 1 {0} else {PRIZE_OFFSET};
    let total: i64 = parse(input)?.into_iter().filter_map(|mut m| {
        m.prize.0 += offset;
        m.prize.1 += offset;
        tokens(m)
    }).sum();
    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collinear_buttons_pick_the_cheaper_one() {
        let m = Machine { a: (2, 2), b: (1, 1), prize: (10, 10) };
        assert_eq!(tokens(m), Some(10));
        let m = Machine { a: (4, 4), b: (1, 1), prize: (12, 12) };
        assert_eq!(tokens(m), Some(9));
        let m = Machine { a: (2, 2), b: (4, 4), prize: (3, 3) };
        assert_eq!(tokens(m), None);
        let m = Machine { a: (2, 2), b: (3, 3), prize: (5, 5) };
        assert_eq!(tokens(m), Some(4));
    }

    #[test]
    fn unreachable_prize() {
        let m = Machine { a: (26, 66), b: (67, 21), prize: (12748, 12176) };
        assert_eq!(tokens(m), None);
        let m = Machine { a: (94, 34), b: (22, 67), prize: (8400, 5400) };
        assert_eq!(tokens(m), Some(280));
    }
}
