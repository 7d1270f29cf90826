use crate::parse::lines;
use anyhow::{bail, ensure, Context, Result};
use arrayvec::ArrayVec;
use rustc_hash::FxHashMap;

/// Key positions with `y` growing upward; the gap sits at (0, 0) on the
/// numeric keypad and at (0, 1) on the directional one.
fn key_position(numpad: bool, key: u8) -> Option<(i64, i64)> {
    Some(match (numpad, key) {
        (true, b'7') => (0, 3), (true, b'8') => (1, 3), (true, b'9') => (2, 3),
        (true, b'4') => (0, 2), (true, b'5') => (1, 2), (true, b'6') => (2, 2),
        (true, b'1') => (0, 1), (true, b'2') => (1, 1), (true, b'3') => (2, 1),
        (true, b'0') => (1, 0), (true, b'A') => (2, 0),
        (false, b'^') => (1, 1), (false, b'A') => (2, 1),
        (false, b'<') => (0, 0), (false, b'v') => (1, 0), (false, b'>') => (2, 0),
        _ => return None,
    })
}

/// Directional presses that move the arm from `from` to `to` and press it.
/// Going left, horizontal moves come first; going right, vertical ones do,
/// unless that order would sweep over the gap.
fn moves(numpad: bool, from: u8, to: u8) -> Result<ArrayVec<u8, 6>> {
    let position = |key: u8| key_position(numpad, key).with_context(|| format!("no key {:?}", key as char));
    let ((from_x, from_y), (to_x, to_y)) = (position(from)?, position(to)?);
    let (dx, dy) = (to_x - from_x, to_y - from_y);
    let gap_row = if numpad {0} else {1};
    let horizontal = std::iter::repeat(if dx > 0 {b'>'} else {b'<'}).take(dx.unsigned_abs() as usize);
    let vertical = std::iter::repeat(if dy > 0 {b'^'} else {b'v'}).take(dy.unsigned_abs() as usize);
    let mut presses = ArrayVec::new();
    if (to_x == 0 && from_y == gap_row) || (!(from_x == 0 && to_y == gap_row) && dx > 0) {
        presses.extend(vertical.chain(horizontal));
    } else {
        presses.extend(horizontal.chain(vertical));
    }
    presses.push(b'A');
    Ok(presses)
}

struct Keypads {
    memo: FxHashMap<(u8, u8, u32, bool), u64>,
}

impl Keypads {
    /// Human presses needed for the arm `level` keypads up the chain to go
    /// from `from` to `to` and press it.
    fn presses(&mut self, from: u8, to: u8, level: u32, numpad: bool) -> Result<u64> {
        if level == 0 {return Ok(1)}
        if let Some(&n) = self.memo.get(&(from, to, level, numpad)) {return Ok(n)}
        let mut total = 0;
        let mut arm = b'A';
        for key in moves(numpad, from, to)? {
            total += self.presses(arm, key, level - 1, false)?;
            arm = key;
        }
        self.memo.insert((from, to, level, numpad), total);
        Ok(total)
    }

    fn code(&mut self, code: &str, robots: u32) -> Result<u64> {
        let mut total = 0;
        let mut arm = b'A';
        for key in code.bytes() {
            total += self.presses(arm, key, robots + 1, true)?;
            arm = key;
        }
        Ok(total)
    }
}

pub fn complexity(input: &str, robots: u32) -> Result<u64> {
    let mut keypads = Keypads { memo: FxHashMap::default() };
    let mut sum = 0;
    for code in lines(input) {
        let Some(digits) = code.strip_suffix('A') else {bail!("code {:?} does not end in A", code)};
        ensure!(digits.bytes().all(|b| b.is_ascii_digit()), "bad code {:?}", code);
        sum += keypads.code(code, robots)? * digits.parse::<u64>()?;
    }
    Ok(sum)
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let robots = if part == 1 {2} else {25};
    Ok(complexity(input, robots)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_avoid_the_gap() {
        assert_eq!(&moves(true, b'A', b'1').unwrap()[..], b"^<<A");
        assert_eq!(&moves(true, b'1', b'A').unwrap()[..], b">>vA");
        assert_eq!(&moves(false, b'<', b'A').unwrap()[..], b">>^A");
        assert_eq!(&moves(false, b'A', b'<').unwrap()[..], b"v<<A");
        assert_eq!(&moves(true, b'A', b'A').unwrap()[..], b"A");
    }

    #[test]
    fn single_code() {
        assert_eq!(complexity("029A\n", 2).unwrap(), 68 * 29);
    }
}
