use crate::parse::paragraphs;
use anyhow::{bail, ensure, Result};
use arrayvec::ArrayVec;
use itertools::Itertools;

type Heights = ArrayVec<u8, 8>;

/// Filled cells per column, full top or bottom row included.
fn heights(schematic: &[&str]) -> Result<Heights> {
    let mut heights = Heights::new();
    for line in schematic {
        ensure!(line.len() <= heights.capacity(), "schematic is too wide");
        if heights.is_empty() {
            heights.extend(std::iter::repeat(0).take(line.len()));
        }
        ensure!(line.len() == heights.len(), "ragged schematic");
        for (h, c) in heights.iter_mut().zip(line.bytes()) {
            *h += (c == b'#') as u8;
        }
    }
    Ok(heights)
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    if part != 1 {
        bail!("the last day has a single part");
    }
    let mut locks = vec![];
    let mut keys = vec![];
    let mut rows = None;
    for schematic in paragraphs(input) {
        ensure!(*rows.get_or_insert(schematic.len()) == schematic.len(), "schematics differ in height");
        let is_lock = schematic[0].bytes().all(|c| c == b'#');
        if is_lock {locks.push(heights(&schematic)?)} else {keys.push(heights(&schematic)?)}
    }
    let rows = rows.unwrap_or(0);
    let fits = locks.iter().cartesian_product(&keys).filter(|(lock, key)| {
        lock.len() == key.len() && lock.iter().zip(key.iter()).all(|(l, k)| (l + k) as usize <= rows)
    }).count();
    Ok(fits.to_string())
}
