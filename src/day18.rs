use crate::grid::{pos, Grid, Pos};
use crate::parse::{lines, numbers};
use anyhow::{bail, ensure, Context, Result};

/// Coordinates run from 0 to `SIZE` inclusive on both axes.
pub const SIZE: u32 = 70;
pub const FIRST_FALLEN: usize = 1024;

pub fn parse(input: &str) -> Result<Vec<Pos>> {
    lines(input).map(|line| -> Result<Pos> {
        match numbers::<i64>(line)?[..] {
            [x, y] => Ok(pos(x, y)),
            _ => bail!("expected x,y in {:?}", line),
        }
    }).collect()
}

/// Steps from the top left to the bottom right corner once `bytes` have fallen.
pub fn shortest_path(bytes: &[Pos], size: u32) -> Option<u32> {
    let side = size as usize + 1;
    let exit = pos(size.into(), size.into());
    let mut corrupted = Grid::filled(side, side, false);
    for &p in bytes {
        if let Some(cell) = corrupted.get_mut(p) {*cell = true}
    }
    if corrupted[pos(0, 0)] {return None}
    corrupted.distances(pos(0, 0), |&c| !c)[exit]
}

/// The byte that first cuts the exit off, found by bisecting on how many
/// bytes have fallen.
pub fn first_blocker(bytes: &[Pos], size: u32) -> Option<Pos> {
    let reachable = |fallen: usize| shortest_path(&bytes[.. fallen], size).is_some();
    if reachable(bytes.len()) {return None}
    let (mut open, mut blocked) = (0, bytes.len());
    while blocked - open > 1 {
        let mid = (open + blocked) / 2;
        if reachable(mid) {open = mid} else {blocked = mid}
    }
    Some(bytes[blocked - 1])
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let bytes = parse(input)?;
    let coords = 0 ..= i64::from(SIZE);
    ensure!(bytes.iter().all(|p| coords.contains(&p.x) && coords.contains(&p.y)),
            "bytes must fall inside the {0}x{0} memory space", SIZE + 1);
    if part == 1 {
        ensure!(bytes.len() >= FIRST_FALLEN, "only {} bytes listed", bytes.len());
        let steps = shortest_path(&bytes[.. FIRST_FALLEN], SIZE).context("no way out")?;
        return Ok(steps.to_string());
    }
    let blocker = first_blocker(&bytes, SIZE).context("the exit is never cut off")?;
    Ok(blocker.to_string())
}
