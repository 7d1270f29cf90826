use crate::grid::{pos, Grid};
use anyhow::{Context, Result};

/// Cheats of at most `cheat_time` picoseconds that save at least
/// `min_savings` over the honest race. A cheat is identified by where it
/// starts and ends on the track.
pub fn count_cheats(input: &str, cheat_time: i64, min_savings: i64) -> Result<usize> {
    let track = Grid::parse(input)?;
    let start = track.find(&b'S').context("track has no start")?;
    let end = track.find(&b'E').context("track has no end")?;
    let from_start = track.distances(start, |&c| c != b'#');
    let to_end = track.distances(end, |&c| c != b'#');
    let honest = from_start[end].context("the end is unreachable")? as i64;

    let mut cheats = 0;
    for (cheat_start, before) in from_start.iter() {
        let Some(before) = *before else {continue};
        for dx in -cheat_time ..= cheat_time {
            let reach = cheat_time - dx.abs();
            for dy in -reach ..= reach {
                let cheat_end = cheat_start + pos(dx, dy);
                let Some(&Some(after)) = to_end.get(cheat_end) else {continue};
                let time = before as i64 + cheat_start.manhattan(cheat_end) + after as i64;
                if honest - time >= min_savings {cheats += 1}
            }
        }
    }
    Ok(cheats)
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let cheat_time = if part == 1 {2} else {20};
    Ok(count_cheats(input, cheat_time, 100)?.to_string())
}
