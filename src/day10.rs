use crate::grid::{Grid, Pos, ORTHOGONAL};
use anyhow::Result;
use rustc_hash::FxHashMap;

/// Height of cells that are not digits; no trail ever climbs onto them.
const IMPASSABLE: u8 = u8::MAX;

fn heights(input: &str) -> Result<Grid<u8>> {
    Ok(Grid::parse(input)?.map(|&b| if b.is_ascii_digit() {b - b'0'} else {IMPASSABLE}))
}

/// (distinct summits reached, distinct trails) from one trailhead.
fn hike(map: &Grid<u8>, trailhead: Pos) -> (usize, u64) {
    let mut trails = FxHashMap::from_iter([(trailhead, 1u64)]);
    for height in 1 ..= 9 {
        let mut next = FxHashMap::default();
        for (&p, &count) in &trails {
            for dir in ORTHOGONAL {
                if map.get(p + dir) == Some(&height) {
                    *next.entry(p + dir).or_insert(0) += count;
                }
            }
        }
        trails = next;
    }
    (trails.len(), trails.values().sum())
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let map = heights(input)?;
    let hikes = map.find_all(&0).map(|trailhead| hike(&map, trailhead));
    let total: u64 = if part == 1 {
        hikes.map(|(summits, _)| summits as u64).sum()
    } else {
        hikes.map(|(_, trails)| trails).sum()
    };
    Ok(total.to_string())
}
