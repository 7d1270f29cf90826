use crate::grid::{Grid, Pos};
use anyhow::Result;
use itertools::Itertools;
use rustc_hash::FxHashSet;

fn antinodes(map: &Grid<u8>, a: Pos, b: Pos, resonant: bool) -> Vec<Pos> {
    if !resonant {
        return [a * 2 - b, b * 2 - a].into_iter().filter(|&p| map.in_bounds(p)).collect();
    }
    let delta = b - a;
    let forward = (0 ..).map(|n| a + delta * n).take_while(|&p| map.in_bounds(p));
    let backward = (1 ..).map(|n| a - delta * n).take_while(|&p| map.in_bounds(p));
    forward.chain(backward).collect()
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let map = Grid::parse(input)?;
    let antennas = map.iter()
                      .filter(|(_, cell)| cell.is_ascii_alphanumeric())
                      .map(|(p, &frequency)| (frequency, p))
                      .into_group_map();
    let mut found = FxHashSet::default();
    for same_frequency in antennas.values() {
        for (&a, &b) in same_frequency.iter().tuple_combinations() {
            found.extend(antinodes(&map, a, b, part == 2));
        }
    }
    Ok(found.len().to_string())
}
