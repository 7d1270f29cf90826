use crate::grid::{Grid, Pos, EAST, NORTH, ORTHOGONAL, SOUTH, WEST};
use anyhow::Result;

struct Region {
    area: u64,
    perimeter: u64,
    /// Every corner is where one straight side ends, so this is the side count.
    corners: u64,
}

fn corners_at(garden: &Grid<u8>, p: Pos) -> u64 {
    let plant = garden[p];
    let same = |q: Pos| garden.get(q) == Some(&plant);
    [(NORTH, EAST), (EAST, SOUTH), (SOUTH, WEST), (WEST, NORTH)].into_iter().filter(|&(a, b)| {
        let outer = !same(p + a) && !same(p + b);
        let inner = same(p + a) && same(p + b) && !same(p + a + b);
        outer || inner
    }).count() as u64
}

fn regions(garden: &Grid<u8>) -> Vec<Region> {
    let mut seen = garden.map(|_| false);
    let mut regions = vec![];
    for start in garden.positions() {
        if seen[start] {continue}
        seen[start] = true;
        let plant = garden[start];
        let mut region = Region { area: 0, perimeter: 0, corners: 0 };
        let mut stack = vec![start];
        while let Some(p) = stack.pop() {
            region.area += 1;
            region.corners += corners_at(garden, p);
            for dir in ORTHOGONAL {
                let q = p + dir;
                if garden.get(q) != Some(&plant) {
                    region.perimeter += 1;
                } else if !seen[q] {
                    seen[q] = true;
                    stack.push(q);
                }
            }
        }
        regions.push(region);
    }
    regions
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let garden = Grid::parse(input)?;
    let price: u64 = regions(&garden).iter().map(|region| {
        region.area * if part == 1 {region.perimeter} else {region.corners}
    }).sum();
    Ok(price.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sides_of_nested_regions() {
        let e_shape = "EEEEE\nEXXXX\nEEEEE\nEXXXX\nEEEEE\n";
        assert_eq!(solve(2, e_shape).unwrap(), "236");
        let diagonal = "AAAAAA\nAAABBA\nAAABBA\nABBAAA\nABBAAA\nAAAAAA\n";
        assert_eq!(solve(2, diagonal).unwrap(), "368");
    }
}
