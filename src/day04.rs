use crate::grid::{Crawler, Grid, Pos, ALL, NORTH_WEST, SOUTH_EAST, pos};
use anyhow::Result;

/// Occurrences of `word` starting at `start` along each of `dirs`.
fn words_from(grid: &Grid<u8>, start: Pos, dirs: &[Pos], word: &[u8]) -> usize {
    if grid[start] != word[0] {return 0}
    dirs.iter().filter(|&&dir| {
        let mut crawler = Crawler::new(grid, start, dir);
        word[1 ..].iter().all(|&letter| crawler.step() && *crawler.at() == letter)
    }).count()
}

/// Crosses whose falling diagonal starts at `start` with `MAS` in `dir`.
fn crosses_from(grid: &Grid<u8>, start: Pos, dir: Pos) -> bool {
    if words_from(grid, start, &[dir], b"MAS") == 0 {return false}
    let rising_start = start + pos(2 * dir.x, 0);
    let rising = [pos(-dir.x, dir.y)];
    grid.in_bounds(rising_start) && (
        words_from(grid, rising_start, &rising, b"MAS") > 0 ||
        words_from(grid, rising_start, &rising, b"SAM") > 0
    )
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let grid = Grid::parse(input)?;
    let found: usize = if part == 1 {
        grid.positions().map(|p| words_from(&grid, p, &ALL, b"XMAS")).sum()
    } else {
        grid.positions().map(|p|
            [SOUTH_EAST, NORTH_WEST].into_iter().filter(|&dir| crosses_from(&grid, p, dir)).count()
        ).sum()
    };
    Ok(found.to_string())
}
