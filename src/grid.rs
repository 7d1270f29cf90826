//! Row-major 2-D grids, positions and a direction-following crawler.
//!
//! Coordinates are `(x, y)` with `x` the column and `y` the row, `y` growing
//! downward, so [`NORTH`] is `(0, -1)`.

use anyhow::{bail, ensure};
use std::collections::VecDeque;
use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub x: i64,
    pub y: i64,
}

pub const fn pos(x: i64, y: i64) -> Pos {
    Pos { x, y }
}

pub const EAST: Pos = pos(1, 0);
pub const WEST: Pos = pos(-1, 0);
pub const NORTH: Pos = pos(0, -1);
pub const SOUTH: Pos = pos(0, 1);
pub const NORTH_EAST: Pos = pos(1, -1);
pub const NORTH_WEST: Pos = pos(-1, -1);
pub const SOUTH_EAST: Pos = pos(1, 1);
pub const SOUTH_WEST: Pos = pos(-1, 1);

/// The four orthogonal directions, clockwise from east.
pub const ORTHOGONAL: [Pos; 4] = [EAST, SOUTH, WEST, NORTH];
/// All eight directions, counter-clockwise from east.
pub const ALL: [Pos; 8] = [EAST, NORTH_EAST, NORTH, NORTH_WEST, WEST, SOUTH_WEST, SOUTH, SOUTH_EAST];

impl Pos {
    pub fn manhattan(self, other: Pos) -> i64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Rotates a direction a quarter turn clockwise (on screen).
    pub fn turn_right(self) -> Pos {
        pos(-self.y, self.x)
    }

    /// Index of an orthogonal direction in [`ORTHOGONAL`].
    pub fn orthogonal_index(self) -> Option<usize> {
        ORTHOGONAL.iter().position(|&d| d == self)
    }
}

impl Add for Pos {
    type Output = Pos;
    fn add(self, rhs: Pos) -> Pos {
        pos(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Pos {
    type Output = Pos;
    fn sub(self, rhs: Pos) -> Pos {
        pos(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i64> for Pos {
    type Output = Pos;
    fn mul(self, rhs: i64) -> Pos {
        pos(self.x * rhs, self.y * rhs)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    cols: usize,
    rows: usize,
    cells: Vec<T>,
}

impl Grid<u8> {
    /// Reads the non-empty lines of `input` as rows of bytes.
    pub fn parse(input: &str) -> anyhow::Result<Self> {
        Self::from_rows(
            input.lines()
                 .map(str::trim_end)
                 .filter(|line| !line.is_empty())
                 .map(|line| line.as_bytes().to_vec()),
        )
    }
}

impl<T> Grid<T> {
    pub fn from_rows(rows: impl IntoIterator<Item = Vec<T>>) -> anyhow::Result<Self> {
        let mut cells = Vec::new();
        let mut cols = None;
        let mut n_rows = 0;
        for row in rows {
            match cols {
                None => cols = Some(row.len()),
                Some(cols) if cols != row.len() => {
                    bail!("row {} has {} cells, expected {}", n_rows, row.len(), cols)
                }
                _ => (),
            }
            cells.extend(row);
            n_rows += 1;
        }
        let cols = cols.unwrap_or(0);
        ensure!(cols > 0, "grid is empty");
        Ok(Grid { cols, rows: n_rows, cells })
    }

    pub fn filled(cols: usize, rows: usize, value: T) -> Self
    where
        T: Clone,
    {
        Grid { cols, rows, cells: vec![value; cols * rows] }
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid { cols: self.cols, rows: self.rows, cells: self.cells.iter().map(f).collect() }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn in_bounds(&self, p: Pos) -> bool {
        (0..self.cols as i64).contains(&p.x) && (0..self.rows as i64).contains(&p.y)
    }

    fn offset(&self, p: Pos) -> Option<usize> {
        self.in_bounds(p).then(|| p.y as usize * self.cols + p.x as usize)
    }

    fn pos_of(&self, offset: usize) -> Pos {
        pos((offset % self.cols) as i64, (offset / self.cols) as i64)
    }

    pub fn get(&self, p: Pos) -> Option<&T> {
        self.offset(p).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, p: Pos) -> Option<&mut T> {
        self.offset(p).map(|i| &mut self.cells[i])
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let cols = self.cols as i64;
        (0..self.rows as i64).flat_map(move |y| (0..cols).map(move |x| pos(x, y)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pos, &T)> {
        self.cells.iter().enumerate().map(move |(i, cell)| (self.pos_of(i), cell))
    }

    pub fn find(&self, item: &T) -> Option<Pos>
    where
        T: PartialEq,
    {
        self.cells.iter().position(|cell| cell == item).map(|i| self.pos_of(i))
    }

    pub fn find_all<'a>(&'a self, item: &'a T) -> impl Iterator<Item = Pos> + 'a
    where
        T: PartialEq,
    {
        self.iter().filter(move |(_, cell)| *cell == item).map(|(p, _)| p)
    }

    /// Breadth-first step counts from `start` through cells that are `open`.
    /// Unreachable cells stay `None`.
    pub fn distances(&self, start: Pos, mut open: impl FnMut(&T) -> bool) -> Grid<Option<u32>> {
        let mut dist = Grid::filled(self.cols, self.rows, None);
        if !self.in_bounds(start) {return dist}
        dist[start] = Some(0);
        let mut queue = VecDeque::from([(start, 0)]);
        while let Some((p, d)) = queue.pop_front() {
            for dir in ORTHOGONAL {
                let next = p + dir;
                if self.get(next).is_some_and(&mut open) && dist[next].is_none() {
                    dist[next] = Some(d + 1);
                    queue.push_back((next, d + 1));
                }
            }
        }
        dist
    }
}

impl<T> Index<Pos> for Grid<T> {
    type Output = T;

    fn index(&self, p: Pos) -> &T {
        match self.offset(p) {
            Some(i) => &self.cells[i],
            None => panic!("{:?} outside {}x{} grid", p, self.cols, self.rows),
        }
    }
}

impl<T> IndexMut<Pos> for Grid<T> {
    fn index_mut(&mut self, p: Pos) -> &mut T {
        match self.offset(p) {
            Some(i) => &mut self.cells[i],
            None => panic!("{:?} outside {}x{} grid", p, self.cols, self.rows),
        }
    }
}

impl fmt::Display for Grid<u8> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            writeln!(f, "{}", String::from_utf8_lossy(row))?;
        }
        Ok(())
    }
}

/// A walker that never leaves the grid it is placed on.
#[derive(Clone, Debug)]
pub struct Crawler<'a, T> {
    grid: &'a Grid<T>,
    pub pos: Pos,
    pub dir: Pos,
}

impl<'a, T> Crawler<'a, T> {
    pub fn new(grid: &'a Grid<T>, pos: Pos, dir: Pos) -> Self {
        Crawler { grid, pos, dir }
    }

    pub fn at(&self) -> &'a T {
        &self.grid[self.pos]
    }

    pub fn ahead(&self) -> Option<&'a T> {
        self.grid.get(self.pos + self.dir)
    }

    /// Moves one step in `dir`; stays put and returns false at the edge.
    pub fn go(&mut self, dir: Pos) -> bool {
        let next = self.pos + dir;
        if self.grid.in_bounds(next) {
            self.pos = next;
            true
        } else {
            false
        }
    }

    pub fn step(&mut self) -> bool {
        self.go(self.dir)
    }

    pub fn turn_right(&mut self) {
        self.dir = self.dir.turn_right();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "ab\ncd\nef\n";

    #[test]
    fn parse_and_index() {
        let grid = Grid::parse(SMALL).unwrap();
        assert_eq!((grid.cols(), grid.rows()), (2, 3));
        assert_eq!(grid[pos(1, 2)], b'f');
        assert_eq!(grid.get(pos(2, 0)), None);
        assert_eq!(grid.get(pos(0, -1)), None);
        assert_eq!(grid.find(&b'd'), Some(pos(1, 1)));
        assert_eq!(grid.to_string(), SMALL);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert!(Grid::parse("abc\nde\n").is_err());
        assert!(Grid::parse("\n\n").is_err());
    }

    #[test]
    fn find_all_in_row_major_order() {
        let grid = Grid::parse("x.x\n.x.\n").unwrap();
        let found: Vec<_> = grid.find_all(&b'x').collect();
        assert_eq!(found, vec![pos(0, 0), pos(2, 0), pos(1, 1)]);
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(pos(1, -2).manhattan(pos(-3, 4)), 10);
        assert_eq!(pos(5, 5).manhattan(pos(5, 5)), 0);
    }

    #[test]
    fn distances_go_around_walls() {
        let grid = Grid::parse("..#\n.##\n...\n").unwrap();
        let dist = grid.distances(pos(0, 0), |&c| c == b'.');
        assert_eq!(dist[pos(2, 2)], Some(4));
        assert_eq!(dist[pos(2, 0)], None);
        assert_eq!(dist[pos(1, 0)], Some(1));
        assert!(grid.distances(pos(5, 5), |_| true).iter().all(|(_, d)| d.is_none()));
    }

    #[test]
    fn turning_cycles_through_orthogonal_directions() {
        let mut dir = NORTH;
        for expected in [EAST, SOUTH, WEST, NORTH] {
            dir = dir.turn_right();
            assert_eq!(dir, expected);
        }
        assert_eq!(SOUTH.orthogonal_index(), Some(1));
        assert_eq!(NORTH_EAST.orthogonal_index(), None);
    }

    #[test]
    fn crawler_stops_at_the_edge() {
        let grid = Grid::parse(SMALL).unwrap();
        let mut crawler = Crawler::new(&grid, pos(0, 0), SOUTH);
        assert!(crawler.step());
        assert!(crawler.step());
        assert_eq!(*crawler.at(), b'e');
        assert_eq!(crawler.ahead(), None);
        assert!(!crawler.step());
        assert_eq!(crawler.pos, pos(0, 2));
        crawler.turn_right();
        assert_eq!(crawler.dir, WEST);
        assert!(!crawler.step());
        assert!(crawler.go(EAST));
        assert_eq!(*crawler.at(), b'f');
    }
}
