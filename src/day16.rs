use crate::grid::{Grid, Pos, ORTHOGONAL};
use anyhow::{Context, Result};
use bitvec::prelude::*;
use std::collections::BinaryHeap;

const STEP: u64 = 1;
const TURN: u64 = 1000;

/// Reindeer state: a cell and one of the four [`ORTHOGONAL`] headings.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct State {
    p: Pos,
    dir: usize,
}

struct Maze {
    walls: Grid<bool>,
    start: Pos,
    end: Pos,
}

impl Maze {
    fn parse(input: &str) -> Result<Maze> {
        let grid = Grid::parse(input)?;
        let start = grid.find(&b'S').context("maze has no start")?;
        let end = grid.find(&b'E').context("maze has no end")?;
        Ok(Maze { walls: grid.map(|&c| c == b'#'), start, end })
    }

    fn index(&self, s: State) -> usize {
        (s.p.y as usize * self.walls.cols() + s.p.x as usize) * 4 + s.dir
    }

    fn open(&self, p: Pos) -> bool {
        self.walls.get(p) == Some(&false)
    }

    fn successors(&self, s: State) -> impl Iterator<Item = (State, u64)> {
        let ahead = s.p + ORTHOGONAL[s.dir];
        let forward = self.open(ahead).then_some((State { p: ahead, dir: s.dir }, STEP));
        let turns = [1, 3].map(|t| (State { p: s.p, dir: (s.dir + t) % 4 }, TURN));
        forward.into_iter().chain(turns)
    }

    fn predecessors(&self, s: State) -> impl Iterator<Item = (State, u64)> {
        let behind = s.p - ORTHOGONAL[s.dir];
        let backward = self.open(behind).then_some((State { p: behind, dir: s.dir }, STEP));
        let turns = [1, 3].map(|t| (State { p: s.p, dir: (s.dir + t) % 4 }, TURN));
        backward.into_iter().chain(turns)
    }

    /// Lowest score to every reachable state, settled up to the best score at the end.
    fn scores(&self) -> (Vec<u64>, Option<u64>) {
        let mut scores = vec![u64::MAX; self.walls.cols() * self.walls.rows() * 4];
        let start = State { p: self.start, dir: 0 }; // east
        let mut best: Option<u64> = None;
        // Max-heap, so scores go in negated.
        let mut queue: BinaryHeap<(i64, State)> = BinaryHeap::from([(0, start)]);
        scores[self.index(start)] = 0;
        while let Some((neg_score, s)) = queue.pop() {
            let score = (-neg_score) as u64;
            if best.is_some_and(|best| score > best) {break}
            if score > scores[self.index(s)] {continue}
            if s.p == self.end {best = Some(score)}
            for (next, cost) in self.successors(s) {
                let i = self.index(next);
                if score + cost < scores[i] {
                    scores[i] = score + cost;
                    queue.push((-((score + cost) as i64), next));
                }
            }
        }
        (scores, best)
    }

    /// Tiles on any lowest-score path, walking back along exactly matching scores.
    fn best_seats(&self, scores: &[u64], best: u64) -> usize {
        let mut on_path = bitvec![0; scores.len()];
        let mut stack: Vec<State> = (0 .. 4).map(|dir| State { p: self.end, dir })
                                            .filter(|&s| scores[self.index(s)] == best)
                                            .collect();
        let mut tiles = bitvec![0; self.walls.cols() * self.walls.rows()];
        while let Some(s) = stack.pop() {
            let i = self.index(s);
            if on_path.replace(i, true) {continue}
            tiles.set(i / 4, true);
            for (prev, cost) in self.predecessors(s) {
                if scores[self.index(prev)].checked_add(cost) == Some(scores[i]) {
                    stack.push(prev);
                }
            }
        }
        tiles.count_ones()
    }
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let maze = Maze::parse(input)?;
    let (scores, best) = maze.scores();
    let best = best.context("the end is unreachable")?;
    if part == 1 {
        return Ok(best.to_string());
    }
    Ok(maze.best_seats(&scores, best).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turning_once_beats_turning_twice() {
        let maze = Maze::parse("#####\n#..E#\n#S..#\n#####\n").unwrap();
        let (scores, best) = maze.scores();
        assert_eq!(best, Some(2 * STEP + TURN + STEP));
        assert_eq!(maze.best_seats(&scores, TURN + 3 * STEP), 4);
    }
}
