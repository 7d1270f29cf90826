use crate::grid::{Crawler, Grid, Pos, NORTH};
use anyhow::{Context, Result};
use bitvec::prelude::*;
use rustc_hash::FxHashSet;

struct Patrol {
    /// Every (position, facing) the guard occupied, turns included.
    itinerary: Vec<(Pos, Pos)>,
    looped: bool,
}

fn patrol(lab: &Grid<u8>, start: Pos, facing: Pos, obstruction: Option<Pos>) -> Patrol {
    let mut seen = bitvec![0; lab.cols() * lab.rows() * 4];
    let mut itinerary = vec![];
    let mut guard = Crawler::new(lab, start, facing);
    loop {
        let state = (guard.pos.y as usize * lab.cols() + guard.pos.x as usize) * 4
                  + guard.dir.orthogonal_index().unwrap_or(0);
        if seen[state] {
            return Patrol { itinerary, looped: true };
        }
        seen.set(state, true);
        itinerary.push((guard.pos, guard.dir));
        match guard.ahead() {
            None => return Patrol { itinerary, looped: false },
            Some(b'#') => guard.turn_right(),
            Some(_) if Some(guard.pos + guard.dir) == obstruction => guard.turn_right(),
            Some(_) => {guard.step();}
        }
    }
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let lab = Grid::parse(input)?;
    let start = lab.find(&b'^').context("no guard on the map")?;
    let route = patrol(&lab, start, NORTH, None).itinerary;

    let mut tried = FxHashSet::default();
    tried.insert(start);
    if part == 1 {
        tried.extend(route.iter().map(|&(p, _)| p));
        return Ok(tried.len().to_string());
    }

    // An obstruction only matters where the guard first meets it, so the
    // walk resumes from the step before that.
    let mut loops = 0;
    for (i, &(obstruction, _)) in route.iter().enumerate().skip(1) {
        if !tried.insert(obstruction) {continue}
        let (resume, facing) = route[i - 1];
        if patrol(&lab, resume, facing, Some(obstruction)).looped {
            loops += 1;
        }
    }
    Ok(loops.to_string())
}
