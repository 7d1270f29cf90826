use crate::grid::{pos, Pos};
use anyhow::{bail, ensure, Result};
use regex::Regex;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Robot {
    pub p: Pos,
    pub v: Pos,
}

/// A wrapping room; both sides are positive.
#[derive(Clone, Copy, Debug)]
pub struct Room {
    width: i64,
    height: i64,
}

pub const BATHROOM: Room = Room { width: 101, height: 103 };

impl Room {
    pub fn new(width: i64, height: i64) -> Result<Room> {
        ensure!(width > 0 && height > 0, "a {}x{} room has no floor", width, height);
        Ok(Room { width, height })
    }

    pub fn width(self) -> i64 {
        self.width
    }

    pub fn height(self) -> i64 {
        self.height
    }

    fn wrap(self, p: Pos) -> Pos {
        pos(p.x.rem_euclid(self.width), p.y.rem_euclid(self.height))
    }
}

impl Robot {
    fn after(self, room: Room, seconds: i64) -> Pos {
        room.wrap(self.p + self.v * seconds)
    }
}

pub fn parse(input: &str) -> Result<Vec<Robot>> {
    let re = Regex::new(r"p=(-?\d+),(-?\d+) v=(-?\d+),(-?\d+)")?;
    let robots = re.captures_iter(input).map(|caps| -> Result<Robot> {
        let n = |i: usize| caps[i].parse::<i64>();
        Ok(Robot { p: pos(n(1)?, n(2)?), v: pos(n(3)?, n(4)?) })
    }).collect::<Result<Vec<_>>>()?;
    ensure!(!robots.is_empty(), "no robots found");
    Ok(robots)
}

/// Product of the robot counts in the four quadrants, ignoring the middle lines.
pub fn safety_factor(robots: &[Robot], room: Room, seconds: i64) -> u64 {
    let (mid_x, mid_y) = (room.width / 2, room.height / 2);
    let mut quadrants = [0u64; 4];
    for robot in robots {
        let p = robot.after(room, seconds);
        if p.x == mid_x || p.y == mid_y {continue}
        quadrants[(p.x > mid_x) as usize + 2 * (p.y > mid_y) as usize] += 1;
    }
    quadrants.iter().product()
}

/// The time in `0..period` at which the most robots share one coordinate along `axis`.
fn densest_offset(robots: &[Robot], room: Room, period: i64, axis: fn(Pos) -> i64) -> i64 {
    let mut best = (0, 0);
    for t in 0 .. period {
        let mut counts = vec![0; period as usize];
        for robot in robots {
            counts[axis(robot.after(room, t)) as usize] += 1;
        }
        let densest = counts.into_iter().max().unwrap_or(0);
        if densest > best.0 {best = (densest, t)}
    }
    best.1
}

fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    let (mut old_r, mut r) = (a.rem_euclid(m), m);
    let (mut old_s, mut s) = (1, 0);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }
    (old_r == 1).then(|| old_s.rem_euclid(m))
}

/// The robots line up into a picture when their columns cluster and their
/// rows cluster at once. Columns repeat every `width` seconds and rows every
/// `height` seconds, so the picture time follows by the Chinese remainder theorem.
pub fn easter_egg_time(robots: &[Robot], room: Room) -> Result<i64> {
    let Room { width, height } = room;
    let dx = densest_offset(robots, room, width, |p| p.x);
    let dy = densest_offset(robots, room, height, |p| p.y);
    debug!(dx, dy, "densest column and row offsets");
    let Some(inverse) = mod_inverse(width, height) else {
        bail!("room sides {} and {} are not coprime", width, height)
    };
    Ok(dx + width * ((dy - dx) * inverse).rem_euclid(height))
}

pub fn render(robots: &[Robot], room: Room, seconds: i64) -> String {
    let mut rows = vec![vec!['.'; room.width as usize]; room.height as usize];
    for robot in robots {
        let p = robot.after(room, seconds);
        rows[p.y as usize][p.x as usize] = '#';
    }
    rows.into_iter().map(|row| row.into_iter().collect::<String>() + "\n").collect()
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let robots = parse(input)?;
    if part == 1 {
        return Ok(safety_factor(&robots, BATHROOM, 100).to_string());
    }
    let t = easter_egg_time(&robots, BATHROOM)?;
    debug!("\n{}", render(&robots, BATHROOM, t));
    Ok(t.to_string())
}
