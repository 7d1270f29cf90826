//! Examples from the puzzle descriptions behave as described.

use aoc2024::answers::{Answers, Verdict};
use aoc2024::grid::pos;
use aoc2024::{day11, day14, day18, day20, day21};
use std::path::{Path, PathBuf};

fn inputs() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("inputs")
}

fn example(name: &str) -> String {
    let path = inputs().join(format!("{}.in", name));
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("{}: {}", path.display(), e))
}

/// `day12test3` -> 12
fn day_of(stem: &str) -> Option<usize> {
    stem.strip_prefix("day")?.split_once("test")?.0.parse().ok()
}

#[test]
fn recorded_example_answers() {
    let answers = Answers::load(&inputs().join("answers.toml")).unwrap();
    let mut checked = 0;
    for (stem, expected) in answers.iter() {
        let Some(day) = day_of(stem) else {continue};
        let input = example(stem);
        for part in 1 ..= aoc2024::parts(day) {
            if expected.part(part).is_none() {continue}
            let answer = aoc2024::solve(day, part, &input).unwrap_or_else(|e| panic!("{}: {}", stem, e));
            assert_eq!(answers.check(stem, part, &answer).unwrap(), Verdict::Correct);
            checked += 1;
        }
    }
    assert!(checked >= 60, "only {} example answers checked", checked);
}

mod day11_examples {
    use super::*;

    #[test]
    fn blinking_six_times() {
        assert_eq!(day11::count_stones(&[125, 17], 6), 22);
        assert_eq!(day11::count_stones(&[0, 1, 10, 99, 999], 1), 7);
    }
}

mod day14_examples {
    use super::*;
    use day14::{Robot, Room};

    fn room() -> Room {
        Room::new(11, 7).unwrap()
    }

    #[test]
    fn safety_factor_after_100_seconds() {
        let robots = day14::parse(&example("day14test1")).unwrap();
        assert_eq!(robots.len(), 12);
        assert_eq!(day14::safety_factor(&robots, room(), 100), 12);
    }

    #[test]
    fn render_marks_robots() {
        let robots = day14::parse(&example("day14test1")).unwrap();
        let picture = day14::render(&robots, room(), 0);
        assert_eq!(picture.lines().count(), 7);
        assert_eq!(picture.lines().next(), Some("#.##......."));
    }

    /// Ten robots that meet in one cell of the full-size bathroom at `MEET`.
    #[test]
    fn easter_egg_where_robots_cluster() {
        const MEET: i64 = 7623;
        let room = day14::BATHROOM;
        let robots: Vec<Robot> = (1 ..= 10).map(|i| {
            let v = pos(i, -i);
            let p = pos(50, 51) - v * MEET;
            Robot { p: pos(p.x.rem_euclid(room.width()), p.y.rem_euclid(room.height())), v }
        }).collect();
        assert_eq!(day14::easter_egg_time(&robots, room).unwrap(), MEET);
    }
}

mod day18_examples {
    use super::*;

    #[test]
    fn twelve_bytes_in_a_small_space() {
        let bytes = day18::parse(&example("day18test1")).unwrap();
        assert_eq!(day18::shortest_path(&bytes[.. 12], 6), Some(22));
        assert_eq!(day18::shortest_path(&bytes, 6), None);
        assert_eq!(day18::first_blocker(&bytes, 6), Some(pos(6, 1)));
        assert_eq!(day18::first_blocker(&bytes[.. 12], 6), None);
    }
}

mod day20_examples {
    use super::*;

    #[test]
    fn short_cheats() {
        assert_eq!(day20::count_cheats(&example("day20test1"), 2, 64).unwrap(), 1);
        assert_eq!(day20::count_cheats(&example("day20test1"), 2, 12).unwrap(), 8);
    }

    #[test]
    fn long_cheats() {
        assert_eq!(day20::count_cheats(&example("day20test1"), 20, 76).unwrap(), 3);
        assert_eq!(day20::count_cheats(&example("day20test1"), 20, 50).unwrap(), 285);
    }
}

mod day21_examples {
    use super::*;

    #[test]
    fn each_code_alone() {
        for (code, presses) in [("029A", 68), ("980A", 60), ("179A", 68), ("456A", 64), ("379A", 64)] {
            let number: u64 = code[.. 3].parse().unwrap();
            assert_eq!(day21::complexity(code, 2).unwrap(), presses * number, "{}", code);
        }
    }
}
