use crate::grid::{pos, Grid, Pos, EAST, NORTH, SOUTH, WEST};
use crate::parse::paragraphs;
use anyhow::{bail, Context, Result};

fn parse(input: &str) -> Result<(Grid<u8>, Vec<Pos>)> {
    let sections = paragraphs(input);
    let [map, moves] = &sections[..] else {
        bail!("expected a warehouse map and a move list, got {} sections", sections.len())
    };
    let warehouse = Grid::from_rows(map.iter().map(|line| line.as_bytes().to_vec()))?;
    let moves = moves.iter().flat_map(|line| line.bytes()).map(|b| -> Result<Pos> {
        Ok(match b {
            b'<' => WEST,
            b'>' => EAST,
            b'^' => NORTH,
            b'v' => SOUTH,
            _ => bail!("unknown move {:?}", b as char),
        })
    }).collect::<Result<Vec<_>>>()?;
    Ok((warehouse, moves))
}

fn widen(warehouse: &Grid<u8>) -> Result<Grid<u8>> {
    let rows = (0 .. warehouse.rows() as i64).map(|y| {
        (0 .. warehouse.cols() as i64).flat_map(|x| match warehouse[pos(x, y)] {
            b'O' => *b"[]",
            b'@' => *b"@.",
            c => [c, c],
        }).collect::<Vec<_>>()
    });
    Grid::from_rows(rows)
}

/// Pushes everything in front of the robot one step, or nothing if any of it
/// would hit a wall. Returns the robot's new position.
fn push(warehouse: &mut Grid<u8>, robot: Pos, dir: Pos) -> Pos {
    let mut moving = vec![robot];
    let mut i = 0;
    while i < moving.len() {
        let next = moving[i] + dir;
        i += 1;
        if moving.contains(&next) {continue}
        let partner = match warehouse.get(next) {
            None | Some(b'#') => return robot,
            Some(b'.') => continue,
            Some(b'[') if dir.y != 0 => Some(next + EAST),
            Some(b']') if dir.y != 0 => Some(next + WEST),
            Some(_) => None,
        };
        moving.push(next);
        moving.extend(partner.filter(|p| !moving.contains(p)));
    }
    for &p in moving.iter().rev() {
        warehouse[p + dir] = warehouse[p];
        warehouse[p] = b'.';
    }
    robot + dir
}

fn gps_total(warehouse: &Grid<u8>) -> i64 {
    warehouse.iter()
             .filter(|&(_, &c)| c == b'O' || c == b'[')
             .map(|(p, _)| 100 * p.y + p.x)
             .sum()
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let (mut warehouse, moves) = parse(input)?;
    if part == 2 {
        warehouse = widen(&warehouse)?;
    }
    let mut robot = warehouse.find(&b'@').context("no robot in the warehouse")?;
    for dir in moves {
        robot = push(&mut warehouse, robot, dir);
    }
    Ok(gps_total(&warehouse).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\
########
#..O.O.#
##@.O..#
#...O..#
#.#.O..#
#...O..#
#......#
########

<^^>>>vv<v>>v<<
";

    const WIDE: &str = "\
#######
#...#.#
#.....#
#..OO@#
#..O..#
#.....#
#######

<vv<<^^<<^^
";

    #[test]
    fn small_warehouse() {
        assert_eq!(solve(1, SMALL).unwrap(), "2028");
    }

    #[test]
    fn wide_boxes_push_as_a_tree() {
        assert_eq!(solve(2, WIDE).unwrap(), "618");
    }

    #[test]
    fn blocked_push_moves_nothing() {
        let mut warehouse = Grid::parse("#O@.\n").unwrap();
        assert_eq!(push(&mut warehouse, pos(2, 0), WEST), pos(2, 0));
        assert_eq!(warehouse.to_string(), "#O@.\n");
    }
}
