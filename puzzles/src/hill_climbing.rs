//! Fewest steps up a height map.
//!
//! Squares are marked `a` (lowest) to `z` (highest); `S` is the start at
//! height `a` and `E` the summit at height `z`. A step may go at most one
//! unit up, and any amount down.

use std::convert::Infallible;

use waypath_core::{Grid, Point};
use waypath_search::{AstarGraph, Connectivity, Cost, Engine, Goal, Graph, manhattan};

use crate::{Answers, PuzzleError, timed};

/// A parsed height map with its start and summit.
#[derive(Debug, Clone)]
pub struct HeightMap {
    heights: Grid<u8>,
    start: Point,
    end: Point,
}

impl HeightMap {
    pub fn parse(input: &str) -> Result<Self, PuzzleError> {
        let marks = Grid::parse_with(input, |ch| {
            matches!(ch, 'a'..='z' | 'S' | 'E').then_some(ch)
        })?;
        let find = |mark: char| -> Result<Point, PuzzleError> {
            match marks.positions(|&c| c == mark).as_slice() {
                [p] => Ok(*p),
                [] => Err(PuzzleError::Malformed(format!("no {mark} square"))),
                _ => Err(PuzzleError::Malformed(format!("more than one {mark} square"))),
            }
        };
        let start = find('S')?;
        let end = find('E')?;
        let heights = marks.map(|&c| match c {
            'S' => 0,
            'E' => b'z' - b'a',
            c => c as u8 - b'a',
        });
        Ok(Self {
            heights,
            start,
            end,
        })
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Height at `p`, 0 for `a` through 25 for `z`.
    #[inline]
    pub fn height(&self, p: Point) -> Option<u8> {
        self.heights.at(p)
    }
}

/// Moves on a [`HeightMap`]. Walking downhill reverses every edge, so a
/// search from the summit finds the distance *to* it from every square.
struct Climb<'a> {
    map: &'a HeightMap,
    downhill: bool,
}

impl Graph for Climb<'_> {
    type State = Point;
    type Error = Infallible;

    fn neighbors(&self, &p: &Point, buf: &mut Vec<(Point, Cost)>) -> Result<(), Infallible> {
        Connectivity::Four.extend(p, buf, |from, to| {
            let a = self.map.height(from)?;
            let b = self.map.height(to)?;
            let allowed = if self.downhill { a <= b + 1 } else { b <= a + 1 };
            allowed.then_some(1)
        });
        Ok(())
    }
}

impl AstarGraph for Climb<'_> {
    fn estimate(&self, from: &Point, to: &Point) -> Cost {
        manhattan(*from, *to)
    }
}

/// Fewest steps from `S` to `E`.
pub fn fewest_steps(map: &HeightMap) -> Result<Cost, PuzzleError> {
    let climb = Climb {
        map,
        downhill: false,
    };
    let found = Engine::new().astar_path(&climb, map.start, map.end)?;
    match found {
        Some((path, cost)) => {
            log::debug!("summit reached in {} squares", path.len());
            Ok(cost)
        }
        None => Err(PuzzleError::NoPath("from the start to the summit")),
    }
}

/// Fewest steps from any lowest square to `E`, found by walking down from
/// the summit until the first lowest square settles.
pub fn fewest_steps_from_lowest(map: &HeightMap) -> Result<Cost, PuzzleError> {
    let descent = Climb {
        map,
        downhill: true,
    };
    let lowest = |p: &Point| map.height(*p) == Some(0);
    let found = Engine::new().find_shortest_paths(&descent, &[map.end], Goal::Predicate(&lowest))?;
    found
        .goal()
        .map(|(_, steps)| steps)
        .ok_or(PuzzleError::NoPath("from any lowest square to the summit"))
}

pub fn solve(input: &str) -> Result<Answers, PuzzleError> {
    let map = HeightMap::parse(input)?;
    let part1 = timed("hill climbing part 1", || fewest_steps(&map))?;
    let part2 = timed("hill climbing part 2", || fewest_steps_from_lowest(&map))?;
    Ok(Answers { part1, part2 })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Sabqponm
abcryxxl
accszExk
acctuvwj
abdefghi
";

    #[test]
    fn parse_marks() {
        let map = HeightMap::parse(SAMPLE).unwrap();
        assert_eq!(map.start(), Point::new(0, 0));
        assert_eq!(map.end(), Point::new(5, 2));
        assert_eq!(map.height(map.start()), Some(0));
        assert_eq!(map.height(map.end()), Some(25));
        assert_eq!(map.height(Point::new(3, 0)), Some(b'q' - b'a'));
    }

    #[test]
    fn sample_part1() {
        let map = HeightMap::parse(SAMPLE).unwrap();
        assert_eq!(fewest_steps(&map).unwrap(), 31);
    }

    #[test]
    fn sample_part2() {
        let map = HeightMap::parse(SAMPLE).unwrap();
        assert_eq!(fewest_steps_from_lowest(&map).unwrap(), 29);
    }

    #[test]
    fn cliff_blocks_the_climb() {
        let map = HeightMap::parse("SazE").unwrap();
        assert!(matches!(fewest_steps(&map), Err(PuzzleError::NoPath(_))));
    }

    #[test]
    fn missing_marks_rejected() {
        assert!(matches!(HeightMap::parse("abc\nabE"), Err(PuzzleError::Malformed(_))));
        assert!(matches!(HeightMap::parse("SS\nEa"), Err(PuzzleError::Malformed(_))));
        assert!(matches!(HeightMap::parse("S?E"), Err(PuzzleError::Grid(_))));
    }
}
