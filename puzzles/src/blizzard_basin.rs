//! Fewest minutes to cross a valley swept by blizzards.
//!
//! ```text
//! #.######
//! #>>.<^<#
//! #.<..<<#
//! #>v.><>#
//! #<^v^^>#
//! ######.#
//! ```
//!
//! Every minute each blizzard moves one square in its direction, wrapping
//! around the valley walls, and the expedition moves one square or waits.
//! The blizzard pattern repeats with a period of `lcm(width, height)`, so a
//! search state is a position plus the minute within that period. Part 2
//! crosses, walks back for the snacks and crosses again; each leg is seeded
//! with the time the previous one ended.

use std::convert::Infallible;

use waypath_core::{Grid, Point};
use waypath_search::{Cost, Engine, Goal, Graph, SearchOptions};

use crate::{Answers, PuzzleError, timed};

/// Where the expedition stands and the minute modulo the blizzard period.
type Moment = (Point, usize);

/// The valley floor, its entrance and exit.
#[derive(Debug, Clone)]
pub struct Valley {
    /// Blizzard glyphs as they stand at minute 0, `.` for clear ground.
    winds: Grid<char>,
    start: Point,
    end: Point,
    period: usize,
}

impl Valley {
    pub fn parse(input: &str) -> Result<Self, PuzzleError> {
        let lines: Vec<&str> = input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let [top, inner @ .., bottom] = lines.as_slice() else {
            return Err(PuzzleError::Malformed("valley needs walls".to_string()));
        };
        let rows = inner
            .iter()
            .map(|l| {
                l.strip_prefix('#')
                    .and_then(|l| l.strip_suffix('#'))
                    .ok_or_else(|| PuzzleError::Malformed(format!("unwalled row {l:?}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let winds = Grid::parse_with(&rows.join("\n"), |c| {
            matches!(c, '.' | '<' | '>' | '^' | 'v').then_some(c)
        })?;

        let gap = |wall: &str| -> Result<i32, PuzzleError> {
            let open: Vec<usize> = wall.match_indices('.').map(|(i, _)| i).collect();
            match open.as_slice() {
                &[i] if (1..=winds.width() as usize).contains(&i) => Ok(i as i32 - 1),
                _ => Err(PuzzleError::Malformed(format!(
                    "wall {wall:?} needs one opening above the floor"
                ))),
            }
        };
        let start = Point::new(gap(*top)?, -1);
        let end = Point::new(gap(*bottom)?, winds.height());
        let period = lcm(winds.width() as usize, winds.height() as usize);
        Ok(Self {
            winds,
            start,
            end,
            period,
        })
    }

    /// Whether the expedition may stand on `p` at `minute`.
    pub fn is_clear(&self, p: Point, minute: usize) -> bool {
        if p == self.start || p == self.end {
            return true;
        }
        if !self.winds.contains(p) {
            return false;
        }
        let (w, h) = (self.winds.width(), self.winds.height());
        let t = (minute % self.period) as i32;
        let came_from = |dx: i32, dy: i32, glyph: char| {
            let origin = Point::new(
                (p.x - dx * t).rem_euclid(w),
                (p.y - dy * t).rem_euclid(h),
            );
            self.winds.at(origin) == Some(glyph)
        };
        !(came_from(1, 0, '>')
            || came_from(-1, 0, '<')
            || came_from(0, 1, 'v')
            || came_from(0, -1, '^'))
    }

    /// Minute of arrival at `to`, leaving `from` at minute `depart`.
    pub fn cross(&self, from: Point, to: Point, depart: Cost) -> Result<Cost, PuzzleError> {
        let mut engine =
            Engine::with_options(SearchOptions::default().with_track_paths(false));
        let seed = ((from, depart as usize % self.period), depart);
        let arrived = |&(p, _): &Moment| p == to;
        let found = engine.find_shortest_paths_from(
            &Expedition { valley: self },
            [seed],
            Goal::Predicate(&arrived),
        )?;
        log::debug!("crossing settled {} moments", found.stats().settled);
        found
            .goal()
            .map(|(_, minute)| minute)
            .ok_or(PuzzleError::NoPath("across the valley"))
    }
}

fn gcd(a: usize, b: usize) -> usize {
    if b == 0 { a } else { gcd(b, a % b) }
}

fn lcm(a: usize, b: usize) -> usize {
    a / gcd(a, b) * b
}

/// One minute of movement: wait or step to a cardinal neighbor, landing
/// where no blizzard will be.
struct Expedition<'a> {
    valley: &'a Valley,
}

impl Graph for Expedition<'_> {
    type State = Moment;
    type Error = Infallible;

    fn neighbors(&self, &(p, t): &Moment, buf: &mut Vec<(Moment, Cost)>) -> Result<(), Infallible> {
        let next = (t + 1) % self.valley.period;
        for q in std::iter::once(p).chain(p.neighbors_4()) {
            if self.valley.is_clear(q, next) {
                buf.push(((q, next), 1));
            }
        }
        Ok(())
    }
}

pub fn solve(input: &str) -> Result<Answers, PuzzleError> {
    let valley = Valley::parse(input)?;
    let (start, end) = (valley.start, valley.end);
    let part1 = timed("blizzard basin part 1", || valley.cross(start, end, 0))?;
    let part2 = timed("blizzard basin part 2", || -> Result<Cost, PuzzleError> {
        let back = valley.cross(end, start, part1)?;
        valley.cross(start, end, back)
    })?;
    Ok(Answers { part1, part2 })
}
