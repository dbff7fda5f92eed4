//! Lowest-risk route through a cave of chitons.
//!
//! Every cell holds a risk level 1–9 paid when entering it. The route runs
//! from the top-left to the bottom-right corner.

use waypath_core::{Grid, Point};
use waypath_search::{Cost, Engine, WeightedGrid};

use crate::{Answers, PuzzleError, timed};

/// How many times the full map repeats along each axis.
pub const TILES: i32 = 5;

/// Highest risk level; raising it wraps back to 1.
const MAX_RISK: u32 = 9;

/// A risk map whose cells all hold a level in `1..=9`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cave {
    risk: Grid<u32>,
}

impl Cave {
    /// Parse the risk map.
    pub fn parse(input: &str) -> Result<Self, PuzzleError> {
        let risk = Grid::parse_digits(input)?;
        if let Some((p, _)) = risk.iter().find(|&(_, &r)| r == 0) {
            return Err(PuzzleError::Malformed(format!("risk 0 at {p}")));
        }
        Ok(Self { risk })
    }

    #[inline]
    pub fn risk(&self) -> &Grid<u32> {
        &self.risk
    }

    /// Tile the cave `factor` × `factor` times; each tile step right or down
    /// adds one to every risk, wrapping 9 back to 1.
    pub fn enlarge(&self, factor: i32) -> Cave {
        let (w, h) = (self.risk.width(), self.risk.height());
        let mut large = Grid::new(w * factor, h * factor, 1);
        for p in large.points() {
            let base = self.risk.at(Point::new(p.x % w, p.y % h)).unwrap_or(1);
            let raise = (p.x / w + p.y / h) as u32;
            large.set(p, (base - 1 + raise) % MAX_RISK + 1);
        }
        Cave { risk: large }
    }

    /// Total risk of the safest route from the top-left to the bottom-right.
    pub fn lowest_total_risk(&self) -> Result<Cost, PuzzleError> {
        let cave = WeightedGrid::new(&self.risk);
        Engine::new()
            .shortest_distance(&cave, Point::ZERO, self.risk.corner())?
            .ok_or(PuzzleError::NoPath("through the cave"))
    }
}

pub fn solve(input: &str) -> Result<Answers, PuzzleError> {
    let cave = Cave::parse(input)?;
    let part1 = timed("chitons part 1", || cave.lowest_total_risk())?;
    let large = cave.enlarge(TILES);
    let part2 = timed("chitons part 2", || large.lowest_total_risk())?;
    Ok(Answers { part1, part2 })
}
