//! Daily puzzle solvers that reduce to shortest-path searches.
//!
//! Each module is a thin adapter: it parses the puzzle text into a state
//! space and hands it to [`waypath_search::Engine`].
//!
//! - [`chitons`]: cheapest route through a risk grid, then through the same
//!   grid tiled five times.
//! - [`hill_climbing`]: fewest steps up a height map, forwards with A* and
//!   backwards from the summit to any lowest square.
//! - [`amphipod`]: least energy to sort amphipods into their rooms.
//! - [`boiling_boulders`]: surface of a lava droplet, outside surface found
//!   by flooding the air around it.
//! - [`blizzard_basin`]: fewest minutes across a valley of moving blizzards,
//!   searching over position and time.

pub mod amphipod;
pub mod blizzard_basin;
pub mod boiling_boulders;
pub mod chitons;
mod error;
pub mod hill_climbing;

use std::fmt;
use std::path::Path;
use std::time::Instant;

use clap::ValueEnum;
use waypath_search::Cost;

pub use error::PuzzleError;

/// Both answers of a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answers {
    pub part1: Cost,
    pub part2: Cost,
}

impl fmt::Display for Answers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "part 1: {}\npart 2: {}", self.part1, self.part2)
    }
}

/// The puzzles this crate knows how to solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Puzzle {
    /// Cheapest route through a risk grid.
    Chitons,
    /// Fewest steps up a height map.
    HillClimbing,
    /// Least energy to sort amphipods.
    Amphipod,
    /// Surface area of a lava droplet.
    BoilingBoulders,
    /// Fewest minutes through a valley of blizzards.
    BlizzardBasin,
}

impl Puzzle {
    /// Solve both parts for `input`.
    pub fn solve(self, input: &str) -> Result<Answers, PuzzleError> {
        match self {
            Puzzle::Chitons => chitons::solve(input),
            Puzzle::HillClimbing => hill_climbing::solve(input),
            Puzzle::Amphipod => amphipod::solve(input),
            Puzzle::BoilingBoulders => boiling_boulders::solve(input),
            Puzzle::BlizzardBasin => blizzard_basin::solve(input),
        }
    }
}

/// Read a puzzle input file.
pub fn read_input(path: &Path) -> Result<String, PuzzleError> {
    std::fs::read_to_string(path).map_err(|source| PuzzleError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Run `f`, logging how long it took under `label`.
pub(crate) fn timed<T>(label: &str, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let out = f();
    log::info!("{label} took {:.2} ms", start.elapsed().as_secs_f64() * 1000.0);
    out
}
