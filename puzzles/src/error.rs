use std::convert::Infallible;
use std::fmt;
use std::io;
use std::path::PathBuf;

use waypath_core::GridError;
use waypath_search::SearchError;

/// Errors that can occur while loading or solving a puzzle.
#[derive(Debug)]
pub enum PuzzleError {
    /// The input file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The input is not a valid grid.
    Grid(GridError),
    /// The input parsed but does not describe a valid puzzle.
    Malformed(String),
    /// The search itself failed.
    Search(SearchError<Infallible>),
    /// The puzzle has no solution.
    NoPath(&'static str),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Grid(e) => write!(f, "{e}"),
            Self::Malformed(msg) => write!(f, "malformed input: {msg}"),
            Self::Search(e) => write!(f, "search failed: {e}"),
            Self::NoPath(what) => write!(f, "no path {what}"),
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Grid(e) => Some(e),
            Self::Search(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for PuzzleError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<SearchError<Infallible>> for PuzzleError {
    fn from(e: SearchError<Infallible>) -> Self {
        Self::Search(e)
    }
}
