//! **waypath-core**: geometry primitives and dense grids.
//!
//! This crate provides the foundational types shared by the *waypath*
//! workspace: integer cell positions and an owned row-major
//! [`Grid`] that can be parsed from puzzle-style text maps.

pub mod geom;
pub mod grid;

pub use geom::Point;
pub use grid::{Grid, GridError};
