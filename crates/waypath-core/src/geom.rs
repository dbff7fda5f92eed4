//! Integer grid coordinates.
//!
//! X counts columns to the right and Y counts rows downwards, the order in
//! which a text map is read.

use std::fmt;

/// Unit steps up, right, down, left.
const CARDINAL: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Unit steps clockwise from up, diagonals included.
const COMPASS: [(i32, i32); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// A cell position. Not bounds-checked: negative or far-away points are
/// valid values and simply fall outside any [`Grid`](crate::Grid).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self::new(0, 0);

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The point `dx` columns right and `dy` rows down from this one.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Edge-adjacent points: up, right, down, left.
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        CARDINAL.map(|(dx, dy)| self.offset(dx, dy))
    }

    /// Edge- and corner-adjacent points, clockwise from up.
    #[inline]
    pub fn neighbors_8(self) -> [Point; 8] {
        COMPASS.map(|(dx, dy)| self.offset(dx, dy))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
