//! The [`Grid`] type: a dense, owned, row-major 2D grid.
//!
//! Grids are usually built from text maps where every character stands for
//! one cell, e.g. a block of digits or a height map of letters.

use std::fmt;

use crate::geom::Point;

/// A dense 2D grid of `T` with its origin at (0, 0).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid<T>"))]
pub struct Grid<T> {
    cells: Vec<T>,
    width: i32,
    height: i32,
}

impl<T: Clone> Grid<T> {
    /// Create a `width` × `height` grid filled with `fill`.
    pub fn new(width: i32, height: i32, fill: T) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            cells: vec![fill; (w as usize) * (h as usize)],
            width: w,
            height: h,
        }
    }
}

impl<T> Grid<T> {
    /// Wrap row-major `cells` as a `width` × `height` grid.
    pub fn from_cells(width: i32, height: i32, cells: Vec<T>) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::Empty);
        }
        let expected = (width as usize) * (height as usize);
        if cells.len() != expected {
            return Err(GridError::Shape {
                width,
                height,
                cells: cells.len(),
            });
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Build a grid from rows of cells. All rows must have the same length.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, GridError>
    where
        R: IntoIterator<Item = T>,
    {
        let mut cells = Vec::new();
        let mut width: Option<usize> = None;
        let mut height = 0;
        for (y, row) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(row);
            let len = cells.len() - before;
            match width {
                None => width = Some(len),
                Some(w) if w != len => {
                    return Err(GridError::Ragged {
                        line: y,
                        expected: w,
                        found: len,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }
        match width {
            Some(w) if w > 0 => Ok(Self {
                cells,
                width: w as i32,
                height,
            }),
            _ => Err(GridError::Empty),
        }
    }

    /// Parse a text map, converting each character with `cell`.
    ///
    /// Leading and trailing blank lines are ignored; surrounding whitespace
    /// on each line is trimmed. `cell` returning `None` rejects the input.
    pub fn parse_with(s: &str, cell: impl Fn(char) -> Option<T>) -> Result<Self, GridError> {
        let mut rows = Vec::new();
        for (y, line) in s.trim().lines().enumerate() {
            let mut row = Vec::new();
            for (x, ch) in line.trim().chars().enumerate() {
                let Some(v) = cell(ch) else {
                    return Err(GridError::InvalidChar {
                        ch,
                        pos: Point::new(x as i32, y as i32),
                    });
                };
                row.push(v);
            }
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        (0..self.width).contains(&p.x) && (0..self.height).contains(&p.y)
    }

    /// The bottom-right cell.
    #[inline]
    pub fn corner(&self) -> Point {
        Point::new(self.width - 1, self.height - 1)
    }

    /// Every position in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<T> {
        let (w, h) = (self.width, self.height);
        (0..h).flat_map(move |y| (0..w).map(move |x| Point::new(x, y)))
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some((p.y as usize) * (self.width as usize) + (p.x as usize))
        } else {
            None
        }
    }

    /// Borrow the cell at `p`, or `None` if `p` is outside the grid.
    #[inline]
    pub fn get(&self, p: Point) -> Option<&T> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// Overwrite the cell at `p`. Returns `false` if `p` is outside the grid.
    pub fn set(&mut self, p: Point, value: T) -> bool {
        match self.index(p) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Iterate over `(position, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> + '_ {
        self.points().zip(self.cells.iter())
    }

    /// Positions of every cell matching `pred`.
    pub fn positions(&self, pred: impl Fn(&T) -> bool) -> Vec<Point> {
        self.iter().filter(|(_, v)| pred(v)).map(|(p, _)| p).collect()
    }

    /// Map every cell into a new grid of the same shape.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> Grid<U> {
        Grid {
            cells: self.cells.iter().map(f).collect(),
            width: self.width,
            height: self.height,
        }
    }
}

impl<T: Copy> Grid<T> {
    /// Read the cell at `p`, or `None` if `p` is outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<T> {
        self.get(p).copied()
    }
}

impl Grid<u32> {
    /// Parse a block of decimal digits, one cell per digit.
    pub fn parse_digits(s: &str) -> Result<Self, GridError> {
        Self::parse_with(s, |ch| ch.to_digit(10))
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.width.max(1) as usize).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for v in row {
                write!(f, "{v}")?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur when building a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows, or rows with no cells.
    Empty,
    /// A row's length differs from the first row's.
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character the cell parser does not accept.
    InvalidChar { ch: char, pos: Point },
    /// The cell count does not match the stated dimensions.
    Shape { width: i32, height: i32, cells: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no cells"),
            Self::Ragged {
                line,
                expected,
                found,
            } => write!(
                f,
                "grid: line {line} has {found} cells, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "grid: invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::Shape {
                width,
                height,
                cells,
            } => write!(f, "grid: {cells} cells do not fill {width}x{height}"),
        }
    }
}

impl std::error::Error for GridError {}

/// Wire form of a [`Grid`], checked before it becomes one.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid<T> {
    cells: Vec<T>,
    width: i32,
    height: i32,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RawGrid<T>> for Grid<T> {
    type Error = GridError;

    fn try_from(raw: RawGrid<T>) -> Result<Self, GridError> {
        Grid::from_cells(raw.width, raw.height, raw.cells)
    }
}
