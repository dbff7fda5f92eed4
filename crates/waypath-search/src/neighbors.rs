use waypath_core::Point;

use crate::Cost;

/// Which adjacent cells count as neighbors on a grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connectivity {
    /// Up, right, down, left.
    #[default]
    Four,
    /// Cardinal and diagonal moves.
    Eight,
}

impl Connectivity {
    /// Append the edges out of `p` into `buf`.
    ///
    /// `edge(from, to)` decides whether the move is allowed and what it
    /// costs; `None` drops the move (wall, out of bounds, too steep).
    pub fn extend(
        self,
        p: Point,
        buf: &mut Vec<(Point, Cost)>,
        edge: impl Fn(Point, Point) -> Option<Cost>,
    ) {
        match self {
            Connectivity::Four => push_edges(p, p.neighbors_4(), buf, edge),
            Connectivity::Eight => push_edges(p, p.neighbors_8(), buf, edge),
        }
    }
}

fn push_edges<const N: usize>(
    p: Point,
    candidates: [Point; N],
    buf: &mut Vec<(Point, Cost)>,
    edge: impl Fn(Point, Point) -> Option<Cost>,
) {
    for q in candidates {
        if let Some(cost) = edge(p, q) {
            buf.push((q, cost));
        }
    }
}
