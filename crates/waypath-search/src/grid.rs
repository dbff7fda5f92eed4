//! Weighted grid graphs.

use std::convert::Infallible;

use waypath_core::{Grid, Point};

use crate::distance::{chebyshev, manhattan};
use crate::neighbors::Connectivity;
use crate::traits::{AstarGraph, Cost, Graph};

/// A [`Grid`] of cell weights seen as a graph: moving into a cell costs that
/// cell's weight. The weight of the starting cell is never paid.
#[derive(Debug, Clone)]
pub struct WeightedGrid<'a> {
    grid: &'a Grid<u32>,
    connectivity: Connectivity,
    min_weight: Cost,
}

impl<'a> WeightedGrid<'a> {
    /// Four-connected graph over `grid`.
    pub fn new(grid: &'a Grid<u32>) -> Self {
        let min_weight = grid.iter().map(|(_, &w)| Cost::from(w)).min().unwrap_or(0);
        Self {
            grid,
            connectivity: Connectivity::Four,
            min_weight,
        }
    }

    /// Use `connectivity` instead of four-way moves.
    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// The underlying grid.
    #[inline]
    pub fn grid(&self) -> &'a Grid<u32> {
        self.grid
    }
}

impl Graph for WeightedGrid<'_> {
    type State = Point;
    type Error = Infallible;

    fn neighbors(&self, &p: &Point, buf: &mut Vec<(Point, Cost)>) -> Result<(), Infallible> {
        self.connectivity
            .extend(p, buf, |_, q| self.grid.at(q).map(Cost::from));
        Ok(())
    }
}

impl AstarGraph for WeightedGrid<'_> {
    /// Step distance times the cheapest weight on the grid; every step pays
    /// at least that much, so the estimate never overshoots.
    fn estimate(&self, from: &Point, to: &Point) -> Cost {
        let steps = match self.connectivity {
            Connectivity::Four => manhattan(*from, *to),
            Connectivity::Eight => chebyshev(*from, *to),
        };
        steps * self.min_weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Engine, Goal};

    /// 3×3, weight 1 except the middle column of rows 0 and 1.
    const WALLED: &str = "\
191
191
111";

    #[test]
    fn routes_around_costly_cells() {
        let grid = Grid::parse_digits(WALLED).unwrap();
        let g = WeightedGrid::new(&grid);
        let mut engine = Engine::new();
        let d = engine
            .find_shortest_paths(&g, &[Point::new(0, 0)], Goal::Target(Point::new(2, 2)))
            .unwrap();
        assert_eq!(d.goal().map(|(_, c)| c), Some(4));
        let path = d.path_to(&Point::new(2, 2)).unwrap();
        assert_eq!(
            path,
            vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(1, 2),
                Point::new(2, 2),
            ]
        );
        assert!(!path.contains(&Point::new(1, 0)));
        assert!(!path.contains(&Point::new(1, 1)));
    }

    #[test]
    fn astar_agrees_with_dijkstra() {
        let grid = Grid::parse_digits(WALLED).unwrap();
        let g = WeightedGrid::new(&grid);
        let mut engine = Engine::new();
        let plain = engine
            .shortest_distance(&g, Point::new(0, 0), Point::new(2, 2))
            .unwrap();
        let (path, cost) = engine
            .astar_path(&g, Point::new(0, 0), Point::new(2, 2))
            .unwrap()
            .unwrap();
        assert_eq!(plain, Some(4));
        assert_eq!(cost, 4);
        assert_eq!(path.len(), 5);
    }

    #[test]
    fn full_distance_map() {
        let grid = Grid::parse_digits(WALLED).unwrap();
        let g = WeightedGrid::new(&grid);
        let d = Engine::new()
            .find_shortest_paths(&g, &[Point::new(0, 0)], Goal::Exhaust)
            .unwrap();
        assert_eq!(d.len(), 9);
        assert_eq!(d[&Point::new(1, 0)], 9);
        assert_eq!(d[&Point::new(2, 0)], 6);
    }

    #[test]
    fn diagonal_moves_shorten_paths() {
        let grid = Grid::new(4, 4, 1u32);
        let g = WeightedGrid::new(&grid).with_connectivity(Connectivity::Eight);
        let (_, cost) = Engine::new()
            .astar_path(&g, Point::new(0, 0), Point::new(3, 3))
            .unwrap()
            .unwrap();
        assert_eq!(cost, 3);
        assert_eq!(g.estimate(&Point::new(0, 0), &Point::new(3, 3)), 3);
    }
}
