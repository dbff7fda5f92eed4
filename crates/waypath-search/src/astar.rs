use std::hash::Hash;

use crate::Engine;
use crate::distances::Distances;
use crate::error::SearchError;
use crate::goal::Goal;
use crate::traits::{AstarGraph, Cost, Graph};

impl<S: Clone + Eq + Hash> Engine<S> {
    /// Best-first search ordered by `distance + heuristic(state)`.
    ///
    /// The heuristic must be admissible (never overestimate the remaining
    /// cost to the goal) and, since settled states are never reopened,
    /// consistent: `h(a) ≤ cost(a, b) + h(b)` for every edge. Otherwise the
    /// distances returned may not be optimal. Negative estimates are
    /// rejected.
    pub fn astar<G, H>(
        &mut self,
        graph: &G,
        sources: &[S],
        goal: Goal<'_, S>,
        heuristic: H,
    ) -> Result<Distances<S>, SearchError<G::Error>>
    where
        G: Graph<State = S>,
        H: Fn(&S) -> Cost,
    {
        let track = self.options.track_paths;
        self.run(
            graph,
            sources.iter().map(|s| (s.clone(), 0)),
            &goal,
            heuristic,
            track,
        )
    }

    /// Compute the shortest path from `from` to `to` using A* with the
    /// graph's own estimate.
    ///
    /// Returns the full path (including both endpoints) and its cost, or
    /// `None` if no path exists.
    pub fn astar_path<G>(
        &mut self,
        graph: &G,
        from: S,
        to: S,
    ) -> Result<Option<(Vec<S>, Cost)>, SearchError<G::Error>>
    where
        G: AstarGraph<State = S>,
    {
        let target = to.clone();
        let goal = Goal::Target(to);
        let found = self.run(
            graph,
            [(from, 0)],
            &goal,
            |s| graph.estimate(s, &target),
            true,
        )?;
        let Some((end, cost)) = found.goal() else {
            return Ok(None);
        };
        Ok(found.path_to(end).map(|path| (path, cost)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::SearchOptions;
    use crate::traits::successors;
    use std::convert::Infallible;

    /// Integer line where stepping costs 1; the estimate is exact.
    struct Line;

    impl Graph for Line {
        type State = i64;
        type Error = Infallible;

        fn neighbors(&self, &s: &i64, buf: &mut Vec<(i64, Cost)>) -> Result<(), Infallible> {
            buf.push((s - 1, 1));
            buf.push((s + 1, 1));
            Ok(())
        }
    }

    impl AstarGraph for Line {
        fn estimate(&self, from: &i64, to: &i64) -> Cost {
            (from - to).abs()
        }
    }

    #[test]
    fn exact_heuristic_walks_straight_to_goal() {
        let mut engine = Engine::new();
        let (path, cost) = engine.astar_path(&Line, 0, 5).unwrap().unwrap();
        assert_eq!(cost, 5);
        assert_eq!(path, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn same_endpoints() {
        let mut engine = Engine::new();
        let (path, cost) = engine.astar_path(&Line, 3, 3).unwrap().unwrap();
        assert_eq!(path, vec![3]);
        assert_eq!(cost, 0);
    }

    #[test]
    fn heuristic_prunes_exploration() {
        let mut engine = Engine::with_options(SearchOptions::default().with_max_settled(100));
        let guided = engine.astar(&Line, &[0], Goal::Target(20), |s| (20 - s).abs()).unwrap();
        let blind = engine.astar(&Line, &[0], Goal::Target(20), |_| 0).unwrap();
        assert_eq!(guided.goal(), Some((&20, 20)));
        assert_eq!(blind.goal(), Some((&20, 20)));
        assert!(guided.stats().settled < blind.stats().settled);
    }

    #[test]
    fn missing_path_is_none() {
        let g = successors(|&s: &u8| if s < 3 { vec![(s + 1, 1)] } else { vec![] });
        let d = Engine::new().astar(&g, &[0u8], Goal::Target(9), |_| 0).unwrap();
        assert!(d.goal().is_none());
        assert_eq!(d.len(), 4);
    }

    #[test]
    fn negative_estimate_rejected() {
        let err = Engine::new()
            .astar(&Line, &[0], Goal::Target(4), |_| -1)
            .unwrap_err();
        assert_eq!(err, SearchError::NegativeEstimate { estimate: -1 });
    }
}
