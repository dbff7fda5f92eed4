use std::hash::Hash;

use crate::Engine;
use crate::distances::Distances;
use crate::error::SearchError;
use crate::goal::Goal;
use crate::traits::{Cost, Graph};

impl<S: Clone + Eq + Hash> Engine<S> {
    /// Compute shortest distances from every state in `sources` (all at
    /// distance 0) using Dijkstra's algorithm.
    ///
    /// With [`Goal::Exhaust`] the whole reachable graph is settled. With a
    /// target or predicate the search stops as soon as a matching state is
    /// settled; the result then holds every state settled so far.
    pub fn find_shortest_paths<G>(
        &mut self,
        graph: &G,
        sources: &[S],
        goal: Goal<'_, S>,
    ) -> Result<Distances<S>, SearchError<G::Error>>
    where
        G: Graph<State = S>,
    {
        self.find_shortest_paths_from(graph, sources.iter().map(|s| (s.clone(), 0)), goal)
    }

    /// Like [`find_shortest_paths`](Self::find_shortest_paths), but each seed
    /// carries its own initial distance. Duplicate seeds keep the smallest.
    pub fn find_shortest_paths_from<G>(
        &mut self,
        graph: &G,
        seeds: impl IntoIterator<Item = (S, Cost)>,
        goal: Goal<'_, S>,
    ) -> Result<Distances<S>, SearchError<G::Error>>
    where
        G: Graph<State = S>,
    {
        let track = self.options.track_paths;
        self.run(graph, seeds, &goal, |_| 0, track)
    }

    /// Shortest distance from `source` to `target`, or `None` if there is
    /// no path.
    pub fn shortest_distance<G>(
        &mut self,
        graph: &G,
        source: S,
        target: S,
    ) -> Result<Option<Cost>, SearchError<G::Error>>
    where
        G: Graph<State = S>,
    {
        let goal = Goal::Target(target);
        let found = self.run(graph, [(source, 0)], &goal, |_| 0, false)?;
        Ok(found.goal().map(|(_, d)| d))
    }
}
