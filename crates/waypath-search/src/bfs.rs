use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use crate::Engine;
use crate::distances::{Distances, SearchStats};
use crate::error::SearchError;
use crate::traits::{Cost, Graph};

impl<S: Clone + Eq + Hash> Engine<S> {
    /// Compute a multi-source breadth-first search distance map.
    ///
    /// Every edge counts as one step whatever its cost (negative costs are
    /// still rejected). States further than `max_dist` steps, or than
    /// [`SearchOptions::max_cost`](crate::SearchOptions::max_cost) if that is
    /// smaller, are left out. A negative cutoff yields an empty map.
    pub fn bfs_map<G>(
        &mut self,
        graph: &G,
        sources: &[S],
        max_dist: Cost,
    ) -> Result<Distances<S>, SearchError<G::Error>>
    where
        G: Graph<State = S>,
    {
        if sources.is_empty() {
            return Err(SearchError::NoSources);
        }
        let opts = self.options;
        let cutoff = opts.max_cost.map_or(max_dist, |m| m.min(max_dist));
        let mut dist: HashMap<S, Cost> = HashMap::new();
        let mut parents: HashMap<S, S> = HashMap::new();
        let mut order = Vec::new();
        let mut stats = SearchStats::default();
        let mut queue: VecDeque<S> = VecDeque::new();

        for src in sources {
            if cutoff < 0 || dist.contains_key(src) {
                continue;
            }
            dist.insert(src.clone(), 0);
            queue.push_back(src.clone());
            stats.pushed += 1;
        }

        // The scratch buffer is dropped on error paths; it is only a cache.
        let mut nbuf = std::mem::take(&mut self.nbuf);
        while let Some(current) = queue.pop_front() {
            let current_dist = dist[&current];
            stats.settled += 1;
            if let Some(limit) = opts.max_settled {
                if stats.settled > limit {
                    log::warn!("breadth-first search aborted after {limit} states");
                    return Err(SearchError::SettledLimit { limit });
                }
            }
            if opts.record_order {
                order.push(current.clone());
            }

            nbuf.clear();
            graph
                .neighbors_bounded(&current, &mut nbuf, opts.max_neighbors.saturating_add(1))
                .map_err(SearchError::Neighbors)?;
            stats.expanded += 1;
            if nbuf.len() > opts.max_neighbors {
                return Err(SearchError::TooManyNeighbors {
                    count: nbuf.len(),
                    limit: opts.max_neighbors,
                });
            }

            let nd = current_dist + 1;
            for (next, cost) in nbuf.drain(..) {
                if cost < 0 {
                    return Err(SearchError::NegativeCost { cost });
                }
                if nd > cutoff || dist.contains_key(&next) {
                    continue;
                }
                dist.insert(next.clone(), nd);
                if opts.track_paths {
                    parents.insert(next.clone(), current.clone());
                }
                queue.push_back(next);
                stats.pushed += 1;
            }
        }
        self.nbuf = nbuf;

        log::debug!(
            "breadth-first search reached {} states in {} expansions",
            dist.len(),
            stats.expanded
        );
        Ok(Distances {
            dist,
            parents,
            tracked: opts.track_paths,
            goal: None,
            order,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::SearchOptions;
    use crate::traits::successors;

    #[test]
    fn counts_steps_not_costs() {
        let g = successors(|&n: &u32| if n < 5 { vec![(n + 1, 100)] } else { vec![] });
        let d = Engine::new().bfs_map(&g, &[0u32], 100).unwrap();
        assert_eq!(d[&5], 5);
        assert_eq!(d.path_to(&3), Some(vec![0, 1, 2, 3]));
    }

    #[test]
    fn max_dist_cuts_expansion() {
        let g = successors(|&n: &u32| [(n + 1, 1)]);
        let d = Engine::new().bfs_map(&g, &[0u32], 3).unwrap();
        assert_eq!(d.len(), 4);
        assert!(!d.contains(&4));
    }

    #[test]
    fn duplicate_sources_collapse() {
        let g = successors(|&n: &i32| if n.abs() < 2 { vec![(n - 1, 1), (n + 1, 1)] } else { vec![] });
        let d = Engine::new().bfs_map(&g, &[0, 0, 0], 10).unwrap();
        assert_eq!(d.len(), 5);
        assert_eq!(d[&-2], 2);
        assert_eq!(d.stats().pushed, 5);
    }

    #[test]
    fn max_cost_tightens_the_cutoff() {
        let g = successors(|&n: &u32| [(n + 1, 1)]);
        let mut engine = Engine::with_options(SearchOptions::default().with_max_cost(2));
        let d = engine.bfs_map(&g, &[0u32], 10).unwrap();
        assert_eq!(d.len(), 3);
        assert!(!d.contains(&3));
    }

    #[test]
    fn negative_cutoff_reaches_nothing() {
        let g = successors(|&n: &u32| [(n + 1, 1)]);
        let d = Engine::new().bfs_map(&g, &[0u32], -1).unwrap();
        assert!(d.is_empty());
        assert!(!d.contains(&0));
    }

    #[test]
    fn endless_neighbors_are_cut_off() {
        let g = successors(|&n: &u64| (n + 1..).map(|m| (m, 1)));
        let mut engine = Engine::with_options(SearchOptions::default().with_max_neighbors(5));
        assert_eq!(
            engine.bfs_map(&g, &[0u64], 3).unwrap_err(),
            SearchError::TooManyNeighbors { count: 6, limit: 5 }
        );
    }

    #[test]
    fn rejects_negative_costs_and_empty_sources() {
        let g = successors(|&n: &u32| [(n + 1, -1)]);
        let mut engine = Engine::new();
        assert_eq!(
            engine.bfs_map(&g, &[0u32], 10).unwrap_err(),
            SearchError::NegativeCost { cost: -1 }
        );
        assert_eq!(engine.bfs_map(&g, &[], 10).unwrap_err(), SearchError::NoSources);
    }
}
