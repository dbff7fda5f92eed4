use std::cmp::Ordering;
use std::collections::hash_map::Entry as MapEntry;
use std::collections::{BinaryHeap, HashMap};

use crate::distances::{Distances, SearchStats};
use crate::error::SearchError;
use crate::goal::Goal;
use crate::options::SearchOptions;
use crate::traits::{Cost, Graph};

// ---------------------------------------------------------------------------
// Frontier entry
// ---------------------------------------------------------------------------

/// Frontier entry, ordered by `priority` for use in `BinaryHeap`.
///
/// `priority` is the tentative distance, plus the heuristic estimate in A*
/// mode. The state itself takes no part in the ordering.
pub(crate) struct Entry<S> {
    pub(crate) priority: Cost,
    pub(crate) dist: Cost,
    pub(crate) state: S,
}

impl<S> PartialEq for Entry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.dist == other.dist
    }
}

impl<S> Eq for Entry<S> {}

impl<S> Ord for Entry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest priority first;
        // among equals prefer the entry that got further.
        other
            .priority
            .cmp(&self.priority)
            .then(self.dist.cmp(&other.dist))
    }
}

impl<S> PartialOrd for Entry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Shortest-path engine over graphs whose states are `S`.
///
/// The engine keeps its [`SearchOptions`] and a neighbor scratch buffer that
/// is reused across calls. The distance table, settled set and frontier
/// belong to a single call and are never shared between searches.
#[derive(Debug, Clone)]
pub struct Engine<S> {
    pub(crate) options: SearchOptions,
    pub(crate) nbuf: Vec<(S, Cost)>,
}

impl<S> Default for Engine<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Engine<S> {
    /// Create an engine with default options.
    pub fn new() -> Self {
        Self::with_options(SearchOptions::default())
    }

    /// Create an engine with the given options.
    pub fn with_options(options: SearchOptions) -> Self {
        Self {
            options,
            nbuf: Vec::new(),
        }
    }

    #[inline]
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    #[inline]
    pub fn options_mut(&mut self) -> &mut SearchOptions {
        &mut self.options
    }
}

impl<S: Clone + Eq + std::hash::Hash> Engine<S> {
    /// Best-first search shared by Dijkstra and A*.
    ///
    /// `estimate` returns 0 everywhere for plain Dijkstra.
    pub(crate) fn run<G, H>(
        &mut self,
        graph: &G,
        seeds: impl IntoIterator<Item = (S, Cost)>,
        goal: &Goal<'_, S>,
        estimate: H,
        track_paths: bool,
    ) -> Result<Distances<S>, SearchError<G::Error>>
    where
        G: Graph<State = S>,
        H: Fn(&S) -> Cost,
    {
        let mut nbuf = std::mem::take(&mut self.nbuf);
        let result = self.best_first(graph, seeds, goal, estimate, track_paths, &mut nbuf);
        nbuf.clear();
        self.nbuf = nbuf;
        result
    }

    fn best_first<G, H>(
        &self,
        graph: &G,
        seeds: impl IntoIterator<Item = (S, Cost)>,
        goal: &Goal<'_, S>,
        estimate: H,
        track_paths: bool,
        nbuf: &mut Vec<(S, Cost)>,
    ) -> Result<Distances<S>, SearchError<G::Error>>
    where
        G: Graph<State = S>,
        H: Fn(&S) -> Cost,
    {
        let opts = self.options;
        let priority_of = |state: &S, dist: Cost| -> Result<Cost, SearchError<G::Error>> {
            let h = estimate(state);
            if h < 0 {
                return Err(SearchError::NegativeEstimate { estimate: h });
            }
            dist.checked_add(h).ok_or(SearchError::CostOverflow)
        };

        let mut tentative: HashMap<S, Cost> = HashMap::new();
        let mut settled: HashMap<S, Cost> = HashMap::new();
        let mut parents: HashMap<S, S> = HashMap::new();
        let mut order = Vec::new();
        let mut stats = SearchStats::default();
        let mut open: BinaryHeap<Entry<S>> = BinaryHeap::new();
        let mut reached = None;

        // Seed sources.
        let mut seeded = false;
        for (src, d) in seeds {
            seeded = true;
            if d < 0 {
                return Err(SearchError::NegativeInitialDistance { distance: d });
            }
            if opts.max_cost.is_some_and(|m| d > m) {
                continue;
            }
            match tentative.entry(src.clone()) {
                MapEntry::Occupied(mut e) => {
                    if d >= *e.get() {
                        continue;
                    }
                    e.insert(d);
                }
                MapEntry::Vacant(e) => {
                    e.insert(d);
                }
            }
            let priority = priority_of(&src, d)?;
            open.push(Entry {
                priority,
                dist: d,
                state: src,
            });
            stats.pushed += 1;
        }
        if !seeded {
            return Err(SearchError::NoSources);
        }

        while let Some(current) = open.pop() {
            if settled.contains_key(&current.state) {
                stats.stale += 1;
                continue;
            }
            let Entry {
                dist: current_d,
                state,
                ..
            } = current;
            tentative.remove(&state);
            settled.insert(state.clone(), current_d);
            stats.settled += 1;
            log::trace!("settled state at distance {current_d}");

            if let Some(limit) = opts.max_settled {
                if stats.settled > limit {
                    log::warn!("search aborted after settling {limit} states");
                    return Err(SearchError::SettledLimit { limit });
                }
            }
            if opts.record_order {
                order.push(state.clone());
            }
            if goal.is_reached_by(&state) {
                reached = Some(state);
                break;
            }

            nbuf.clear();
            graph
                .neighbors_bounded(&state, nbuf, opts.max_neighbors.saturating_add(1))
                .map_err(SearchError::Neighbors)?;
            stats.expanded += 1;
            if nbuf.len() > opts.max_neighbors {
                return Err(SearchError::TooManyNeighbors {
                    count: nbuf.len(),
                    limit: opts.max_neighbors,
                });
            }

            for (next, cost) in nbuf.drain(..) {
                if cost < 0 {
                    return Err(SearchError::NegativeCost { cost });
                }
                if settled.contains_key(&next) {
                    continue;
                }
                let candidate = current_d
                    .checked_add(cost)
                    .ok_or(SearchError::CostOverflow)?;
                if opts.max_cost.is_some_and(|m| candidate > m) {
                    continue;
                }
                if tentative.get(&next).is_some_and(|&best| candidate >= best) {
                    continue;
                }
                let priority = priority_of(&next, candidate)?;
                tentative.insert(next.clone(), candidate);
                if track_paths {
                    parents.insert(next.clone(), state.clone());
                }
                open.push(Entry {
                    priority,
                    dist: candidate,
                    state: next,
                });
                stats.pushed += 1;
            }
        }

        if track_paths {
            parents.retain(|s, _| settled.contains_key(s));
        }
        log::debug!(
            "search settled {} states ({} expansions, {} stale entries), goal {}",
            stats.settled,
            stats.expanded,
            stats.stale,
            if reached.is_some() { "reached" } else { "not reached" },
        );

        Ok(Distances {
            dist: settled,
            parents,
            tracked: track_paths,
            goal: reached,
            order,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heap_pops_lowest_priority_first() {
        let mut open = BinaryHeap::new();
        for (priority, state) in [(5, 'a'), (1, 'b'), (3, 'c')] {
            open.push(Entry {
                priority,
                dist: priority,
                state,
            });
        }
        let popped: Vec<char> = std::iter::from_fn(|| open.pop().map(|e| e.state)).collect();
        assert_eq!(popped, vec!['b', 'c', 'a']);
    }

    #[test]
    fn ties_prefer_larger_distance() {
        let mut open = BinaryHeap::new();
        open.push(Entry {
            priority: 4,
            dist: 1,
            state: 'x',
        });
        open.push(Entry {
            priority: 4,
            dist: 3,
            state: 'y',
        });
        assert_eq!(open.pop().map(|e| e.state), Some('y'));
    }
}
