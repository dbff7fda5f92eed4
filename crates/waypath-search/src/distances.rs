use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Index;

use crate::Cost;
use crate::error::Unreachable;

/// Counters collected while a search runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// States whose distance was finalized.
    pub settled: usize,
    /// Neighbor enumerations performed.
    pub expanded: usize,
    /// Entries pushed onto the frontier, sources included.
    pub pushed: usize,
    /// Popped entries discarded because their state was already settled.
    pub stale: usize,
}

/// Result of a search: the final distance of every settled state.
///
/// Only settled states appear, so every value is a true shortest distance
/// from the nearest source. A state the search never reached is absent;
/// [`get`](Self::get) returns `None` and indexing panics.
#[derive(Debug, Clone)]
pub struct Distances<S> {
    pub(crate) dist: HashMap<S, Cost>,
    pub(crate) parents: HashMap<S, S>,
    pub(crate) tracked: bool,
    pub(crate) goal: Option<S>,
    pub(crate) order: Vec<S>,
    pub(crate) stats: SearchStats,
}

impl<S: Clone + Eq + Hash> Distances<S> {
    /// Shortest distance to `state`, if it was reached.
    #[inline]
    pub fn get(&self, state: &S) -> Option<Cost> {
        self.dist.get(state).copied()
    }

    /// Shortest distance to `state`, treating absence as an error.
    pub fn require(&self, state: &S) -> Result<Cost, Unreachable> {
        self.get(state).ok_or(Unreachable)
    }

    /// Whether `state` was reached.
    #[inline]
    pub fn contains(&self, state: &S) -> bool {
        self.dist.contains_key(state)
    }

    /// Number of reached states.
    #[inline]
    pub fn len(&self) -> usize {
        self.dist.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }

    /// Iterate over `(state, distance)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, Cost)> + '_ {
        self.dist.iter().map(|(s, &d)| (s, d))
    }

    /// The state that satisfied the goal, with its distance. `None` when
    /// the goal was never reached or the search had no goal.
    pub fn goal(&self) -> Option<(&S, Cost)> {
        let s = self.goal.as_ref()?;
        Some((s, self.dist[s]))
    }

    /// Rebuild the path from a source to `state`, both ends included.
    ///
    /// Returns `None` if `state` was not reached or the search ran without
    /// path tracking.
    pub fn path_to(&self, state: &S) -> Option<Vec<S>> {
        if !self.tracked || !self.contains(state) {
            return None;
        }
        let mut path = vec![state.clone()];
        let mut cur = state;
        while let Some(prev) = self.parents.get(cur) {
            path.push(prev.clone());
            cur = prev;
        }
        path.reverse();
        Some(path)
    }

    /// States in the order they were settled, when the search recorded it.
    #[inline]
    pub fn settled_order(&self) -> &[S] {
        &self.order
    }

    /// Counters from the run that produced this result.
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Take the underlying distance map.
    pub fn into_map(self) -> HashMap<S, Cost> {
        self.dist
    }
}

impl<S: Clone + Eq + Hash> Index<&S> for Distances<S> {
    type Output = Cost;

    /// Panics if `state` was not reached.
    fn index(&self, state: &S) -> &Cost {
        match self.dist.get(state) {
            Some(d) => d,
            None => panic!("{}", Unreachable),
        }
    }
}
