use crate::Cost;

/// Tuning knobs shared by every search run through an [`Engine`](crate::Engine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchOptions {
    /// States whose distance would exceed this are neither recorded nor
    /// expanded.
    pub max_cost: Option<Cost>,
    /// Fail once more than this many states have been settled.
    pub max_settled: Option<usize>,
    /// Fail when one neighbor call yields more edges than this.
    pub max_neighbors: usize,
    /// Record predecessors so paths can be rebuilt from the result.
    pub track_paths: bool,
    /// Record the order in which states were settled.
    pub record_order: bool,
}

impl SearchOptions {
    /// Default limit on edges returned by a single neighbor call.
    pub const DEFAULT_MAX_NEIGHBORS: usize = 1 << 20;

    pub fn with_max_cost(mut self, max_cost: Cost) -> Self {
        self.max_cost = Some(max_cost);
        self
    }

    pub fn with_max_settled(mut self, max_settled: usize) -> Self {
        self.max_settled = Some(max_settled);
        self
    }

    pub fn with_max_neighbors(mut self, max_neighbors: usize) -> Self {
        self.max_neighbors = max_neighbors;
        self
    }

    pub fn with_track_paths(mut self, track_paths: bool) -> Self {
        self.track_paths = track_paths;
        self
    }

    pub fn with_record_order(mut self, record_order: bool) -> Self {
        self.record_order = record_order;
        self
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_cost: None,
            max_settled: None,
            max_neighbors: Self::DEFAULT_MAX_NEIGHBORS,
            track_paths: true,
            record_order: false,
        }
    }
}
