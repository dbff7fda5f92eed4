//! Shortest paths over implicitly defined graphs.
//!
//! A graph is never materialised: callers implement [`Graph`] (or wrap a
//! closure with [`successors`], [`from_fn`] or [`try_from_fn`]) and the
//! engine asks for the outgoing edges of each state as it reaches it, so
//! infinite or combinatorially large state spaces are fine as long as the
//! part that matters is reachable.
//!
//! All searches go through an [`Engine`]:
//!
//! - **Dijkstra** distance maps and goal searches
//!   ([`Engine::find_shortest_paths`], [`Engine::find_shortest_paths_from`],
//!   [`Engine::shortest_distance`])
//! - **A\*** with a caller heuristic or a graph estimate
//!   ([`Engine::astar`], [`Engine::astar_path`])
//! - **BFS** step-count maps ([`Engine::bfs_map`])
//!
//! Edge costs must be non-negative; a negative cost aborts the search with
//! [`SearchError::NegativeCost`]. Unreachable states are simply absent from
//! the returned [`Distances`].
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Graph`] | Dijkstra, BFS, A* with a closure heuristic |
//! | [`AstarGraph`] : [`Graph`] | [`Engine::astar_path`] |

mod astar;
mod bfs;
mod dijkstra;
mod distance;
mod distances;
mod engine;
mod error;
mod goal;
mod grid;
mod neighbors;
mod options;
mod traits;

pub use distance::{chebyshev, manhattan};
pub use distances::{Distances, SearchStats};
pub use engine::Engine;
pub use error::{SearchError, Unreachable};
pub use goal::Goal;
pub use grid::WeightedGrid;
pub use neighbors::Connectivity;
pub use options::SearchOptions;
pub use traits::{
    AstarGraph, Cost, FnGraph, Graph, SuccessorsGraph, TryFnGraph, from_fn, successors,
    try_from_fn,
};
