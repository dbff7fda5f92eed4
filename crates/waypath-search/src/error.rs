use std::fmt;

use crate::Cost;

/// Errors a search can fail with. `E` is the graph's own neighbor error.
///
/// An unreachable goal is not an error; it shows up as an absent entry in
/// [`Distances`](crate::Distances).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError<E> {
    /// The search was started without any source state.
    NoSources,
    /// A seed was given a negative initial distance.
    NegativeInitialDistance { distance: Cost },
    /// The neighbor function produced an edge with a negative cost.
    NegativeCost { cost: Cost },
    /// The A* heuristic returned a negative estimate.
    NegativeEstimate { estimate: Cost },
    /// A distance (or priority) no longer fits in [`Cost`].
    CostOverflow,
    /// A single neighbor enumeration produced more edges than allowed.
    /// `count` is how many were collected before giving up, which for a
    /// lazily enumerated graph is `limit + 1`.
    TooManyNeighbors { count: usize, limit: usize },
    /// More states were settled than the configured budget allows.
    SettledLimit { limit: usize },
    /// The neighbor function failed.
    Neighbors(E),
}

impl<E: fmt::Display> fmt::Display for SearchError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSources => write!(f, "search started without source states"),
            Self::NegativeInitialDistance { distance } => {
                write!(f, "negative initial distance {distance} for a source state")
            }
            Self::NegativeCost { cost } => write!(f, "negative edge cost {cost}"),
            Self::NegativeEstimate { estimate } => {
                write!(f, "negative heuristic estimate {estimate}")
            }
            Self::CostOverflow => write!(f, "path cost overflow"),
            Self::TooManyNeighbors { count, limit } => write!(
                f,
                "neighbor function returned {count} edges for one state (limit {limit})"
            ),
            Self::SettledLimit { limit } => {
                write!(f, "search exceeded its budget of {limit} settled states")
            }
            Self::Neighbors(e) => write!(f, "neighbor function failed: {e}"),
        }
    }
}

impl<E> std::error::Error for SearchError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Neighbors(e) => Some(e),
            _ => None,
        }
    }
}

/// Lookup of a state the search never reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unreachable;

impl fmt::Display for Unreachable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "state was not reached by the search")
    }
}

impl std::error::Error for Unreachable {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;
    use std::error::Error;

    #[derive(Debug)]
    struct Boom;

    impl fmt::Display for Boom {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "boom")
        }
    }

    impl Error for Boom {}

    #[test]
    fn display_messages() {
        let e: SearchError<Infallible> = SearchError::NegativeCost { cost: -3 };
        assert_eq!(e.to_string(), "negative edge cost -3");
        let e: SearchError<Infallible> = SearchError::TooManyNeighbors { count: 9, limit: 4 };
        assert_eq!(
            e.to_string(),
            "neighbor function returned 9 edges for one state (limit 4)"
        );
    }

    #[test]
    fn neighbor_error_is_the_source() {
        let e = SearchError::Neighbors(Boom);
        assert_eq!(e.to_string(), "neighbor function failed: boom");
        assert_eq!(e.source().map(|s| s.to_string()), Some("boom".to_string()));
        let e: SearchError<Boom> = SearchError::CostOverflow;
        assert!(e.source().is_none());
    }
}
