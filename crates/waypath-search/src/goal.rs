use std::fmt;

/// When a search may stop.
pub enum Goal<'a, S> {
    /// Explore until the frontier is exhausted.
    Exhaust,
    /// Stop once this state is settled.
    Target(S),
    /// Stop once any state satisfying the predicate is settled.
    Predicate(&'a dyn Fn(&S) -> bool),
}

impl<S: PartialEq> Goal<'_, S> {
    /// Whether a freshly settled `state` ends the search.
    #[inline]
    pub fn is_reached_by(&self, state: &S) -> bool {
        match self {
            Goal::Exhaust => false,
            Goal::Target(t) => t == state,
            Goal::Predicate(pred) => pred(state),
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for Goal<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Goal::Exhaust => write!(f, "Exhaust"),
            Goal::Target(t) => f.debug_tuple("Target").field(t).finish(),
            Goal::Predicate(_) => write!(f, "Predicate(..)"),
        }
    }
}
