use std::convert::Infallible;
use std::hash::Hash;
use std::marker::PhantomData;

/// Edge weights and accumulated distances.
///
/// Signed so that a negative weight handed out by a neighbor function can be
/// detected and rejected.
pub type Cost = i64;

/// An implicitly defined graph: the only way to discover structure is to ask
/// for the outgoing edges of a state.
pub trait Graph {
    /// A node of the search space.
    type State: Clone + Eq + Hash;
    /// Error a neighbor enumeration may fail with. Use [`Infallible`] for
    /// graphs that cannot fail.
    type Error;

    /// Append the outgoing edges of `state` into `buf` as `(next, cost)`.
    /// The engine clears `buf` before calling. Costs must be ≥ 0 and the
    /// sequence must be finite.
    fn neighbors(
        &self,
        state: &Self::State,
        buf: &mut Vec<(Self::State, Cost)>,
    ) -> Result<(), Self::Error>;

    /// Like [`neighbors`](Self::neighbors), but free to stop once `limit`
    /// edges are in `buf`. The engine passes one more than
    /// [`SearchOptions::max_neighbors`](crate::SearchOptions::max_neighbors),
    /// so graphs built on lazy, possibly endless iterators should override
    /// this. The default ignores `limit`.
    #[inline]
    fn neighbors_bounded(
        &self,
        state: &Self::State,
        buf: &mut Vec<(Self::State, Cost)>,
        limit: usize,
    ) -> Result<(), Self::Error> {
        let _ = limit;
        self.neighbors(state, buf)
    }
}

/// Graph with an admissible point-to-point estimate, for A*.
pub trait AstarGraph: Graph {
    /// Estimated cost from `from` to `to`. Must never overestimate the true
    /// cost and must be ≥ 0.
    fn estimate(&self, from: &Self::State, to: &Self::State) -> Cost;
}

impl<G: Graph + ?Sized> Graph for &G {
    type State = G::State;
    type Error = G::Error;

    #[inline]
    fn neighbors(
        &self,
        state: &Self::State,
        buf: &mut Vec<(Self::State, Cost)>,
    ) -> Result<(), Self::Error> {
        (**self).neighbors(state, buf)
    }

    #[inline]
    fn neighbors_bounded(
        &self,
        state: &Self::State,
        buf: &mut Vec<(Self::State, Cost)>,
        limit: usize,
    ) -> Result<(), Self::Error> {
        (**self).neighbors_bounded(state, buf, limit)
    }
}

impl<G: AstarGraph + ?Sized> AstarGraph for &G {
    #[inline]
    fn estimate(&self, from: &Self::State, to: &Self::State) -> Cost {
        (**self).estimate(from, to)
    }
}

// ---------------------------------------------------------------------------
// Closure adapters
// ---------------------------------------------------------------------------

/// Graph backed by a closure that fills the edge buffer.
///
/// Built with [`from_fn`].
pub struct FnGraph<S, F> {
    f: F,
    _state: PhantomData<fn(&S)>,
}

/// Wrap `f(state, buf)` as an infallible [`Graph`].
pub fn from_fn<S, F>(f: F) -> FnGraph<S, F>
where
    S: Clone + Eq + Hash,
    F: Fn(&S, &mut Vec<(S, Cost)>),
{
    FnGraph {
        f,
        _state: PhantomData,
    }
}

impl<S, F> Graph for FnGraph<S, F>
where
    S: Clone + Eq + Hash,
    F: Fn(&S, &mut Vec<(S, Cost)>),
{
    type State = S;
    type Error = Infallible;

    #[inline]
    fn neighbors(&self, state: &S, buf: &mut Vec<(S, Cost)>) -> Result<(), Infallible> {
        (self.f)(state, buf);
        Ok(())
    }
}

/// Graph backed by a fallible closure. Built with [`try_from_fn`].
pub struct TryFnGraph<S, E, F> {
    f: F,
    _marker: PhantomData<fn(&S) -> E>,
}

/// Wrap a fallible `f(state, buf)` as a [`Graph`]; its errors reach the
/// caller unchanged inside [`SearchError::Neighbors`](crate::SearchError::Neighbors).
pub fn try_from_fn<S, E, F>(f: F) -> TryFnGraph<S, E, F>
where
    S: Clone + Eq + Hash,
    F: Fn(&S, &mut Vec<(S, Cost)>) -> Result<(), E>,
{
    TryFnGraph {
        f,
        _marker: PhantomData,
    }
}

impl<S, E, F> Graph for TryFnGraph<S, E, F>
where
    S: Clone + Eq + Hash,
    F: Fn(&S, &mut Vec<(S, Cost)>) -> Result<(), E>,
{
    type State = S;
    type Error = E;

    #[inline]
    fn neighbors(&self, state: &S, buf: &mut Vec<(S, Cost)>) -> Result<(), E> {
        (self.f)(state, buf)
    }
}

/// Graph backed by a closure returning an iterable of edges.
/// Built with [`successors`].
pub struct SuccessorsGraph<S, F> {
    f: F,
    _state: PhantomData<fn(&S)>,
}

/// Wrap `f(state) -> impl IntoIterator<Item = (next, cost)>` as an
/// infallible [`Graph`]. The iterator is pulled lazily, so it may be
/// endless: the search stops pulling past its neighbor limit.
pub fn successors<S, I, F>(f: F) -> SuccessorsGraph<S, F>
where
    S: Clone + Eq + Hash,
    I: IntoIterator<Item = (S, Cost)>,
    F: Fn(&S) -> I,
{
    SuccessorsGraph {
        f,
        _state: PhantomData,
    }
}

impl<S, I, F> Graph for SuccessorsGraph<S, F>
where
    S: Clone + Eq + Hash,
    I: IntoIterator<Item = (S, Cost)>,
    F: Fn(&S) -> I,
{
    type State = S;
    type Error = Infallible;

    #[inline]
    fn neighbors(&self, state: &S, buf: &mut Vec<(S, Cost)>) -> Result<(), Infallible> {
        buf.extend((self.f)(state));
        Ok(())
    }

    #[inline]
    fn neighbors_bounded(
        &self,
        state: &S,
        buf: &mut Vec<(S, Cost)>,
        limit: usize,
    ) -> Result<(), Infallible> {
        buf.extend((self.f)(state).into_iter().take(limit));
        Ok(())
    }
}
