use std::fmt::Debug;
use std::hash::Hash;

/// Numeric type used for transition costs and heuristic estimates.
pub type Cost = usize;

/// Provides an interface for conducting searches.
///
/// A state is an immutable configuration which knows
/// how to enumerate the states directly reachable from it.
/// States are compared by value, and must hash consistently
/// so that they can key the explored map.
pub trait SearchState: Debug + Clone + Eq + Hash {
    /// Label identifying the action which produced a successor.
    type Move: Debug + Clone + Eq;

    /// Produces the states adjacent to this one, along with
    /// the move which reaches each of them. The order must
    /// be deterministic for searches to be reproducible.
    fn successors(&self) -> Vec<(Self::Move, Self)>;
}

/// An interface for states where moving between neighbors has a price.
pub trait TransitionCost: SearchState {
    /// Cost of moving from this state to `next`.
    ///
    /// Must be strictly positive. Only defined when `next` is a direct
    /// successor of this state; implementations should panic otherwise.
    fn cost(&self, next: &Self) -> Cost;
}

/// Best guess of the remaining cost from a state to the goal.
pub type Heuristic<S> = fn(&S) -> Cost;
