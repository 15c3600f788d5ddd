//! Expansion orderings shared by the search driver.

use std::fmt;

use crate::traits::{Heuristic, TransitionCost};

/// Ordering key for the search frontier. Lower values are expanded first.
///
/// Signed because the A* ordering subtracts the parent heuristic,
/// which can push priorities below zero.
pub type Priority = isize;

/// Selects how the driver ranks newly discovered states.
pub enum Strategy<S> {
    /// Every state ranks equally, so states are expanded in discovery order.
    BreadthFirst,

    /// Rank by accumulated path cost.
    UniformCost,

    /// Rank by the heuristic estimate alone, ignoring the path so far.
    Greedy(Heuristic<S>),

    /// Rank by path cost plus the heuristic estimate.
    AStar(Heuristic<S>),
}

impl<S> Strategy<S> {
    /// Short name, used for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "breadth-first",
            Strategy::UniformCost => "uniform-cost",
            Strategy::Greedy(_) => "greedy",
            Strategy::AStar(_) => "astar",
        }
    }
}

impl<S> Strategy<S>
where
    S: TransitionCost,
{
    /// Priority for `child`, discovered by expanding `parent`, whose own
    /// frontier priority was `current` when it was extracted.
    ///
    /// For A* the parent's heuristic is subtracted again: `current` already
    /// carries it, so priorities stay `g + h - h(origin)` along any path.
    pub fn priority(&self, parent: &S, current: Priority, child: &S) -> Priority {
        match self {
            Strategy::BreadthFirst => 0,
            Strategy::UniformCost => current + parent.cost(child) as Priority,
            Strategy::Greedy(h) => h(child) as Priority,
            Strategy::AStar(h) => {
                current + parent.cost(child) as Priority + h(child) as Priority
                    - h(parent) as Priority
            }
        }
    }
}

// Manual impls: deriving would demand `S: Clone`, but only fn pointers are held.
impl<S> Clone for Strategy<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Strategy<S> {}

impl<S> fmt::Debug for Strategy<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Strategy({})", self.name())
    }
}
