//! Paths and reports produced by a search.

use std::fmt;

use crate::errors::{Result, SearchError};
use crate::traits::{Cost, SearchState};

/// How a state on a path was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label<M> {
    /// Marks the origin, which no move produced.
    Start,
    Move(M),
}

impl<M> Label<M> {
    pub fn is_start(&self) -> bool {
        matches!(self, Label::Start)
    }
}

impl<M> fmt::Display for Label<M>
where
    M: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            // Padding is forwarded so that `{:5}` lines up both variants.
            Label::Start => f.pad("start"),
            Label::Move(m) => f.pad(&m.to_string()),
        }
    }
}

/// One entry on a path: the move taken and the state it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<S>
where
    S: SearchState,
{
    pub label: Label<S::Move>,
    pub state: S,
}

/// A walk from the origin to the goal, both included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<S>
where
    S: SearchState,
{
    pub(crate) steps: Vec<Step<S>>,
    pub(crate) cost: Cost,
}

impl<S> Path<S>
where
    S: SearchState,
{
    /// A path which starts and ends at `origin`.
    pub fn new(origin: S) -> Self {
        Self {
            steps: vec![Step {
                label: Label::Start,
                state: origin,
            }],
            cost: 0,
        }
    }

    /// Number of states on the path, including the origin.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Number of moves taken.
    pub fn moves(&self) -> usize {
        self.steps.len() - 1
    }

    /// Sum of the transition costs along the path.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn origin(&self) -> &S {
        &self.steps[0].state
    }

    pub fn destination(&self) -> &S {
        &self.steps[self.steps.len() - 1].state
    }

    pub fn iter(&self) -> impl Iterator<Item = &Step<S>> {
        self.steps.iter()
    }

    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.steps.iter().map(|s| &s.state)
    }
}

impl<'p, S> IntoIterator for &'p Path<S>
where
    S: SearchState,
{
    type Item = &'p Step<S>;
    type IntoIter = std::slice::Iter<'p, Step<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// How a search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<S>
where
    S: SearchState,
{
    /// The goal was reached.
    Solved(Path<S>),

    /// Every reachable state was expanded without finding the goal.
    Exhausted,

    /// The expansion limit was hit before the goal was found.
    Truncated(usize),
}

/// The result of a search, with counters which are valid however it ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport<S>
where
    S: SearchState,
{
    pub outcome: Outcome<S>,

    /// Distinct states ever placed on the frontier.
    pub frontier_count: usize,

    /// States removed from the frontier and expanded.
    pub expanded_count: usize,
}

impl<S> SearchReport<S>
where
    S: SearchState,
{
    pub fn is_solved(&self) -> bool {
        matches!(self.outcome, Outcome::Solved(_))
    }

    pub fn path(&self) -> Option<&Path<S>> {
        match &self.outcome {
            Outcome::Solved(path) => Some(path),
            _ => None,
        }
    }

    pub fn path_cost(&self) -> Option<Cost> {
        self.path().map(|p| p.cost())
    }

    /// Discard the counters, treating an unsolved search as an error.
    pub fn into_result(self) -> Result<Path<S>> {
        match self.outcome {
            Outcome::Solved(path) => Ok(path),
            Outcome::Exhausted => Err(SearchError::NoResultFound),
            Outcome::Truncated(n) => Err(SearchError::StepLimitExhausted(n)),
        }
    }
}
