//! Provides the building blocks for search algorithms

use std::collections::HashMap;
use std::default::Default;

use tracing::{debug, trace};

use crate::errors::{Result, SearchError};
use crate::path::{Label, Outcome, Path, SearchReport, Step};
use crate::strategy::Strategy;
use crate::traits::TransitionCost;

use self::frontier::PriorityFrontier;

pub(crate) mod basic;
pub mod frontier;

/// How often, in expansions, progress is logged.
const PROGRESS_INTERVAL: usize = 10_000;

/// Record of how each discovered state was reached:
/// the move label and the predecessor state.
pub(crate) type Explored<S> = HashMap<S, (Label<<S as crate::SearchState>::Move>, S)>;

/// Options which tune a search run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Stop after this many expansions.
    pub limit: Option<usize>,
}

#[derive(Debug)]
pub(crate) struct StepLimit {
    current: usize,
    maximum: Option<usize>,
}

impl StepLimit {
    pub(crate) fn new(limit: Option<usize>) -> Self {
        Self {
            current: 0,
            maximum: limit,
        }
    }

    /// Count one expansion, or fail if the limit was already reached.
    pub(crate) fn increment(&mut self) -> Result<()> {
        if let Some(maximum) = self.maximum {
            if self.current >= maximum {
                return Err(SearchError::StepLimitExhausted(self.current));
            }
        }
        self.current += 1;
        Ok(())
    }

    pub(crate) fn current(&self) -> usize {
        self.current
    }
}

/// A single search from an origin to a fixed goal.
///
/// Every strategy runs through the same driver. Breadth-first
/// search uses its own FIFO traversal, the others share a
/// priority frontier with decrease-key.
#[derive(Debug)]
pub struct SearchAlgorithm<S>
where
    S: TransitionCost,
{
    pub(crate) origin: S,
    pub(crate) goal: S,
    pub(crate) strategy: Strategy<S>,
    pub(crate) options: SearchOptions,
}

/// Build a searcher from `origin` towards `goal`.
pub fn build<S>(origin: S, goal: S, strategy: Strategy<S>) -> SearchAlgorithm<S>
where
    S: TransitionCost,
{
    SearchAlgorithm {
        origin,
        goal,
        strategy,
        options: SearchOptions::default(),
    }
}

/// Run a search with default options.
pub fn search<S>(origin: S, goal: S, strategy: Strategy<S>) -> SearchReport<S>
where
    S: TransitionCost,
{
    build(origin, goal, strategy).run()
}

impl<S> SearchAlgorithm<S>
where
    S: TransitionCost,
{
    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Set a step limit for this search algorithm.
    ///
    /// When this many candidates have been expanded,
    /// the search is reported as truncated.
    pub fn set_limit(&mut self, limit: usize) {
        self.options.limit = Some(limit);
    }

    /// Run the search to completion.
    pub fn run(self) -> SearchReport<S> {
        debug!(
            strategy = self.strategy.name(),
            origin = ?self.origin,
            goal = ?self.goal,
            limit = ?self.options.limit,
            "starting search"
        );

        let report = match self.strategy {
            Strategy::BreadthFirst => basic::bfs(self),
            _ => self.best_first(),
        };

        debug!(
            solved = report.is_solved(),
            cost = ?report.path_cost(),
            frontier = report.frontier_count,
            expanded = report.expanded_count,
            "search finished"
        );
        report
    }

    fn best_first(self) -> SearchReport<S> {
        let mut frontier = PriorityFrontier::new();
        let mut explored: Explored<S> = HashMap::new();
        let mut limit = StepLimit::new(self.options.limit);

        frontier.insert(self.origin.clone(), 0);
        explored.insert(self.origin.clone(), (Label::Start, self.origin.clone()));
        let mut frontier_count = 1;

        while let Some((current, priority)) = frontier.pop() {
            if limit.increment().is_err() {
                return SearchReport {
                    outcome: Outcome::Truncated(limit.current()),
                    frontier_count,
                    expanded_count: limit.current(),
                };
            }

            if limit.current() % PROGRESS_INTERVAL == 0 {
                debug!(
                    frontier = frontier.len(),
                    explored = explored.len(),
                    expanded = limit.current(),
                    priority,
                    "search progress"
                );
            }

            if current == self.goal {
                return SearchReport {
                    outcome: Outcome::Solved(reconstruct(&explored, &self.origin, current)),
                    frontier_count,
                    expanded_count: limit.current(),
                };
            }

            for (label, child) in current.successors() {
                let score = self.strategy.priority(&current, priority, &child);

                if !explored.contains_key(&child) {
                    explored.insert(child.clone(), (Label::Move(label), current.clone()));
                    frontier.insert(child, score);
                    frontier_count += 1;
                } else if frontier.priority(&child).map_or(false, |p| p > score) {
                    trace!(state = ?child, priority = score, "relaxing frontier entry");
                    explored.insert(child.clone(), (Label::Move(label), current.clone()));
                    frontier.insert(child, score);
                }
            }
        }

        SearchReport {
            outcome: Outcome::Exhausted,
            frontier_count,
            expanded_count: limit.current(),
        }
    }
}

/// Walk the explored map back from `goal` to `origin`.
///
/// Predecessors are keys into the map, so the walk ends when the
/// origin is reached. Costs are summed along the way.
pub(crate) fn reconstruct<S>(explored: &Explored<S>, origin: &S, goal: S) -> Path<S>
where
    S: TransitionCost,
{
    let mut steps = Vec::new();
    let mut cost = 0;
    let mut state = goal;

    while &state != origin {
        let (label, previous) = match explored.get(&state) {
            Some((label, previous)) => (label.clone(), previous.clone()),
            None => panic!("{:?} was reached but never explored", state),
        };
        cost += previous.cost(&state);
        steps.push(Step { label, state });
        state = previous;
    }

    steps.push(Step {
        label: Label::Start,
        state,
    });
    steps.reverse();

    Path { steps, cost }
}
