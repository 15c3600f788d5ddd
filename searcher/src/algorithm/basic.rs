//! Breadth-first traversal.

use std::collections::HashMap;

use tracing::debug;

use super::frontier::BreadthQueue;
use super::{reconstruct, Explored, SearchAlgorithm, StepLimit, PROGRESS_INTERVAL};
use crate::path::{Label, Outcome, SearchReport};
use crate::traits::TransitionCost;

/// Breadth-first search, where the order is determined
/// by the successors returned by [crate::SearchState::successors].
///
/// Every priority would be equal, so no comparisons are made: a state
/// is settled the moment it is discovered, and the goal is recognised
/// on discovery without being queued.
pub(crate) fn bfs<S>(search: SearchAlgorithm<S>) -> SearchReport<S>
where
    S: TransitionCost,
{
    let SearchAlgorithm {
        origin,
        goal,
        options,
        ..
    } = search;

    let mut queue = BreadthQueue::default();
    let mut explored: Explored<S> = HashMap::new();
    let mut limit = StepLimit::new(options.limit);

    queue.push(origin.clone());
    explored.insert(origin.clone(), (Label::Start, origin.clone()));
    let mut frontier_count = 1;

    while let Some(current) = queue.pop() {
        if limit.increment().is_err() {
            return SearchReport {
                outcome: Outcome::Truncated(limit.current()),
                frontier_count,
                expanded_count: limit.current(),
            };
        }

        if limit.current() % PROGRESS_INTERVAL == 0 {
            debug!(
                frontier = queue.len(),
                explored = explored.len(),
                expanded = limit.current(),
                "search progress"
            );
        }

        if current == goal {
            return SearchReport {
                outcome: Outcome::Solved(reconstruct(&explored, &origin, current)),
                frontier_count,
                expanded_count: limit.current(),
            };
        }

        for (label, child) in current.successors() {
            if explored.contains_key(&child) {
                continue;
            }

            explored.insert(child.clone(), (Label::Move(label), current.clone()));

            if child == goal {
                return SearchReport {
                    outcome: Outcome::Solved(reconstruct(&explored, &origin, child)),
                    frontier_count,
                    expanded_count: limit.current(),
                };
            }

            queue.push(child);
            frontier_count += 1;
        }
    }

    SearchReport {
        outcome: Outcome::Exhausted,
        frontier_count,
        expanded_count: limit.current(),
    }
}
