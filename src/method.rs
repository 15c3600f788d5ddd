//! Named search methods, as accepted on the command line.

use std::fmt;
use std::str::FromStr;

use board::{heuristics, Board};
use searcher::{Heuristic, Strategy};

use crate::SolverError;

/// Which estimate of the remaining cost guides an informed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeuristicKind {
    /// h1: count of misplaced tiles.
    Misplaced,
    /// h2: Manhattan distance.
    Manhattan,
    /// h3: Manhattan distance weighted by the square of each tile.
    WeightedManhattan,
}

impl HeuristicKind {
    pub fn function(self) -> Heuristic<Board> {
        match self {
            HeuristicKind::Misplaced => heuristics::misplaced,
            HeuristicKind::Manhattan => heuristics::manhattan,
            HeuristicKind::WeightedManhattan => heuristics::weighted_manhattan,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            HeuristicKind::Misplaced => "h1",
            HeuristicKind::Manhattan => "h2",
            HeuristicKind::WeightedManhattan => "h3",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "h1" => Some(HeuristicKind::Misplaced),
            "h2" => Some(HeuristicKind::Manhattan),
            "h3" => Some(HeuristicKind::WeightedManhattan),
            _ => None,
        }
    }
}

/// A search method for the eight-puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    BreadthFirst,
    UniformCost,
    Greedy(HeuristicKind),
    AStar(HeuristicKind),
}

const KINDS: [HeuristicKind; 3] = [
    HeuristicKind::Misplaced,
    HeuristicKind::Manhattan,
    HeuristicKind::WeightedManhattan,
];

impl Method {
    /// Every method, in the order they are listed in help text.
    pub fn all() -> impl Iterator<Item = Self> {
        vec![Method::BreadthFirst, Method::UniformCost]
            .into_iter()
            .chain(KINDS.iter().map(|&k| Method::Greedy(k)))
            .chain(KINDS.iter().map(|&k| Method::AStar(k)))
    }

    /// The search strategy this method runs.
    pub fn strategy(self) -> Strategy<Board> {
        match self {
            Method::BreadthFirst => Strategy::BreadthFirst,
            Method::UniformCost => Strategy::UniformCost,
            Method::Greedy(kind) => Strategy::Greedy(kind.function()),
            Method::AStar(kind) => Strategy::AStar(kind.function()),
        }
    }

    /// Whether this method always returns a cheapest path.
    pub fn is_cost_optimal(self) -> bool {
        matches!(self, Method::UniformCost | Method::AStar(_))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Method::BreadthFirst => write!(f, "bfs"),
            Method::UniformCost => write!(f, "ucost"),
            Method::Greedy(kind) => write!(f, "greedy-{}", kind.suffix()),
            Method::AStar(kind) => write!(f, "astar-{}", kind.suffix()),
        }
    }
}

impl FromStr for Method {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || SolverError::UnknownMethod(s.to_string());

        match s {
            "bfs" | "breadth-first" => Ok(Method::BreadthFirst),
            "ucost" | "uniform-cost" => Ok(Method::UniformCost),
            _ => match s.split_once('-') {
                Some(("greedy", suffix)) => HeuristicKind::from_suffix(suffix)
                    .map(Method::Greedy)
                    .ok_or_else(unknown),
                Some(("astar", suffix)) => HeuristicKind::from_suffix(suffix)
                    .map(Method::AStar)
                    .ok_or_else(unknown),
                _ => Err(unknown()),
            },
        }
    }
}
