//! Generalized search algorithms for finding a path to a single goal state.
//!
//! To use these search algorithms, implement [SearchState] and
//! [TransitionCost] for the state type, then pick a [Strategy].
//! Breadth-first, uniform-cost, greedy best-first and A* searches
//! share one driver, which reports the path found along with the
//! number of states placed on the frontier and expanded.

pub mod algorithm;
mod errors;
pub mod path;
pub mod strategy;
mod traits;

pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use traits::Cost;
pub use traits::Heuristic;
pub use traits::SearchState;
pub use traits::TransitionCost;

pub use algorithm::frontier::PriorityFrontier;
pub use algorithm::{build, search, SearchAlgorithm, SearchOptions};
pub use path::{Label, Outcome, Path, SearchReport, Step};
pub use strategy::{Priority, Strategy};
