#![deny(clippy::all)]

//! The eight-puzzle: a 3x3 board of eight numbered tiles and one blank.
//!
//! [Board] implements the [searcher] state traits, so any search
//! strategy can be run over it. Sliding tile `v` costs `v²`.

pub mod coord2d;
pub mod heuristics;
mod puzzle;

pub use coord2d::{Direction, Point};
pub use puzzle::{Board, ParseBoardError, BLANK, CELLS};

/// Data type used for coordinates
pub type Position = i32;
