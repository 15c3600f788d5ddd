//! Estimates of the remaining cost from a board to the goal.
//!
//! Each ignores the blank. All three are zero on the goal board.

use searcher::Cost;

use crate::coord2d::Point;
use crate::puzzle::Board;

/// Where a tile sits on the goal board.
fn home(tile: u8) -> Point {
    Point::from_index(tile as usize)
}

/// Number of tiles out of place (h1).
pub fn misplaced(board: &Board) -> Cost {
    board
        .tiles()
        .filter(|(location, tile)| *location != home(*tile))
        .count()
}

/// Sum of the grid distances from each tile to its home (h2).
pub fn manhattan(board: &Board) -> Cost {
    board
        .tiles()
        .map(|(location, tile)| location.manhattan_distance(home(tile)) as Cost)
        .sum()
}

/// Manhattan distance with each tile's share scaled by the square of
/// its value, matching the price of sliding it (h3).
pub fn weighted_manhattan(board: &Board) -> Cost {
    board
        .tiles()
        .map(|(location, tile)| {
            let weight = (tile as Cost).pow(2);
            weight * location.manhattan_distance(home(tile)) as Cost
        })
        .sum()
}
