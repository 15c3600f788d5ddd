//! The eight-puzzle board.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use searcher::{Cost, SearchState, TransitionCost};
use thiserror::Error;

use crate::coord2d::{Direction, Point};

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// Value of the empty cell.
pub const BLANK: u8 = 0;

/// Error when parsing a board from string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseBoardError {
    #[error("Invalid board: {0:?} (expected nine digits 0-8)")]
    InvalidLiteral(String),

    #[error("Tile {0} appears more than once")]
    DuplicateTile(u8),
}

/// A configuration of the eight-puzzle.
///
/// Cells are stored in row-major order, with [BLANK] marking the
/// empty cell. Boards are only built from valid permutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [u8; CELLS],
}

impl Board {
    /// Build a board from row-major cells, which must hold each tile once.
    pub fn new(cells: [u8; CELLS]) -> Result<Self, ParseBoardError> {
        let mut seen = [false; CELLS];
        for &tile in cells.iter() {
            match seen.get_mut(tile as usize) {
                None => return Err(ParseBoardError::InvalidLiteral(render(&cells))),
                Some(true) => return Err(ParseBoardError::DuplicateTile(tile)),
                Some(flag) => *flag = true,
            }
        }
        Ok(Self { cells })
    }

    /// The solved board, `012345678`.
    pub fn goal() -> Self {
        Self {
            cells: [0, 1, 2, 3, 4, 5, 6, 7, 8],
        }
    }

    /// Tile at a location, or `None` off the board.
    pub fn tile(&self, location: Point) -> Option<u8> {
        location.index().map(|i| self.cells[i])
    }

    /// Where a tile currently sits.
    pub fn position(&self, tile: u8) -> Point {
        let index = self
            .cells
            .iter()
            .position(|&t| t == tile)
            .unwrap_or_else(|| panic!("tile {} is missing from {}", tile, self));
        Point::from_index(index)
    }

    /// Location of the empty cell.
    pub fn blank(&self) -> Point {
        self.position(BLANK)
    }

    /// Non-blank tiles with their locations, in reading order.
    pub fn tiles(&self) -> impl Iterator<Item = (Point, u8)> + '_ {
        Point::grid()
            .zip(self.cells.iter().copied())
            .filter(|(_, tile)| *tile != BLANK)
    }

    /// Slide the tile next to the blank in `direction`, into the blank.
    ///
    /// Returns `None` when no tile sits on that side of the blank.
    pub fn slide(&self, direction: Direction) -> Option<Board> {
        let blank = self.blank();
        let source = blank.step(direction.reverse()).index()?;
        let target = blank.index()?;

        let mut cells = self.cells;
        cells.swap(source, target);
        Some(Board { cells })
    }

    /// The tile which moved to turn this board into `next`, when
    /// `next` is one slide away.
    pub fn moved_tile(&self, next: &Board) -> Option<u8> {
        let adjacent = Direction::all().any(|d| self.slide(d).as_ref() == Some(next));
        if adjacent {
            self.tile(next.blank())
        } else {
            None
        }
    }

    /// Whether the goal can be reached from this board.
    ///
    /// A slide never changes the parity of the number of inverted
    /// tile pairs, and the goal has none.
    pub fn is_solvable(&self) -> bool {
        let tiles: Vec<u8> = self.cells.iter().copied().filter(|&t| t != BLANK).collect();
        let inversions = tiles
            .iter()
            .enumerate()
            .map(|(i, a)| tiles[i + 1..].iter().filter(|b| a > b).count())
            .sum::<usize>();
        inversions % 2 == 0
    }

    /// Three rows of tiles, with `.` for the blank.
    pub fn pretty(&self) -> String {
        self.cells
            .chunks(3)
            .map(|row| {
                row.iter()
                    .map(|&t| {
                        if t == BLANK {
                            ".".to_string()
                        } else {
                            t.to_string()
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn render(cells: &[u8]) -> String {
    cells.iter().map(|t| t.to_string()).collect()
}

impl Default for Board {
    fn default() -> Self {
        Self::goal()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&render(&self.cells))
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref RE: Regex = Regex::new(r"^[0-8]{9}$").unwrap();
        };

        let s = s.trim();
        if !RE.is_match(s) {
            return Err(ParseBoardError::InvalidLiteral(s.to_string()));
        }

        let mut cells = [BLANK; CELLS];
        for (cell, digit) in cells.iter_mut().zip(s.bytes()) {
            *cell = digit - b'0';
        }
        Board::new(cells)
    }
}

impl SearchState for Board {
    type Move = Direction;

    fn successors(&self) -> Vec<(Direction, Self)> {
        Direction::all()
            .filter_map(|d| self.slide(d).map(|b| (d, b)))
            .collect()
    }
}

impl TransitionCost for Board {
    /// Sliding tile `v` costs `v²`.
    fn cost(&self, next: &Self) -> Cost {
        match self.moved_tile(next) {
            Some(tile) => (tile as Cost).pow(2),
            None => panic!("{} is not one slide away from {}", next, self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn parse_and_display() {
        let b = board("142305678");
        assert_eq!(b.to_string(), "142305678");
        assert_eq!(b.blank(), Point::new(1, 1));
        assert_eq!(b.tile(Point::new(1, 0)), Some(4));
        assert_eq!(board(" 012345678\n"), Board::goal());
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "12345678".parse::<Board>(),
            Err(ParseBoardError::InvalidLiteral("12345678".to_string()))
        );
        assert_eq!(
            "012345679".parse::<Board>(),
            Err(ParseBoardError::InvalidLiteral("012345679".to_string()))
        );
        assert_eq!(
            "0a2345678".parse::<Board>(),
            Err(ParseBoardError::InvalidLiteral("0a2345678".to_string()))
        );
        assert_eq!(
            "112345678".parse::<Board>(),
            Err(ParseBoardError::DuplicateTile(1))
        );
        assert_eq!(
            Board::new([0, 1, 2, 3, 4, 5, 6, 7, 9]),
            Err(ParseBoardError::InvalidLiteral("012345679".to_string()))
        );
    }

    #[test]
    fn pretty() {
        assert_eq!(board("142305678").pretty(), "1 4 2\n3 . 5\n6 7 8");
    }

    #[test]
    fn slides() {
        let b = board("142305678");
        assert_eq!(b.slide(Direction::Down), Some(board("102345678")));
        assert_eq!(b.slide(Direction::Up), Some(board("142375608")));
        assert_eq!(b.slide(Direction::Right), Some(board("142035678")));
        assert_eq!(b.slide(Direction::Left), Some(board("142350678")));

        let corner = Board::goal();
        assert_eq!(corner.slide(Direction::Down), None);
        assert_eq!(corner.slide(Direction::Right), None);
        assert_eq!(corner.slide(Direction::Left), Some(board("102345678")));
    }

    #[test]
    fn successors() {
        let centre = board("142305678").successors();
        assert_eq!(centre.len(), 4);
        let moves: Vec<_> = centre.iter().map(|(d, _)| *d).collect();
        assert_eq!(
            moves,
            vec![
                Direction::Up,
                Direction::Left,
                Direction::Right,
                Direction::Down
            ]
        );

        assert_eq!(Board::goal().successors().len(), 2);
        assert_eq!(board("102345678").successors().len(), 3);
    }

    #[test]
    fn cost_is_tile_squared() {
        let before = board("142305678");
        let after = board("142350678");
        assert_eq!(before.moved_tile(&after), Some(5));
        assert_eq!(before.cost(&after), 25);

        // Sliding back costs the same.
        assert_eq!(after.cost(&before), 25);

        assert_eq!(board("102345678").cost(&Board::goal()), 1);
    }

    #[test]
    #[should_panic(expected = "is not one slide away")]
    fn cost_between_distant_boards_panics() {
        board("142305678").cost(&Board::goal());
    }

    #[test]
    fn moved_tile_requires_adjacency() {
        assert_eq!(board("142305678").moved_tile(&Board::goal()), None);
        assert_eq!(Board::goal().moved_tile(&Board::goal()), None);
    }

    #[test]
    fn solvability() {
        assert!(Board::goal().is_solvable());
        assert!(board("142305678").is_solvable());
        assert!(board("802356174").is_solvable());
        assert!(!board("021345678").is_solvable());
    }

    #[test]
    fn tiles_skip_blank() {
        let tiles: Vec<_> = board("142305678").tiles().map(|(_, t)| t).collect();
        assert_eq!(tiles, vec![1, 4, 2, 3, 5, 6, 7, 8]);
    }
}
