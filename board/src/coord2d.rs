//! Coordinate work in two dimensions.

use std::fmt;

use itertools::iproduct;

use crate::Position;

/// Number of cells along each side of the board.
pub const SIDE: Position = 3;

/// A movement direction in two dimensions.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Left,
    Direction::Right,
    Direction::Down,
];

impl Direction {
    /// Enumertates all directions of movement in "reading order",
    /// i.e. such that the resulting points are in reading order
    /// from the current position.
    pub fn all() -> impl Iterator<Item = Self> {
        DIRECTIONS.iter().cloned()
    }

    pub fn reverse(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        })
    }
}

/// A cell on the board.
///
/// `x` is the column and `y` the row, both counted from the top left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: Position,
    pub y: Position,
}

impl Point {
    /// Build a new point from coordinates.
    pub fn new(x: Position, y: Position) -> Self {
        Self { x, y }
    }

    /// The point for a row-major cell index.
    pub fn from_index(index: usize) -> Self {
        let index = index as Position;
        Self {
            x: index % SIDE,
            y: index / SIDE,
        }
    }

    /// Row-major cell index, or `None` when the point is off the board.
    pub fn index(self) -> Option<usize> {
        if self.is_on_board() {
            Some((self.y * SIDE + self.x) as usize)
        } else {
            None
        }
    }

    pub fn is_on_board(self) -> bool {
        (0..SIDE).contains(&self.x) && (0..SIDE).contains(&self.y)
    }

    /// Every cell of the board, in reading order.
    pub fn grid() -> impl Iterator<Item = Self> {
        iproduct!(0..SIDE, 0..SIDE).map(|(y, x)| Point::new(x, y))
    }

    /// Step in a given direction.
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Left => Self::new(self.x - 1, self.y),
            Direction::Right => Self::new(self.x + 1, self.y),
            Direction::Up => Self::new(self.x, self.y - 1),
            Direction::Down => Self::new(self.x, self.y + 1),
        }
    }

    /// Manhattan distance between two points is the distance along
    /// each coordinate
    pub fn manhattan_distance(self, other: Point) -> Position {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl From<(Position, Position)> for Point {
    fn from(coordinates: (Position, Position)) -> Self {
        Self {
            x: coordinates.0,
            y: coordinates.1,
        }
    }
}
