use serde::{Deserialize, Serialize};

use crate::dims::CellPos;

/// Direction from a cell towards one of its four grid neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Right,
    Left,
}

impl Direction {
    /// Candidate order used when assembling neighbours, before shuffling.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Right,
        Direction::Left,
    ];

    pub fn offset(self) -> CellPos {
        match self {
            Self::Up => CellPos(-1, 0),
            Self::Down => CellPos(1, 0),
            Self::Right => CellPos(0, 1),
            Self::Left => CellPos(0, -1),
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Right => Self::Left,
            Self::Left => Self::Right,
        }
    }

    pub fn orientation(self) -> Orientation {
        match self {
            Self::Up | Self::Down => Orientation::Horizontal,
            Self::Left | Self::Right => Orientation::Vertical,
        }
    }

    /// Returns the direction leading from `from` to the adjacent cell `to`.
    ///
    /// Returns `None` if the cells aren't adjacent.
    pub fn between(from: CellPos, to: CellPos) -> Option<Self> {
        match to - from {
            CellPos(-1, 0) => Some(Self::Up),
            CellPos(1, 0) => Some(Self::Down),
            CellPos(0, 1) => Some(Self::Right),
            CellPos(0, -1) => Some(Self::Left),
            _ => None,
        }
    }
}

/// Which of the two passage matrices a wall lives in.
///
/// A vertical wall separates `(r, c)` from `(r, c + 1)`, a horizontal one
/// separates `(r, c)` from `(r + 1, c)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}
