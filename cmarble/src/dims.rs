use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Position of a cell in the grid, `(row, column)`.
///
/// Signed, so that neighbours of border cells can be represented before
/// they are checked against the grid bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPos(pub i32, pub i32);

impl CellPos {
    pub const ZERO: CellPos = CellPos(0, 0);

    pub fn row(self) -> i32 {
        self.0
    }

    pub fn column(self) -> i32 {
        self.1
    }

    /// Iterates all positions of the grid in row-major order.
    pub fn iter_fill(size: MazeSize) -> impl Iterator<Item = CellPos> {
        let (rows, columns) = (size.rows as i32, size.columns as i32);
        (0..rows).flat_map(move |r| (0..columns).map(move |c| CellPos(r, c)))
    }
}

impl Add for CellPos {
    type Output = CellPos;

    fn add(self, other: CellPos) -> CellPos {
        CellPos(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for CellPos {
    type Output = CellPos;

    fn sub(self, other: CellPos) -> CellPos {
        CellPos(self.0 - other.0, self.1 - other.1)
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

/// Size of the grid in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MazeSize {
    pub rows: usize,
    pub columns: usize,
}

impl MazeSize {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    pub fn cell_count(self) -> usize {
        self.rows * self.columns
    }

    pub fn is_empty(self) -> bool {
        self.rows == 0 || self.columns == 0
    }

    /// Whether every cell has a [`CellPos`] and the grid fits in one buffer.
    pub fn is_addressable(self) -> bool {
        let max = i32::MAX as usize;
        self.rows <= max
            && self.columns <= max
            && self
                .rows
                .checked_mul(self.columns)
                .is_some_and(|cells| cells <= isize::MAX as usize)
    }

    pub fn contains(self, pos: CellPos) -> bool {
        0 <= pos.0 && (pos.0 as usize) < self.rows && 0 <= pos.1 && (pos.1 as usize) < self.columns
    }

    /// Number of passages in a perfect maze of this size.
    pub fn spanning_edges(self) -> usize {
        self.cell_count().saturating_sub(1)
    }
}

impl fmt::Display for MazeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}
