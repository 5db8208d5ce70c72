use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{
    array::Array2D,
    dims::{CellPos, MazeSize},
    gameboard::{Direction, Orientation},
};

/// Generated maze topology.
///
/// Stores which walls between neighbouring cells were removed. `vertical` is
/// `rows x (columns - 1)`, entry `(r, c)` is the passage between `(r, c)` and
/// `(r, c + 1)`. `horizontal` is `(rows - 1) x columns`, entry `(r, c)` is the
/// passage between `(r, c)` and `(r + 1, c)`.
///
/// Mazes coming out of [`crate::algorithms::MazeGenerator`] are perfect: the
/// open passages form a spanning tree over all cells. Deserialized mazes are
/// held to the same rules, see [`MazeDataError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MazeData")]
pub struct Maze {
    pub(crate) size: MazeSize,
    pub(crate) vertical: Array2D<bool>,
    pub(crate) horizontal: Array2D<bool>,
    pub(crate) origin: CellPos,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MazeDataError {
    #[error("invalid maze size {0}")]
    Size(MazeSize),
    #[error("{orientation:?} passages are {found}, a {size} maze needs {expected}")]
    Shape {
        orientation: Orientation,
        size: MazeSize,
        found: MazeSize,
        expected: MazeSize,
    },
    #[error("origin {origin} lies outside a {size} maze")]
    Origin { origin: CellPos, size: MazeSize },
    #[error("passages don't form a spanning tree")]
    NotPerfect,
}

#[derive(Deserialize)]
struct MazeData {
    size: MazeSize,
    vertical: Array2D<bool>,
    horizontal: Array2D<bool>,
    origin: CellPos,
}

impl TryFrom<MazeData> for Maze {
    type Error = MazeDataError;

    fn try_from(data: MazeData) -> Result<Self, Self::Error> {
        let MazeData {
            size,
            vertical,
            horizontal,
            origin,
        } = data;
        if size.is_empty() || !size.is_addressable() {
            return Err(MazeDataError::Size(size));
        }

        let MazeSize { rows, columns } = size;
        let shapes = [
            (Orientation::Vertical, &vertical, MazeSize::new(rows, columns - 1)),
            (Orientation::Horizontal, &horizontal, MazeSize::new(rows - 1, columns)),
        ];
        for (orientation, matrix, expected) in shapes {
            let found = MazeSize::new(matrix.rows(), matrix.columns());
            if found != expected {
                return Err(MazeDataError::Shape {
                    orientation,
                    size,
                    found,
                    expected,
                });
            }
        }

        if !size.contains(origin) {
            return Err(MazeDataError::Origin { origin, size });
        }

        let maze = Self {
            size,
            vertical,
            horizontal,
            origin,
        };
        if !maze.is_perfect() {
            return Err(MazeDataError::NotPerfect);
        }

        Ok(maze)
    }
}

impl Maze {
    /// Maze with every wall in place.
    pub(crate) fn new_walled(size: MazeSize, origin: CellPos) -> Self {
        let MazeSize { rows, columns } = size;
        Self {
            size,
            vertical: Array2D::new(false, rows, columns - 1),
            horizontal: Array2D::new(false, rows - 1, columns),
            origin,
        }
    }

    pub fn size(&self) -> MazeSize {
        self.size
    }

    pub fn rows(&self) -> usize {
        self.size.rows
    }

    pub fn columns(&self) -> usize {
        self.size.columns
    }

    /// Cell the generator started its traversal from.
    pub fn origin(&self) -> CellPos {
        self.origin
    }

    pub fn vertical(&self) -> &Array2D<bool> {
        &self.vertical
    }

    pub fn horizontal(&self) -> &Array2D<bool> {
        &self.horizontal
    }

    pub fn is_in_bounds(&self, pos: CellPos) -> bool {
        self.size.contains(pos)
    }

    /// Start cell for the collaborator, the top-left corner.
    pub fn start(&self) -> CellPos {
        CellPos::ZERO
    }

    /// Goal cell for the collaborator, the bottom-right corner.
    pub fn goal(&self) -> CellPos {
        CellPos(self.size.rows as i32 - 1, self.size.columns as i32 - 1)
    }

    /// Matrix and index holding the wall between `pos` and its neighbour in `dir`.
    ///
    /// Returns `None` if either cell lies outside the grid.
    pub fn passage_slot(&self, pos: CellPos, dir: Direction) -> Option<(Orientation, CellPos)> {
        let neighbor = pos + dir.offset();
        if !self.is_in_bounds(pos) || !self.is_in_bounds(neighbor) {
            return None;
        }

        // the wall is stored at the upper or left cell of the pair
        let idx = match dir {
            Direction::Left | Direction::Up => neighbor,
            Direction::Right | Direction::Down => pos,
        };
        Some((dir.orientation(), idx))
    }

    fn matrix(&self, orientation: Orientation) -> &Array2D<bool> {
        match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        }
    }

    fn matrix_mut(&mut self, orientation: Orientation) -> &mut Array2D<bool> {
        match orientation {
            Orientation::Horizontal => &mut self.horizontal,
            Orientation::Vertical => &mut self.vertical,
        }
    }

    /// Removes the wall between `pos` and its neighbour in `dir`.
    ///
    /// # Panics
    /// If the neighbour is outside the grid. The traversal only ever opens
    /// passages between two in-bounds cells, anything else is a bug.
    pub(crate) fn open_passage(&mut self, pos: CellPos, dir: Direction) {
        let Some((orientation, idx)) = self.passage_slot(pos, dir) else {
            panic!(
                "cannot open passage {:?} from {} in a {} maze",
                dir, pos, self.size
            );
        };

        self.matrix_mut(orientation)[idx] = true;
    }

    /// Whether the wall between `pos` and its neighbour in `dir` is removed.
    ///
    /// Walls on the outer border are always closed.
    pub fn is_open(&self, pos: CellPos, dir: Direction) -> bool {
        self.passage_slot(pos, dir)
            .map(|(orientation, idx)| self.matrix(orientation)[idx])
            .unwrap_or(false)
    }

    pub fn open_directions(&self, pos: CellPos) -> SmallVec<[Direction; 4]> {
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.is_open(pos, dir))
            .collect()
    }

    pub fn open_neighbors(&self, pos: CellPos) -> SmallVec<[CellPos; 4]> {
        self.open_directions(pos)
            .into_iter()
            .map(|dir| pos + dir.offset())
            .collect()
    }

    pub fn passage_count(&self) -> usize {
        self.vertical.count_true() + self.horizontal.count_true()
    }

    /// Walls still standing between two cells, horizontal ones first.
    pub fn closed_walls(&self) -> impl Iterator<Item = (Orientation, CellPos)> + '_ {
        let horizontal = self
            .horizontal
            .iter_pos()
            .filter(move |&pos| !self.horizontal[pos])
            .map(|pos| (Orientation::Horizontal, pos));
        let vertical = self
            .vertical
            .iter_pos()
            .filter(move |&pos| !self.vertical[pos])
            .map(|pos| (Orientation::Vertical, pos));

        horizontal.chain(vertical)
    }

    /// Flood fill over open passages.
    ///
    /// Returns a grid with `true` for every cell reachable from `from`.
    pub fn reachable_from(&self, from: CellPos) -> Array2D<bool> {
        let mut reached = Array2D::new(false, self.size.rows, self.size.columns);
        if !self.is_in_bounds(from) {
            return reached;
        }

        let mut stack = Vec::with_capacity(self.size.cell_count());
        reached[from] = true;
        stack.push(from);

        while let Some(current) = stack.pop() {
            for next in self.open_neighbors(current) {
                if !reached[next] {
                    reached[next] = true;
                    stack.push(next);
                }
            }
        }

        reached
    }

    pub fn is_connected(&self) -> bool {
        self.reachable_from(CellPos::ZERO).all(|&b| b)
    }

    /// Connected with exactly `cells - 1` passages, i.e. a spanning tree.
    pub fn is_perfect(&self) -> bool {
        self.passage_count() == self.size.spanning_edges() && self.is_connected()
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let MazeSize { rows, columns } = self.size;

        writeln!(f, "+{}", "---+".repeat(columns))?;
        for r in 0..rows as i32 {
            let mut cells = String::from("|");
            let mut floor = String::from("+");
            for c in 0..columns as i32 {
                let pos = CellPos(r, c);
                cells.push_str("   ");
                cells.push(if self.is_open(pos, Direction::Right) { ' ' } else { '|' });
                floor.push_str(if self.is_open(pos, Direction::Down) { "   " } else { "---" });
                floor.push('+');
            }
            writeln!(f, "{}", cells)?;
            writeln!(f, "{}", floor)?;
        }

        Ok(())
    }
}
