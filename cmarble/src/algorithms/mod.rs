mod depth_first_search;

use crate::{
    dims::MazeSize,
    gameboard::Maze,
    random::RandomSource,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("invalid maze size {rows}x{columns}, both dimensions must be at least 1")]
    InvalidSize { rows: usize, columns: usize },
    #[error("maze size {rows}x{columns} is too large")]
    TooLarge { rows: usize, columns: usize },
}

/// Generates perfect mazes of a fixed size with a randomized depth-first search.
///
/// The size is validated once, so [`MazeGenerator::generate`] itself can't fail.
/// Output depends only on the size and on the sequence of indices drawn from
/// the [`RandomSource`], two runs fed the same draws produce the same maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeGenerator {
    size: MazeSize,
}

impl MazeGenerator {
    pub fn new(rows: usize, columns: usize) -> Result<Self, GenerationError> {
        Self::with_size(MazeSize::new(rows, columns))
    }

    pub fn with_size(size: MazeSize) -> Result<Self, GenerationError> {
        if size.is_empty() {
            return Err(GenerationError::InvalidSize {
                rows: size.rows,
                columns: size.columns,
            });
        }
        if !size.is_addressable() {
            return Err(GenerationError::TooLarge {
                rows: size.rows,
                columns: size.columns,
            });
        }

        Ok(Self { size })
    }

    pub fn size(&self) -> MazeSize {
        self.size
    }

    pub fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Maze {
        log::debug!("Generating {} maze", self.size);
        let maze = depth_first_search::carve(self.size, rng);
        log::debug!(
            "Generated {} maze from {} with {} passages",
            self.size,
            maze.origin(),
            maze.passage_count()
        );

        maze
    }
}

/// Validates the size and generates a single maze.
pub fn generate<R: RandomSource + ?Sized>(
    rows: usize,
    columns: usize,
    rng: &mut R,
) -> Result<Maze, GenerationError> {
    Ok(MazeGenerator::new(rows, columns)?.generate(rng))
}
