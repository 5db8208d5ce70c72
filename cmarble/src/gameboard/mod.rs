pub mod direction;
pub mod maze;

pub use direction::{Direction, Orientation};
pub use maze::{Maze, MazeDataError};
