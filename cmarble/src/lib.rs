pub mod algorithms;
pub mod array;
pub mod dims;
pub mod gameboard;
pub mod layout;
pub mod random;

pub use algorithms::{generate, GenerationError, MazeGenerator};
pub use gameboard::{Direction, Maze, MazeDataError, Orientation};
