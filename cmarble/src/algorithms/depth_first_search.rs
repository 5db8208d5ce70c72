use crate::{
    array::Array2D,
    dims::{CellPos, MazeSize},
    gameboard::{Direction, Maze},
    random::RandomSource,
};

/// A cell on the traversal stack together with its shuffled candidates.
struct Frame {
    pos: CellPos,
    candidates: [Direction; 4],
    next: usize,
}

impl Frame {
    fn next_candidate(&mut self) -> Option<Direction> {
        let dir = self.candidates.get(self.next).copied();
        self.next += 1;
        dir
    }
}

/// Randomized recursive backtracker, run on an explicit stack.
///
/// Every frame keeps its position in its own candidate list, so the order of
/// random draws and opened passages is the same as with plain recursion.
/// `size` must be non-empty.
pub(super) fn carve<R: RandomSource + ?Sized>(size: MazeSize, rng: &mut R) -> Maze {
    let start = CellPos(
        rng.gen_index(size.rows) as i32,
        rng.gen_index(size.columns) as i32,
    );

    let mut maze = Maze::new_walled(size, start);
    let mut visited = Array2D::new(false, size.rows, size.columns);
    let mut stack: Vec<Frame> = Vec::with_capacity(size.cell_count());
    let mut deepest = 0usize;

    enter(start, &mut visited, &mut stack, rng);
    while let Some(frame) = stack.last_mut() {
        let current = frame.pos;
        let Some(dir) = frame.next_candidate() else {
            stack.pop();
            continue;
        };

        let next = current + dir.offset();
        if !maze.is_in_bounds(next) || visited[next] {
            continue;
        }

        maze.open_passage(current, dir);
        enter(next, &mut visited, &mut stack, rng);
        deepest = deepest.max(stack.len());
    }

    debug_assert!(visited.all(|&v| v), "traversal left cells unvisited");
    log::trace!("Deepest traversal stack: {}", deepest);

    maze
}

fn enter<R: RandomSource + ?Sized>(
    pos: CellPos,
    visited: &mut Array2D<bool>,
    stack: &mut Vec<Frame>,
    rng: &mut R,
) {
    if visited[pos] {
        return;
    }
    visited[pos] = true;

    let mut candidates = Direction::ALL;
    rng.shuffle(&mut candidates);
    stack.push(Frame {
        pos,
        candidates,
        next: 0,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{seeded, ReplayRandom};

    /// Straightforward recursive formulation, used as a reference.
    fn carve_recursive<R: RandomSource>(size: MazeSize, rng: &mut R) -> Maze {
        fn visit<R: RandomSource>(
            pos: CellPos,
            maze: &mut Maze,
            visited: &mut Array2D<bool>,
            rng: &mut R,
        ) {
            if visited[pos] {
                return;
            }
            visited[pos] = true;

            let mut candidates = Direction::ALL;
            rng.shuffle(&mut candidates);
            for dir in candidates {
                let next = pos + dir.offset();
                if !maze.is_in_bounds(next) || visited[next] {
                    continue;
                }
                maze.open_passage(pos, dir);
                visit(next, maze, visited, rng);
            }
        }

        let start = CellPos(
            rng.gen_index(size.rows) as i32,
            rng.gen_index(size.columns) as i32,
        );
        let mut maze = Maze::new_walled(size, start);
        let mut visited = Array2D::new(false, size.rows, size.columns);
        visit(start, &mut maze, &mut visited, rng);
        maze
    }

    #[test]
    fn matches_recursive_formulation() {
        for (seed, rows, columns) in [(1, 6, 10), (2, 1, 12), (3, 12, 1), (4, 17, 9), (5, 2, 2)] {
            let size = MazeSize::new(rows, columns);
            let iterative = carve(size, &mut seeded(seed));
            let recursive = carve_recursive(size, &mut seeded(seed));
            assert_eq!(iterative, recursive, "seed {seed}, size {size}");
        }
    }

    #[test]
    fn start_cell_comes_from_first_two_draws() {
        let maze = carve(MazeSize::new(6, 10), &mut ReplayRandom::new(vec![4, 7]));
        assert_eq!(maze.origin(), CellPos(4, 7));
        assert!(maze.is_perfect());
    }

    #[test]
    fn unshuffled_walk_is_predictable() {
        // Starts at (0, 0) whose candidates stay in the order up, down, right, left,
        // so the walk goes down first and reaches (0, 1) only through (1, 1).
        let draws = vec![0, 0, 3, 2, 1, 0];
        let maze = carve(MazeSize::new(2, 2), &mut ReplayRandom::new(draws));

        assert_eq!(maze.origin(), CellPos(0, 0));
        assert!(maze.is_open(CellPos(0, 0), Direction::Down));
        assert!(maze.is_open(CellPos(1, 0), Direction::Right));
        assert!(maze.is_open(CellPos(1, 1), Direction::Up));
        assert!(!maze.is_open(CellPos(0, 0), Direction::Right));
    }

    #[test]
    fn long_corridor_does_not_recurse() {
        let maze = carve(MazeSize::new(1, 100_000), &mut seeded(9));
        assert_eq!(maze.passage_count(), 99_999);
        assert!(maze.is_connected());
    }
}
