//! Maze generation using randomized depth-first search (recursive backtracker)
//!
//! Carves PATH cells out of an all-WALL grid:
//! 1. Mark the current cell as path
//! 2. Shuffle UP, RIGHT, DOWN, LEFT
//! 3. Pop directions from the back of the shuffled list; for each one that
//!    passes its validity check, carve the neighbour's whole subtree before
//!    popping the next direction
//! 4. Backtrack once all four directions have been tried
//!
//! A direction is valid when the step stays inside the carvable interior and
//! the cross-shaped lookahead (next cell, the one after it, and the two cells
//! flanking the next cell) holds no path. That lookahead is what keeps the
//! carved region a tree: no loops and no open rooms.
//!
//! The recursion is run on an explicit stack so large grids do not exhaust
//! the call stack; the carve order is identical to the recursive form.

use alloc::vec::Vec;

use crate::direction::Direction;
use crate::error::MazeError;
use crate::grid::{Cell, Grid};
use crate::rng::DirectionShuffle;
use crate::DEFAULT_LEFT_LIMIT;

/// One suspended cell of the depth-first carve
struct Frame {
    row: usize,
    col: usize,
    dirs: [Direction; 4],
    /// Directions still to pop; they are taken from the back
    remaining: usize,
}

/// Owns a square grid and carves perfect mazes into it.
#[derive(Clone, Debug)]
pub struct MazeGenerator {
    grid: Grid,
    left_limit: usize,
}

impl MazeGenerator {
    /// Generator with the default left limit (row/col 0 stay wall).
    ///
    /// Side lengths below 3 are accepted; they only ever carve the start cell.
    pub fn new(dim: usize) -> Result<Self, MazeError> {
        Self::with_left_limit(dim, DEFAULT_LEFT_LIMIT)
    }

    /// # Arguments
    /// * `dim` - Grid side length, must be at least 1
    /// * `left_limit` - UP/LEFT carving is only allowed from rows/cols
    ///   strictly greater than this
    pub fn with_left_limit(dim: usize, left_limit: usize) -> Result<Self, MazeError> {
        Ok(Self {
            grid: Grid::new(dim)?,
            left_limit,
        })
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.grid.dim()
    }

    #[inline]
    pub fn left_limit(&self) -> usize {
        self.left_limit
    }

    /// The grid as left by the last generation (all wall before the first).
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Read-only cell accessor for renderers. `None` off the grid.
    pub fn read_cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.grid.get(row, col)
    }

    /// Carve a new maze starting at `(left_limit, left_limit)`.
    pub fn generate<S: DirectionShuffle>(&mut self, rng: S) -> Result<&Grid, MazeError> {
        self.generate_from(self.left_limit, self.left_limit, rng)
    }

    /// Carve a new maze starting at `(start_row, start_col)`.
    ///
    /// The start is expected to lie inside the carvable interior
    /// (`left_limit..dim - 1` on both axes); starts on the outer rows/cols are
    /// accepted, but lookahead cells beyond the grid edge read as wall.
    ///
    /// Every cell is reset to wall first, so repeated calls never leak path
    /// cells from an earlier maze.
    pub fn generate_from<S: DirectionShuffle>(
        &mut self,
        start_row: usize,
        start_col: usize,
        mut rng: S,
    ) -> Result<&Grid, MazeError> {
        let dim = self.dim();
        if start_row >= dim || start_col >= dim {
            return Err(MazeError::OutOfBoundsStart {
                row: start_row,
                col: start_col,
                dim,
            });
        }

        self.grid.reset();
        let max_depth = self.carve(start_row, start_col, &mut rng);

        tracing::debug!(
            "carved {}x{} maze from ({}, {}): {} path cells, max depth {}",
            dim,
            dim,
            start_row,
            start_col,
            self.grid.path_count(),
            max_depth
        );

        Ok(&self.grid)
    }

    /// Depth-first carve on an explicit stack. Returns the deepest stack
    /// size reached.
    fn carve<S: DirectionShuffle>(&mut self, row: usize, col: usize, rng: &mut S) -> usize {
        let mut stack = Vec::new();
        stack.push(self.enter(row, col, rng));
        let mut max_depth = 1;

        while let Some(top) = stack.last_mut() {
            if top.remaining == 0 {
                // Every direction tried: backtrack
                stack.pop();
                continue;
            }

            top.remaining -= 1;
            let dir = top.dirs[top.remaining];
            let (row, col) = (top.row, top.col);

            if self.is_valid(dir, row, col) {
                if let Some((next_row, next_col)) = dir.step(row, col) {
                    let frame = self.enter(next_row, next_col, rng);
                    stack.push(frame);
                    max_depth = max_depth.max(stack.len());
                }
            }
        }

        max_depth
    }

    /// Mark a cell as path and draw its exploration order.
    fn enter<S: DirectionShuffle>(&mut self, row: usize, col: usize, rng: &mut S) -> Frame {
        self.grid.set(row, col, Cell::Path);
        let mut dirs = Direction::ALL;
        rng.shuffle(&mut dirs);
        Frame {
            row,
            col,
            dirs,
            remaining: dirs.len(),
        }
    }

    /// Whether the carve may step from `(row, col)` in `dir`.
    ///
    /// Pure read of the grid. Lookahead cells outside the grid count as wall.
    pub fn is_valid(&self, dir: Direction, row: usize, col: usize) -> bool {
        self.in_bounds(dir, row, col)
            && dir
                .lookahead(row, col)
                .iter()
                .all(|cell| !cell.is_some_and(|(r, c)| self.grid.is_path(r, c)))
    }

    pub fn is_valid_up(&self, row: usize, col: usize) -> bool {
        self.is_valid(Direction::Up, row, col)
    }

    pub fn is_valid_right(&self, row: usize, col: usize) -> bool {
        self.is_valid(Direction::Right, row, col)
    }

    pub fn is_valid_down(&self, row: usize, col: usize) -> bool {
        self.is_valid(Direction::Down, row, col)
    }

    pub fn is_valid_left(&self, row: usize, col: usize) -> bool {
        self.is_valid(Direction::Left, row, col)
    }

    /// Interior bounds. The thresholds are deliberately asymmetric:
    /// UP/LEFT compare against `left_limit`, DOWN/RIGHT against `dim - 2`.
    fn in_bounds(&self, dir: Direction, row: usize, col: usize) -> bool {
        let dim = self.dim();
        match dir {
            Direction::Up => self.left_limit < row,
            Direction::Down => row + 2 < dim,
            Direction::Left => self.left_limit < col,
            Direction::Right => col + 2 < dim,
        }
    }
}
