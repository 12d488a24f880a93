//! Perfect maze generation on a square grid
//!
//! This crate provides the cell grid, the direction table, the seedable
//! shuffle sources and the randomized depth-first carve used to produce
//! WALL/PATH level layouts.
//!
//! The crate is no_std compatible (it only needs `alloc`), with an optional
//! `std` feature that enables std-backed error and logging support for the
//! host side.

#![no_std]

extern crate alloc;

pub mod direction;
pub mod error;
pub mod grid;
pub mod maze_gen;
pub mod rng;

// Re-export commonly used types for convenience
pub use direction::Direction;
pub use error::MazeError;
pub use grid::{Cell, Grid};
pub use maze_gen::MazeGenerator;
pub use rng::{DirectionShuffle, FixedShuffle, SimpleLCG};

/// Row/column 0 is kept as permanent border wall by default
pub const DEFAULT_LEFT_LIMIT: usize = 1;

/// Default grid side length (odd, so the border wraps evenly)
pub const DEFAULT_DIM: usize = 21;

/// Glyph legend used by existing renderers
pub const WALL_GLYPH: char = '#';
pub const PATH_GLYPH: char = '_';

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(DEFAULT_LEFT_LIMIT, 1);
        assert_eq!(DEFAULT_DIM % 2, 1);
        assert_ne!(WALL_GLYPH, PATH_GLYPH);
    }
}
