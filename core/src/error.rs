//! Error type shared by the grid codecs and the generator

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// Grids must have at least one cell per side
    #[error("invalid maze dimension {dim}: must be at least 1")]
    InvalidDimension { dim: usize },

    #[error("start cell ({row}, {col}) is outside the {dim}x{dim} grid")]
    OutOfBoundsStart { row: usize, col: usize, dim: usize },

    #[error("unknown glyph {glyph:?} at ({row}, {col})")]
    InvalidGlyph { row: usize, col: usize, glyph: char },

    /// Glyph rows must all be as long as the grid is tall
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
}
