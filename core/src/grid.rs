//! Square WALL/PATH cell grid
//!
//! Cells are stored flat, row-major. Glyph text (`#` wall, `_` path) and the
//! 0/1 binary form only exist at the encode/decode boundary.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::error::MazeError;
use crate::{PATH_GLYPH, WALL_GLYPH};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Wall,
    Path,
}

impl Cell {
    pub const fn glyph(self) -> char {
        match self {
            Cell::Wall => WALL_GLYPH,
            Cell::Path => PATH_GLYPH,
        }
    }

    pub const fn from_glyph(glyph: char) -> Option<Cell> {
        match glyph {
            WALL_GLYPH => Some(Cell::Wall),
            PATH_GLYPH => Some(Cell::Path),
            _ => None,
        }
    }

    /// 0 = wall, 1 = path
    pub const fn to_bit(self) -> u8 {
        match self {
            Cell::Wall => 0,
            Cell::Path => 1,
        }
    }

    #[inline]
    pub const fn is_path(self) -> bool {
        matches!(self, Cell::Path)
    }
}

/// A `dim × dim` grid of cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    dim: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// All-wall grid. Fails for `dim == 0` and for side lengths whose
    /// cell buffer cannot be allocated.
    pub fn new(dim: usize) -> Result<Self, MazeError> {
        let len = match dim.checked_mul(dim) {
            Some(len) if len > 0 => len,
            _ => return Err(MazeError::InvalidDimension { dim }),
        };

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| MazeError::InvalidDimension { dim })?;
        cells.resize(len, Cell::Wall);

        Ok(Self { dim, cells })
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.dim && col < self.dim).then(|| row * self.dim + col)
    }

    /// Cell at `(row, col)`, or `None` off the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Off-grid positions are never path.
    #[inline]
    pub fn is_path(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Cell::is_path)
    }

    /// Overwrite one cell. Returns `false` (and does nothing) off the grid.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Back to all walls
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Wall);
    }

    pub fn path_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_path()).count()
    }

    /// Flat row-major view
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.dim)
    }

    pub fn to_glyph_rows(&self) -> Vec<String> {
        self.rows()
            .map(|row| row.iter().map(|c| c.glyph()).collect())
            .collect()
    }

    /// Decode glyph rows. The grid side length is taken from the number of
    /// rows; every row must have exactly that many glyphs.
    pub fn from_glyph_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, MazeError> {
        let mut grid = Grid::new(rows.len())?;
        let dim = grid.dim;

        for (r, line) in rows.iter().enumerate() {
            let line: &str = line.as_ref();
            let found = line.chars().count();
            if found != dim {
                return Err(MazeError::RaggedGrid {
                    row: r,
                    expected: dim,
                    found,
                });
            }
            for (c, glyph) in line.chars().enumerate() {
                let cell = Cell::from_glyph(glyph)
                    .ok_or(MazeError::InvalidGlyph { row: r, col: c, glyph })?;
                grid.cells[r * dim + c] = cell;
            }
        }

        Ok(grid)
    }

    /// Binary grid representation (0 = wall, 1 = path) for renderers
    /// that consume numeric data.
    pub fn to_binary_grid(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|c| c.to_bit()).collect())
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                f.write_str("\n")?;
            }
            for cell in row {
                write!(f, "{}", cell.glyph())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().collect();
        Grid::from_glyph_rows(&rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn test_new_is_all_wall() {
        let grid = Grid::new(4).unwrap();
        assert_eq!(grid.dim(), 4);
        assert_eq!(grid.cells().len(), 16);
        assert_eq!(grid.path_count(), 0);
    }

    #[test]
    fn test_zero_dim_rejected() {
        assert_eq!(Grid::new(0), Err(MazeError::InvalidDimension { dim: 0 }));
    }

    #[test]
    fn test_oversized_dim_rejected() {
        // dim * dim overflows usize
        let dim = usize::MAX / 2;
        assert_eq!(Grid::new(dim), Err(MazeError::InvalidDimension { dim }));
        assert_eq!(
            Grid::new(1usize << (usize::BITS / 2)),
            Err(MazeError::InvalidDimension { dim: 1usize << (usize::BITS / 2) })
        );
    }

    #[test]
    fn test_get_set_bounds() {
        let mut grid = Grid::new(3).unwrap();
        assert!(grid.set(1, 2, Cell::Path));
        assert_eq!(grid.get(1, 2), Some(Cell::Path));
        assert!(grid.is_path(1, 2));

        assert!(!grid.set(3, 0, Cell::Path));
        assert_eq!(grid.get(0, 3), None);
        assert!(!grid.is_path(5, 5));
    }

    #[test]
    fn test_reset() {
        let mut grid = Grid::new(3).unwrap();
        grid.set(0, 0, Cell::Path);
        grid.set(2, 2, Cell::Path);
        grid.reset();
        assert_eq!(grid, Grid::new(3).unwrap());
    }

    #[test]
    fn test_glyph_legend() {
        assert_eq!(Cell::Wall.glyph(), '#');
        assert_eq!(Cell::Path.glyph(), '_');
        assert_eq!(Cell::from_glyph('#'), Some(Cell::Wall));
        assert_eq!(Cell::from_glyph('_'), Some(Cell::Path));
        assert_eq!(Cell::from_glyph(' '), None);
    }

    #[test]
    fn test_display_and_parse() {
        let text = "###\n#_#\n###";
        let grid: Grid = text.parse().unwrap();
        assert_eq!(grid.dim(), 3);
        assert!(grid.is_path(1, 1));
        assert_eq!(grid.path_count(), 1);
        assert_eq!(grid.to_string(), text);

        // Trailing newline is tolerated
        let again: Grid = "###\n#_#\n###\n".parse().unwrap();
        assert_eq!(again, grid);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "##\n#".parse::<Grid>(),
            Err(MazeError::RaggedGrid {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            "##\n#x".parse::<Grid>(),
            Err(MazeError::InvalidGlyph {
                row: 1,
                col: 1,
                glyph: 'x'
            })
        );
        assert_eq!("".parse::<Grid>(), Err(MazeError::InvalidDimension { dim: 0 }));
    }

    #[test]
    fn test_binary_grid() {
        let grid = Grid::from_glyph_rows(&["#_", "_#"]).unwrap();
        assert_eq!(grid.to_binary_grid(), vec![vec![0, 1], vec![1, 0]]);
        assert_eq!(Cell::Wall.to_bit(), 0);
        assert_eq!(Cell::Path.to_bit(), 1);
    }

    #[test]
    fn test_glyph_rows_roundtrip_shape() {
        let grid = Grid::from_glyph_rows(&["#_#", "___", "#_#"]).unwrap();
        assert_eq!(grid.to_glyph_rows(), vec!["#_#", "___", "#_#"]);
        assert_eq!(grid.rows().count(), 3);
    }
}
