use maze_core::{Grid, MazeGenerator, SimpleLCG};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

mod config;

pub use config::MazeConfig;

/// Largest maze file `load_record` will read (10MB)
pub const MAX_RECORD_BYTES: u64 = 10_000_000;

/// A generated maze together with everything needed to reproduce it.
///
/// The grid is stored in the `#`/`_` glyph legend, one string per row, which
/// is what existing level renderers read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeRecord {
    /// The seed fed to the shuffle source
    pub seed: u32,

    /// Grid side length
    pub dim: usize,

    pub left_limit: usize,
    pub start_row: usize,
    pub start_col: usize,

    /// Number of carved cells
    pub path_cells: usize,

    /// Glyph rows, top to bottom
    pub rows: Vec<String>,
}

impl MazeRecord {
    /// Decode the stored glyph rows back into a grid.
    pub fn grid(&self) -> Result<Grid, Box<dyn std::error::Error>> {
        let grid = Grid::from_glyph_rows(&self.rows)?;
        if grid.dim() != self.dim {
            return Err(format!(
                "Record claims a {}x{} grid but holds {} rows",
                self.dim,
                self.dim,
                grid.dim()
            )
            .into());
        }
        Ok(grid)
    }

    /// Binary grid data (0=wall, 1=path)
    pub fn binary_grid(&self) -> Result<Vec<Vec<u8>>, Box<dyn std::error::Error>> {
        Ok(self.grid()?.to_binary_grid())
    }
}

/// Generate a maze from a configuration.
///
/// When the config carries no seed, one is drawn at random and recorded so
/// the maze can be regenerated later.
///
/// # Example
/// ```
/// use host::{generate_maze, MazeConfig};
///
/// let config = MazeConfig { dim: 11, seed: Some(2918957128), ..MazeConfig::default() };
/// let record = generate_maze(&config).unwrap();
/// assert_eq!(record.rows.len(), 11);
/// assert_eq!(&record.rows[1][1..2], "_");
/// ```
pub fn generate_maze(config: &MazeConfig) -> Result<MazeRecord, Box<dyn std::error::Error>> {
    let seed = config.seed.unwrap_or_else(rand::random);
    let (start_row, start_col) = config.start();

    tracing::info!(
        "Generating {}x{} maze for seed {} (left limit {}, start ({}, {}))",
        config.dim,
        config.dim,
        seed,
        config.left_limit,
        start_row,
        start_col
    );

    let grid = carve(config.dim, config.left_limit, start_row, start_col, seed)?;

    let record = MazeRecord {
        seed,
        dim: config.dim,
        left_limit: config.left_limit,
        start_row,
        start_col,
        path_cells: grid.path_count(),
        rows: grid.to_glyph_rows(),
    };

    tracing::info!("Maze generated: {} path cells", record.path_cells);
    Ok(record)
}

/// Regenerate a maze from a record's parameters and compare it to the
/// stored grid.
///
/// Generation is deterministic for a given seed, so any difference means the
/// record was edited or produced by a different algorithm.
pub fn regenerate_matches(record: &MazeRecord) -> Result<bool, Box<dyn std::error::Error>> {
    let stored = record.grid()?;
    let regenerated = carve(
        record.dim,
        record.left_limit,
        record.start_row,
        record.start_col,
        record.seed,
    )?;

    let matches = stored == regenerated;
    if !matches {
        tracing::warn!(
            "Stored maze for seed {} does not match its regeneration",
            record.seed
        );
    }
    Ok(matches)
}

fn carve(
    dim: usize,
    left_limit: usize,
    start_row: usize,
    start_col: usize,
    seed: u32,
) -> Result<Grid, Box<dyn std::error::Error>> {
    let mut generator = MazeGenerator::with_left_limit(dim, left_limit)?;
    generator.generate_from(start_row, start_col, SimpleLCG::new(seed))?;
    Ok(generator.into_grid())
}

pub fn save_record(record: &MazeRecord, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(record)?;
    fs::write(path.as_ref(), json)?;
    tracing::info!("Saved maze record to {}", path.as_ref().display());
    Ok(())
}

pub fn load_record(path: impl AsRef<Path>) -> Result<MazeRecord, Box<dyn std::error::Error>> {
    let path = path.as_ref();

    // Validate file size before reading (prevent loading gigabytes into memory)
    let size = fs::metadata(path)?.len();
    if size > MAX_RECORD_BYTES {
        return Err(format!("Maze file is too large: {} bytes (max 10MB)", size).into());
    }

    let json = fs::read_to_string(path)?;
    let record: MazeRecord = serde_json::from_str(&json)?;
    tracing::info!("Loaded maze record for seed {} from {}", record.seed, path.display());
    Ok(record)
}
