use host::{generate_maze, load_record, regenerate_matches, save_record, MazeConfig, MAX_RECORD_BYTES};
use std::path::PathBuf;

/// The known maze seed for testing
const MAZE_SEED: u32 = 2918957128;

fn seeded(dim: usize) -> MazeConfig {
    MazeConfig {
        dim,
        seed: Some(MAZE_SEED),
        ..MazeConfig::default()
    }
}

fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("maze-host-{}-{}", std::process::id(), name))
}

#[test]
fn test_generate_record() {
    let record = generate_maze(&seeded(21)).expect("Maze generation failed");

    assert_eq!(record.seed, MAZE_SEED);
    assert_eq!(record.dim, 21);
    assert_eq!((record.start_row, record.start_col), (1, 1));
    assert_eq!(record.rows.len(), 21);
    assert!(record.rows.iter().all(|row| row.chars().count() == 21));

    // Border rows are solid wall
    assert_eq!(record.rows[0], "#".repeat(21));
    assert_eq!(record.rows[20], "#".repeat(21));

    let grid = record.grid().expect("Glyph rows should decode");
    assert_eq!(grid.path_count(), record.path_cells);
    assert!(grid.is_path(1, 1));
}

#[test]
fn test_same_seed_same_maze() {
    let first = generate_maze(&seeded(31)).unwrap();
    let second = generate_maze(&seeded(31)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_random_seed_is_recorded() {
    let config = MazeConfig {
        dim: 15,
        ..MazeConfig::default()
    };
    let record = generate_maze(&config).unwrap();

    // Whatever seed was drawn must reproduce the maze
    assert!(regenerate_matches(&record).unwrap());
}

#[test]
fn test_binary_grid_matches_glyphs() {
    let record = generate_maze(&seeded(11)).unwrap();
    let binary = record.binary_grid().unwrap();

    for (row, glyphs) in binary.iter().zip(&record.rows) {
        for (bit, glyph) in row.iter().zip(glyphs.chars()) {
            assert_eq!(*bit == 1, glyph == '_');
        }
    }
}

#[test]
fn test_save_and_load() {
    let record = generate_maze(&seeded(17)).unwrap();
    let path = temp_file("save_and_load.json");

    save_record(&record, &path).expect("Saving should succeed");
    let loaded = load_record(&path).expect("Loading should succeed");
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, record);
    assert!(regenerate_matches(&loaded).unwrap());
}

#[test]
fn test_tampered_record_detected() {
    let mut record = generate_maze(&seeded(13)).unwrap();

    // Open a wall cell in the bottom border
    record.rows[12].replace_range(5..6, "_");

    assert!(!regenerate_matches(&record).unwrap());
}

#[test]
fn test_ragged_record_rejected() {
    let mut record = generate_maze(&seeded(9)).unwrap();
    record.rows[3].push('#');

    assert!(record.grid().is_err());
    assert!(regenerate_matches(&record).is_err());
}

#[test]
fn test_dimension_mismatch_rejected() {
    let mut record = generate_maze(&seeded(9)).unwrap();
    record.dim = 11;
    assert!(record.grid().is_err());
}

#[test]
fn test_invalid_config_errors() {
    let zero = MazeConfig {
        dim: 0,
        seed: Some(1),
        ..MazeConfig::default()
    };
    assert!(generate_maze(&zero).is_err());

    let outside = MazeConfig {
        dim: 5,
        start_row: Some(5),
        seed: Some(1),
        ..MazeConfig::default()
    };
    assert!(generate_maze(&outside).is_err());
}

#[test]
fn test_degenerate_config() {
    let record = generate_maze(&seeded(3)).unwrap();
    assert_eq!(record.path_cells, 1);
    assert_eq!(record.rows, vec!["###", "#_#", "###"]);
}

#[test]
fn test_load_config_file() {
    let path = temp_file("config.json");
    std::fs::write(&path, r#"{ "dim": 25, "left_limit": 1, "seed": 42 }"#).unwrap();
    let config = MazeConfig::load(&path).expect("Config should load");
    std::fs::remove_file(&path).ok();

    assert_eq!(config.dim, 25);
    assert_eq!(config.seed, Some(42));

    let record = generate_maze(&config).unwrap();
    assert_eq!(record.rows.len(), 25);
}

#[test]
fn test_oversized_file_rejected() {
    let path = temp_file("oversized.json");
    let file = std::fs::File::create(&path).unwrap();
    file.set_len(MAX_RECORD_BYTES + 1).unwrap();
    drop(file);

    let err = load_record(&path).unwrap_err();
    std::fs::remove_file(&path).ok();

    assert!(err.to_string().contains("too large"), "unexpected error: {}", err);
}

#[test]
fn test_missing_file_errors() {
    assert!(load_record(temp_file("does-not-exist.json")).is_err());
    assert!(MazeConfig::load(temp_file("no-config.json")).is_err());
}
