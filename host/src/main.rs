use host::{generate_maze, load_record, regenerate_matches, save_record, MazeConfig};
use std::env;
use std::error::Error;
use std::time::Instant;

fn main() {
    // Initialize tracing for debug output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    let command = &args[1];

    match command.as_str() {
        "generate" => {
            let lookup = |key: &str| env::var(key).ok();
            let (config, output_file) = parse_generate_args(&args[2..], lookup).unwrap_or_else(|e| {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            });

            generate_command(config, output_file.as_deref());
        }

        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: {} check <maze_file>", args[0]);
                eprintln!("Error: Missing required argument");
                std::process::exit(1);
            }

            check_command(&args[2]);
        }

        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage(&args[0]);
            std::process::exit(1);
        }
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <command> [options]", program);
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  generate [seed] [--dim N] [--left-limit N] [--config FILE] [output_file]");
    eprintln!("      Generate a maze and save it as JSON");
    eprintln!("      - seed: Integer seed for the direction shuffle");
    eprintln!("              Falls back to MAZE_SEED, the config file, then a random seed");
    eprintln!("      - --dim: Grid side length (default 21)");
    eprintln!("      - --left-limit: Border rows/cols kept as wall (default 1)");
    eprintln!("      - --config: JSON config file; flags override it");
    eprintln!("      - output_file: Defaults to <seed>_maze.json");
    eprintln!();
    eprintln!("  check <maze_file>");
    eprintln!("      Confirm a saved maze regenerates identically from its seed");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  MAZE_DIM, MAZE_LEFT_LIMIT, MAZE_SEED override the config file");
    eprintln!("  RUST_LOG sets the log filter");
}

/// Config file first, then environment, then command-line arguments.
///
/// A leading argument that parses as an integer is the seed; anything else
/// that is not a flag is the output file.
fn parse_generate_args<F>(args: &[String], lookup: F) -> Result<(MazeConfig, Option<String>), Box<dyn Error>>
where
    F: Fn(&str) -> Option<String>,
{
    let (seed, rest) = match args.split_first() {
        Some((first, rest)) if !first.starts_with("--") && first.parse::<u64>().is_ok() => {
            let seed: u32 = first
                .parse()
                .map_err(|_| format!("Invalid maze seed '{}'. Must fit in 32 bits.", first))?;
            (Some(seed), rest)
        }
        _ => (None, args),
    };

    let mut dim = None;
    let mut left_limit = None;
    let mut config_file = None;
    let mut output_file = None;

    let mut rest = rest.iter();
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--dim" => dim = Some(parse_flag(arg, rest.next())?),
            "--left-limit" => left_limit = Some(parse_flag(arg, rest.next())?),
            "--config" => config_file = Some(parse_flag::<String>(arg, rest.next())?),
            other if other.starts_with("--") => return Err(format!("Unknown flag {}", other).into()),
            other => output_file = Some(other.to_string()),
        }
    }

    let mut config = match config_file {
        Some(path) => MazeConfig::load(path)?,
        None => MazeConfig::default(),
    }
    .apply_vars(lookup)?;

    if seed.is_some() {
        config.seed = seed;
    }
    if let Some(dim) = dim {
        config.dim = dim;
    }
    if let Some(left_limit) = left_limit {
        config.left_limit = left_limit;
    }

    Ok((config, output_file))
}

fn parse_flag<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, String>
where
    T::Err: std::fmt::Display,
{
    let value = value.ok_or_else(|| format!("{} requires a value", flag))?;
    value
        .parse()
        .map_err(|e| format!("Invalid {} '{}': {}", flag, value, e))
}

fn generate_command(config: MazeConfig, output_file: Option<&str>) {
    println!("Generating maze");
    println!("  Dimension: {}x{}", config.dim, config.dim);
    println!("  Left limit: {}", config.left_limit);
    println!();

    let start = Instant::now();

    match generate_maze(&config) {
        Ok(record) => {
            let duration = start.elapsed();
            println!("  Generation time: {:.3}ms", duration.as_secs_f64() * 1000.0);
            println!("  Seed: {}", record.seed);
            println!("  Path cells: {}", record.path_cells);
            println!();

            // Use default filename pattern if no output file specified
            let default_filename = format!("{}_maze.json", record.seed);
            let file_to_save = output_file.unwrap_or(&default_filename);

            if let Err(e) = save_record(&record, file_to_save) {
                eprintln!("Error saving maze: {}", e);
                std::process::exit(1);
            }
            println!("Maze saved to: {}", file_to_save);
        }
        Err(e) => {
            eprintln!("Error generating maze: {}", e);
            std::process::exit(1);
        }
    }
}

fn check_command(maze_file: &str) {
    let record = match load_record(maze_file) {
        Ok(record) => record,
        Err(e) => {
            eprintln!("Error loading maze: {}", e);
            std::process::exit(1);
        }
    };

    println!("Loaded maze (seed: {}, {}x{})", record.seed, record.dim, record.dim);

    match regenerate_matches(&record) {
        Ok(true) => println!("Maze regenerates identically from seed {}", record.seed),
        Ok(false) => {
            eprintln!("Maze does NOT match its regeneration from seed {}", record.seed);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error checking maze: {}", e);
            std::process::exit(1);
        }
    }
}
