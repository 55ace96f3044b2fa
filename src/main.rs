//! CLI for maze rendering

use std::{fs, path::PathBuf};

use anyhow::{ensure, Context};
use clap::{error::ErrorKind, CommandFactory, Parser};
use glyph_maze::{Maze, MazeConfig, MazeGenerator};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Draw a random perfect maze with box-drawing characters
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Output width in characters, halved into maze cells
    width: Option<usize>,

    /// Output height in lines, halved into maze cells
    height: Option<usize>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Number of rectangular rooms to clear out of the maze
    #[arg(long)]
    rooms: Option<usize>,

    /// TOML file with `width`, `height`, `seed` and `rooms`.
    /// Command line values take precedence.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Check the carved maze is a spanning tree before printing
    #[arg(long)]
    verify: bool,

    /// Log more to stderr, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn to_config(&self) -> MazeConfig {
        MazeConfig {
            width: self.width,
            height: self.height,
            seed: self.seed,
            rooms: self.rooms,
        }
    }
}

/// Log to stderr so that stdout only carries the maze
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Generate a maze, print it
fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let file_config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Could not read config file {}", path.display()))?;
            MazeConfig::from_toml(&text)
                .with_context(|| format!("Could not parse config file {}", path.display()))?
        }
        None => MazeConfig::default(),
    };
    let config = file_config.merge(args.to_config());

    // Bad dimensions are a usage error, reported before any allocation
    if let Err(e) = config.dimensions() {
        Args::command().error(ErrorKind::ValueValidation, e).exit();
    }

    let mut gen = MazeGenerator::new(config.seed);
    let maze = Maze::from_config(&config, &mut gen)?;

    if args.verify {
        ensure!(
            maze.graph().is_perfect(),
            "Carved maze is not a spanning tree"
        );
        info!("maze verified");
    }

    print!("{maze}");
    Ok(())
}
