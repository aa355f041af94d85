use anyhow::{Context, Result};
use clap::Parser;
use maze_core::{MazeConfig, RandomMaze};
use std::fs;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON config file; missing fields take the crate defaults
    #[arg(short, long)]
    config: Option<String>,
    /// Override the config's random seed
    #[arg(short, long)]
    seed: Option<u64>,
    #[arg(long)]
    height: Option<i32>,
    #[arg(long)]
    width: Option<i32>,
    /// Override the maximum room count
    #[arg(short, long)]
    rooms: Option<i32>,
    /// Mark room connections with door cells
    #[arg(long)]
    doors: bool,
    /// Skip the dead-end and horseshoe simplification passes
    #[arg(long)]
    no_simplify: bool,
    /// Also print the variations layer after each maze
    #[arg(long)]
    variations: bool,
    /// Number of mazes to generate from the seed's stream
    #[arg(long, default_value_t = 1)]
    count: u32,
}

fn load_config(args: &Args) -> Result<MazeConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let data = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {path}"))?;
            serde_json::from_str(&data).with_context(|| "Failed to deserialize config JSON")?
        }
        None => MazeConfig::default(),
    };
    apply_overrides(&mut config, args);
    Ok(config)
}

fn apply_overrides(config: &mut MazeConfig, args: &Args) {
    if let Some(seed) = args.seed {
        config.random_seed = seed;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(rooms) = args.rooms {
        config.max_rooms = rooms;
    }
    if args.doors {
        config.has_doors = true;
    }
    if args.no_simplify {
        config.simplify = false;
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args)?;
    let mut generator =
        RandomMaze::new(config).map_err(|e| anyhow::anyhow!("Invalid maze config: {:?}", e))?;

    for index in 0..args.count {
        if index > 0 {
            generator.regenerate();
            println!();
        }
        print!("{}", generator.entity_layer());
        if args.variations {
            println!();
            print!("{}", generator.variations_layer());
        }
    }

    Ok(())
}
