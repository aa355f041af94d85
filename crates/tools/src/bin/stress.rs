use anyhow::Result;
use clap::Parser;
use maze_core::{FloodFill, Layer, MazeConfig, Pos, RandomMaze, WALL_CELL};
use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 0)]
    first_seed: u64,
    #[arg(short, long, default_value_t = 100)]
    seeds: u64,
    /// Regenerations checked per seed
    #[arg(short, long, default_value_t = 5)]
    rounds: u32,
    #[arg(long, default_value_t = 17)]
    height: i32,
    #[arg(long, default_value_t = 17)]
    width: i32,
}

fn open_cells(generator: &RandomMaze) -> Vec<Pos> {
    let maze = generator.maze();
    maze.area()
        .cells()
        .filter(|&pos| maze.cell(Layer::Entity, pos) != WALL_CELL)
        .collect()
}

fn check_connectivity(generator: &RandomMaze, seed: u64, round: u32) -> Result<()> {
    let open = open_cells(generator);
    let Some(&start) = open.first() else {
        anyhow::bail!("seed {} round {}: maze has no open cells", seed, round);
    };
    let fill = FloodFill::new(generator.maze(), Layer::Entity, start, &[WALL_CELL]);
    let reached = fill.connected_cells().count();
    if reached != open.len() {
        anyhow::bail!(
            "seed {} round {}: {} of {} open cells unreachable\n{}",
            seed,
            round,
            open.len() - reached,
            open.len(),
            generator.entity_layer()
        );
    }

    // Walk a shortest path from the farthest cell back to the fill goal.
    if let Some((farthest, _)) = fill.connected_cells().last() {
        let mut path_rng = ChaCha8Rng::seed_from_u64(seed);
        let path = fill.shortest_path_from(farthest, &mut path_rng);
        let expected = fill.distance_from(farthest) as usize + 1;
        if path.len() != expected {
            anyhow::bail!(
                "seed {} round {}: path length {} disagrees with distance {}",
                seed,
                round,
                path.len(),
                expected - 1
            );
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!(
        "Stressing {} seeds from {} at {}x{}, {} rounds each...",
        args.seeds, args.first_seed, args.height, args.width, args.rounds
    );

    for seed in args.first_seed..args.first_seed + args.seeds {
        let config = MazeConfig {
            height: args.height,
            width: args.width,
            has_doors: seed % 2 == 0,
            extra_connection_probability: if seed % 3 == 0 { 0.5 } else { 0.0 },
            random_seed: seed,
            ..MazeConfig::default()
        };
        let mut generator =
            RandomMaze::new(config).map_err(|e| anyhow::anyhow!("Invalid config: {:?}", e))?;

        let mut fingerprints = Vec::with_capacity(args.rounds as usize);
        for round in 0..args.rounds {
            if round > 0 {
                generator.regenerate();
            }
            check_connectivity(&generator, seed, round)?;
            fingerprints.push(generator.maze().layout_hash());
        }
        println!("seed {:6}: {:016x}", seed, fingerprints[0]);
    }

    println!("Stress run completed successfully.");
    Ok(())
}
