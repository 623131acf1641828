//! CLI for maze generation

use clap::{Parser, ValueEnum};
use mazify::{carve, render, Grid};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Generate a perfect maze and print it as ASCII art
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze height in cells
    #[arg(default_value_t = 10)]
    rows: usize,

    /// Maze width in cells
    #[arg(default_value_t = 10)]
    cols: usize,

    /// Carving algorithm
    #[arg(short, long, value_enum, default_value_t = Algorithm::Kruskal)]
    algorithm: Algorithm,

    /// Random seed; omit to get a different maze on every run
    #[arg(short, long)]
    seed: Option<u64>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Algorithm {
    /// Randomized depth-first carving, long winding corridors
    Backtracker,
    /// Randomized Kruskal's algorithm, evenly spread branch points
    Kruskal,
}

/// Build the grid, carve it, print the result
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut grid = Grid::new(args.rows, args.cols)?;
    let mut rng = match args.seed {
        Some(state) => StdRng::seed_from_u64(state),
        None => StdRng::from_entropy(),
    };
    match args.algorithm {
        Algorithm::Backtracker => carve::recursive_backtracker(&mut grid, 0, 0, &mut rng),
        Algorithm::Kruskal => carve::kruskal(&mut grid, &mut rng),
    }
    print!("{}", render::render(&grid));
    Ok(())
}
