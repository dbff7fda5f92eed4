//! Solve one puzzle from an input file.
//!
//! Usage:
//!   puzzles <PUZZLE> <FILE>
//!
//! Both answers are printed on stdout. Set `RUST_LOG=debug` to see search
//! statistics.

use std::path::PathBuf;

use clap::Parser;

use puzzles::{Puzzle, read_input};

#[derive(Parser)]
#[command(name = "puzzles")]
#[command(about = "Daily puzzle solvers built on a shortest-path engine")]
#[command(version)]
struct Cli {
    /// Which puzzle the input belongs to
    #[arg(value_enum)]
    puzzle: Puzzle,

    /// Path to the puzzle input
    #[arg(value_name = "FILE")]
    input: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")?.start()?;

    let input = read_input(&cli.input)?;
    let answers = cli.puzzle.solve(&input)?;
    println!("{answers}");
    Ok(())
}
