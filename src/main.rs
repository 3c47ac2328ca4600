use anyhow::{Context, Result};
use clap::Parser;
use rand::{rngs::StdRng, thread_rng, SeedableRng};
use slider_puzzle_solver::monitor::{CompositeMonitor, LogMonitor};
use slider_puzzle_solver::render::write_outcome;
use slider_puzzle_solver::{parse_board, Board, CycleCheck, Solver, SolverConfig};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::time::Duration;

const MAX_RANDOM_SIZE: i64 = 32;

#[derive(Parser)]
#[command(name = "slider-puzzle-solver")]
#[command(about = "Find a shortest solution to an N×N sliding-tile puzzle")]
struct Args {
    /// Puzzle file: the size N followed by N² tiles, 0 for the blank. Reads stdin if omitted.
    input: Option<PathBuf>,

    /// Solve a random solvable board of this size instead of reading one.
    #[arg(long, value_name = "N", conflicts_with = "input", value_parser = clap::value_parser!(u16).range(1..=MAX_RANDOM_SIZE))]
    random: Option<u16>,

    /// Seed for --random.
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Never expand the same board twice on either side.
    #[arg(long)]
    visited: bool,

    /// Print search progress to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Print solver statistics after the solution.
    #[arg(long)]
    stats: bool,

    /// Highlight the tile moved at each step.
    #[arg(long)]
    color: bool,
}

fn read_board(args: &Args) -> Result<Board> {
    if let Some(size) = args.random {
        let size = usize::from(size);
        let board = match args.seed {
            Some(seed) => Board::random_solvable(size, &mut StdRng::seed_from_u64(seed)),
            None => Board::random_solvable(size, &mut thread_rng()),
        };
        return Ok(board);
    }

    let text = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            text
        }
    };

    parse_board(&text).context("invalid board")
}

fn main() -> Result<()> {
    let args = Args::parse();
    let board = read_board(&args)?;

    let cycle_check = if args.visited {
        CycleCheck::Visited
    } else {
        CycleCheck::Parent
    };
    let mut solver = Solver::new(SolverConfig::default().with_cycle_check(cycle_check));

    let mut monitor = CompositeMonitor::new();
    if args.verbose {
        monitor.add_monitor(LogMonitor::stderr(Duration::from_secs(1)));
    }
    let outcome = solver.solve_with_monitor(&board, &mut monitor);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_outcome(&mut out, &outcome, args.color)?;
    if args.stats {
        write!(out, "{}", solver.statistics())?;
    }
    out.flush()?;

    Ok(())
}
