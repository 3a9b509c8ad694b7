use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{Level, debug, info, warn};
use triangle::generate::{random_rows, write_rows};
use triangle::{DEFAULT_BLOCK_SIZE, Reducer, Triangle, accumulate, read_triangle_file, search, subtriangles};

const DEFAULT_FILE: &str = "testtriangle.txt";
/// Never overwritten by `generate`.
const MASTER_FILE: &str = "triangle.txt";
const DEFAULT_GENERATE_SIZE: usize = 10;
/// Above this rank the exponential strategies are skipped by `--compare`.
const EXHAUSTIVE_RANK_LIMIT: usize = 25;

#[derive(Parser)]
#[command(name = "max-path-sum")]
#[command(about = "Find the maximum path sum through a number triangle")]
struct Cli {
    /// Print debug information to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a triangle data file
    Solve {
        /// Input triangle data file
        #[arg(short, long, default_value = DEFAULT_FILE)]
        input: PathBuf,

        /// Strategy used to find the optimum
        #[arg(short, long, value_enum, default_value_t = Method::Reduction)]
        method: Method,

        /// Rows per reduction block, and the rank below which the triangle is
        /// solved directly
        #[arg(short, long, default_value_t = DEFAULT_BLOCK_SIZE)]
        size: usize,

        /// Run every strategy and fail unless they agree
        #[arg(long)]
        compare: bool,
    },

    /// Write a random test triangle
    Generate {
        /// Number of rows
        #[arg(short, long, default_value_t = DEFAULT_GENERATE_SIZE)]
        size: usize,

        /// Output file
        #[arg(short, long, default_value = DEFAULT_FILE)]
        output: PathBuf,

        /// Seed for a reproducible triangle
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Method {
    /// Depth-first search with bound pruning
    Search,
    /// Divide and conquer over sub-triangles
    Subtriangles,
    /// Bottom-up block reduction
    Reduction,
    /// Row-by-row accumulation
    Accumulate,
}

impl Method {
    const ALL: [Method; 4] = [
        Method::Search,
        Method::Subtriangles,
        Method::Reduction,
        Method::Accumulate,
    ];

    fn is_exhaustive(self) -> bool {
        matches!(self, Method::Search | Method::Subtriangles)
    }
}

fn solve_with(method: Method, t: &Triangle, block_size: usize) -> Result<i64> {
    let optimum = match method {
        Method::Search => search::solve(t.rows())?,
        Method::Subtriangles => subtriangles::solve(t),
        Method::Reduction => Reducer::new(block_size)?.solve(&mut t.clone())?.optimum,
        Method::Accumulate => accumulate::solve(t.rows())?,
    };
    debug!(?method, optimum, "solved");
    Ok(optimum)
}

fn run_solve(input: &Path, method: Method, block_size: usize, compare: bool) -> Result<i64> {
    let t = read_triangle_file(input)
        .with_context(|| format!("could not load triangle from {}", input.display()))?;
    info!(rank = t.rank(), file = %input.display(), "loaded triangle");

    if !compare {
        if method.is_exhaustive() && t.rank() > EXHAUSTIVE_RANK_LIMIT {
            warn!(?method, rank = t.rank(), "exhaustive strategy on a large triangle");
        }
        return solve_with(method, &t, block_size);
    }

    let expected = solve_with(method, &t, block_size)?;
    for other in Method::ALL {
        if other == method {
            continue;
        }
        if other.is_exhaustive() && t.rank() > EXHAUSTIVE_RANK_LIMIT {
            warn!(method = ?other, rank = t.rank(), "skipping exhaustive strategy");
            continue;
        }
        let optimum = solve_with(other, &t, block_size)?;
        if optimum != expected {
            bail!(
                "{:?} found {} but {:?} found {}",
                method,
                expected,
                other,
                optimum
            );
        }
    }
    Ok(expected)
}

fn run_generate(size: usize, output: &Path, seed: Option<u64>) -> Result<()> {
    if size == 0 {
        bail!("Triangle size must be at least 1");
    }
    if output.file_name().is_some_and(|name| name == MASTER_FILE) {
        bail!("I will not overwrite the master triangle file!");
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let rows = random_rows(size, &mut rng);

    let file = File::create(output)
        .with_context(|| format!("could not create {}", output.display()))?;
    write_rows(&rows, BufWriter::new(file))
        .with_context(|| format!("could not write {}", output.display()))?;
    info!(size, file = %output.display(), "wrote triangle");
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Solve {
            input,
            method,
            size,
            compare,
        } => {
            let optimum = run_solve(&input, method, size, compare)?;
            println!("The optimal solution is {}", optimum);
        }
        Command::Generate { size, output, seed } => {
            run_generate(size, &output, seed)?;
            println!("Done!");
        }
    }
    Ok(())
}
