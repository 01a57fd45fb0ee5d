//! Bulls and Cows Solver - CLI
//!
//! Breaks secret sequences of distinct symbols by narrowing the set of consistent
//! candidates after every response.

use anyhow::{Result, anyhow};
use bulls_cows::{
    commands::{
        analyze_guess, list_candidates, pick_secrets, print_test_all_statistics, run_benchmark,
        run_test_all, solve_sequence,
    },
    core::{Config, DEFAULT_ALPHABET_SIZE, DEFAULT_SEQUENCE_LENGTH},
    output::{
        print_analysis_result, print_benchmark_result, print_candidates_result,
        print_solve_result,
    },
    solver::Solver,
};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(
    name = "bulls_cows",
    about = "Bulls and Cows solver using direct candidate generation",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Number of positions in a sequence
    #[arg(short, long, global = true, default_value_t = DEFAULT_SEQUENCE_LENGTH)]
    length: usize,

    /// Number of symbols in use, taken in order from 1234567890ABC…Z
    #[arg(short, long, global = true, default_value_t = DEFAULT_ALPHABET_SIZE)]
    alphabet: usize,

    /// Seed for reproducible runs (default: random)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a specific secret
    Solve {
        /// The secret to solve
        secret: String,

        /// Show candidate counts, operations and timing
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze how a guess splits the universe
    Analyze {
        /// Guess to analyze
        guess: String,
    },

    /// List the candidates consistent with one guess and its response
    Candidates {
        /// The guess that was made
        guess: String,

        /// Its response, e.g. "1 2" or "1B2C"
        response: String,

        /// Maximum number of candidates to list
        #[arg(short = 'n', long, default_value = "50")]
        limit: usize,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of sessions to run
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Use one secret for every session
        #[arg(short, long)]
        repeat: bool,
    },

    /// Test solver on EVERY possible secret
    TestAll {
        /// Limit number of secrets to test
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = Config::new(cli.length, cli.alphabet)?;

    match cli.command {
        Commands::Solve { secret, verbose } => {
            let result = solve_sequence(&config, &secret, cli.seed).map_err(|e| anyhow!(e))?;
            print_solve_result(&result, verbose);
        }
        Commands::Analyze { guess } => {
            let result = analyze_guess(&config, &guess).map_err(|e| anyhow!(e))?;
            print_analysis_result(&result);
        }
        Commands::Candidates {
            guess,
            response,
            limit,
        } => {
            let result =
                list_candidates(&config, &guess, &response, limit).map_err(|e| anyhow!(e))?;
            print_candidates_result(&result);
        }
        Commands::Benchmark { count, repeat } => {
            run_benchmark_command(config, count, repeat, cli.seed)?;
        }
        Commands::TestAll { limit } => run_test_all_command(&config, limit, cli.seed),
    }
    Ok(())
}

fn run_benchmark_command(config: Config, count: usize, repeat: bool, seed: Option<u64>) -> Result<()> {
    if repeat {
        println!("Running benchmark on one secret {count} times ({config})...");
    } else {
        println!("Running benchmark on {count} random secrets ({config})...");
    }

    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let secrets = pick_secrets(&config, count, repeat, &mut rng);

    let mut solver = Solver::with_rng(config, rng);
    let result = run_benchmark(&mut solver, &secrets).map_err(|e| anyhow!(e))?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_test_all_command(config: &Config, limit: Option<usize>, seed: Option<u64>) {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Bulls and Cows Solver Test ");
    println!("{}", "═".repeat(70));
    println!(
        "\nTesting against {} possible secrets ({config})",
        config.universe_size()
    );
    println!();

    let seed = seed.unwrap_or_else(rand::random);
    let stats = run_test_all(config, limit, seed);
    print_test_all_statistics(&stats);
}
