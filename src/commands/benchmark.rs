//! Benchmark command
//!
//! Tests solver performance across many sessions with one solver, so the carried
//! guess of each session feeds the next.

use crate::core::{Config, Sequence};
use crate::solver::Solver;
use rand::Rng;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_sessions: usize,
    pub total_moves: usize,
    pub average_moves: f64,
    pub min_moves: usize,
    pub max_moves: usize,
    pub total_operations: u128,
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub sessions_per_second: f64,
}

/// `count` random secrets, or the same random secret `count` times
pub fn pick_secrets<R: Rng + ?Sized>(
    config: &Config,
    count: usize,
    repeat: bool,
    rng: &mut R,
) -> Vec<Sequence> {
    if repeat {
        let secret = config.random_sequence(rng);
        vec![secret; count]
    } else {
        (0..count).map(|_| config.random_sequence(rng)).collect()
    }
}

/// Solve every secret in turn with `solver`
///
/// # Errors
///
/// Returns an error if any session fails.
pub fn run_benchmark<R: Rng>(
    solver: &mut Solver<R>,
    secrets: &[Sequence],
) -> Result<BenchmarkResult, String> {
    let config = solver.config().clone();
    let start = Instant::now();
    let mut total_moves = 0;
    let mut total_operations: u128 = 0;
    let mut min_moves = usize::MAX;
    let mut max_moves = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

    for secret in secrets {
        solver
            .run(|guess| Ok(config.score(guess, secret)?))
            .map_err(|e| format!("Failed to solve {secret}: {e}"))?;

        let Some(stats) = solver.stats().copied() else {
            continue;
        };
        total_moves += stats.moves;
        total_operations = total_operations.saturating_add(stats.operations);
        min_moves = min_moves.min(stats.moves);
        max_moves = max_moves.max(stats.moves);
        *distribution.entry(stats.moves).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let total_sessions = secrets.len();

    Ok(BenchmarkResult {
        total_sessions,
        total_moves,
        average_moves: total_moves as f64 / total_sessions as f64,
        min_moves,
        max_moves,
        total_operations,
        distribution,
        duration,
        sessions_per_second: total_sessions as f64 / duration.as_secs_f64(),
    })
}
