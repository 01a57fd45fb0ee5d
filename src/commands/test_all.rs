//! Test all secrets - comprehensive solver evaluation
//!
//! Runs the solver against every sequence of the universe and generates statistics.

use crate::core::{Config, Sequence};
use crate::solver::Solver;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result from solving a single secret
#[derive(Debug, Clone)]
pub struct SecretTestResult {
    pub secret: Sequence,
    pub moves: usize,
    pub operations: u128,
    pub error: Option<String>,
}

/// Statistics from testing every secret
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_secrets: usize,
    pub solved: usize,
    pub failed: usize,
    pub move_distribution: FxHashMap<usize, usize>,
    pub total_time: Duration,
    pub average_moves: f64,
    pub max_moves: usize,
    pub min_moves: usize,
    pub average_operations: f64,
    pub worst_secrets: Vec<(Sequence, usize)>,
    pub failures: Vec<(Sequence, String)>,
}

fn solve_one(config: &Config, secret: Sequence, seed: u64) -> SecretTestResult {
    let mut solver = Solver::seeded(config.clone(), seed);
    match solver.run(|guess| Ok(config.score(guess, &secret)?)) {
        Ok(_) => {
            let (moves, operations) = solver
                .stats()
                .map_or((0, 0), |stats| (stats.moves, stats.operations));
            SecretTestResult {
                secret,
                moves,
                operations,
                error: None,
            }
        }
        Err(e) => SecretTestResult {
            secret,
            moves: 0,
            operations: 0,
            error: Some(e.to_string()),
        },
    }
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {eta}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░");
    pb.set_style(style);
    pb
}

/// Solve every sequence of the universe (or the first `limit` of them) in parallel
///
/// Each secret gets its own solver, seeded from `seed` and its index, so a run is
/// reproducible regardless of scheduling.
pub fn run_test_all(config: &Config, limit: Option<usize>, seed: u64) -> TestAllStatistics {
    let secrets: Vec<Sequence> = config.sequences().take(limit.unwrap_or(usize::MAX)).collect();

    println!("🎯 Testing {} secrets...", secrets.len());
    let pb = progress_bar(secrets.len());
    let total_start = Instant::now();

    let results: Vec<SecretTestResult> = secrets
        .into_par_iter()
        .enumerate()
        .map(|(idx, secret)| {
            let result = solve_one(config, secret, seed.wrapping_add(idx as u64));
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_with_message("Complete!");
    let total_time = total_start.elapsed();

    summarize(results, total_time)
}

fn summarize(results: Vec<SecretTestResult>, total_time: Duration) -> TestAllStatistics {
    let total_secrets = results.len();
    let (solved, failed): (Vec<_>, Vec<_>) = results.into_iter().partition(|r| r.error.is_none());

    let mut move_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for result in &solved {
        *move_distribution.entry(result.moves).or_insert(0) += 1;
    }

    let total_moves: usize = solved.iter().map(|r| r.moves).sum();
    let total_operations: f64 = solved.iter().map(|r| r.operations as f64).sum();
    let (average_moves, average_operations) = if solved.is_empty() {
        (0.0, 0.0)
    } else {
        (
            total_moves as f64 / solved.len() as f64,
            total_operations / solved.len() as f64,
        )
    };

    let max_moves = solved.iter().map(|r| r.moves).max().unwrap_or(0);
    let min_moves = solved.iter().map(|r| r.moves).min().unwrap_or(0);

    let mut worst_secrets: Vec<(Sequence, usize)> = solved
        .iter()
        .map(|r| (r.secret.clone(), r.moves))
        .collect();
    worst_secrets.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    worst_secrets.truncate(10);

    let failures = failed
        .into_iter()
        .filter_map(|r| r.error.map(|e| (r.secret, e)))
        .collect::<Vec<_>>();

    TestAllStatistics {
        total_secrets,
        solved: solved.len(),
        failed: failures.len(),
        move_distribution,
        total_time,
        average_moves,
        max_moves,
        min_moves,
        average_operations,
        worst_secrets,
        failures,
    }
}

/// Print test-all statistics with beautiful formatting
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total secrets tested: {}", stats.total_secrets);
    println!(
        "  Successfully solved:  {} {}",
        stats.solved,
        format!(
            "({:.1}%)",
            stats.solved as f64 / stats.total_secrets as f64 * 100.0
        )
        .green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:      {} {}",
            stats.failed,
            format!(
                "({:.1}%)",
                stats.failed as f64 / stats.total_secrets as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "  Average moves:        {}",
        format!("{:.3}", stats.average_moves).bright_yellow().bold()
    );
    println!("  Average operations:   {:.1}", stats.average_operations);
    println!(
        "  Total time:           {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per secret:      {:.3}ms",
        stats.total_time.as_secs_f64() * 1000.0 / stats.total_secrets as f64
    );

    println!("\n📈 {}", "Move Distribution".bright_cyan().bold());
    let max_count = stats.move_distribution.values().copied().max().unwrap_or(1);
    for moves in stats.min_moves..=stats.max_moves {
        let count = stats.move_distribution.get(&moves).copied().unwrap_or(0);
        if stats.solved > 0 {
            let percentage = count as f64 / stats.solved as f64 * 100.0;
            let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
            );
            println!("  {moves:2} moves: {bar} {count:6} ({percentage:5.1}%)");
        }
    }

    if !stats.worst_secrets.is_empty() {
        println!("\n😰 {}", "Hardest Secrets".yellow().bold());
        for (secret, moves) in stats.worst_secrets.iter().take(5) {
            println!("  {} ({moves} moves)", secret.to_string().yellow());
        }
    }

    if !stats.failures.is_empty() {
        println!("\n❌ {}", "Failures".red().bold());
        for (secret, error) in stats.failures.iter().take(10) {
            println!("  {}: {error}", secret.to_string().red());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_solves_small_universe() {
        let config = Config::new(3, 5).unwrap();
        let stats = run_test_all(&config, None, 0);

        assert_eq!(stats.total_secrets, 60);
        assert_eq!(stats.solved, 60);
        assert_eq!(stats.failed, 0);
        assert!(stats.failures.is_empty());
        assert!(stats.min_moves >= 1);
        assert!(stats.max_moves <= 60);
    }

    #[test]
    fn test_all_respects_limit() {
        let config = Config::default();
        let stats = run_test_all(&config, Some(25), 3);

        assert_eq!(stats.total_secrets, 25);
        let distribution_sum: usize = stats.move_distribution.values().sum();
        assert_eq!(distribution_sum, 25);
    }

    #[test]
    fn test_all_is_reproducible() {
        let config = Config::new(3, 6).unwrap();
        let first = run_test_all(&config, Some(40), 17);
        let second = run_test_all(&config, Some(40), 17);

        assert_eq!(first.move_distribution, second.move_distribution);
        assert_eq!(first.worst_secrets, second.worst_secrets);
    }

    #[test]
    fn summarize_separates_failures() {
        let config = Config::default();
        let secret = config.parse("1234").unwrap();
        let results = vec![
            SecretTestResult {
                secret: secret.clone(),
                moves: 5,
                operations: 3100,
                error: None,
            },
            SecretTestResult {
                secret: secret.clone(),
                moves: 0,
                operations: 0,
                error: Some("contradiction".to_string()),
            },
        ];

        let stats = summarize(results, Duration::from_secs(1));
        assert_eq!(stats.total_secrets, 2);
        assert_eq!(stats.solved, 1);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.failures, vec![(secret, "contradiction".to_string())]);
        assert!((stats.average_moves - 5.0).abs() < f64::EPSILON);
        assert_eq!(stats.worst_secrets.len(), 1);
    }
}
