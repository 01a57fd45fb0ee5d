//! Sequence solving command
//!
//! Solves a specific secret and returns the solution path.

use crate::core::{Config, Response, Sequence};
use crate::solver::{Event, Solver};
use std::time::Duration;

/// Result of solving a secret
pub struct SolveResult {
    pub secret: Sequence,
    pub steps: Vec<GuessStep>,
    pub operations: u128,
    pub elapsed: Duration,
}

impl SolveResult {
    #[must_use]
    pub fn moves(&self) -> usize {
        self.steps.len()
    }
}

/// A single guess in the solution
pub struct GuessStep {
    pub guess: Sequence,
    pub response: Response,
    /// Candidates left after this response; zero once solved
    pub candidates_after: usize,
}

/// Solve `secret` with a fresh solver
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not a valid sequence for `config`
/// - The session fails (which would mean the scorer disagrees with itself)
pub fn solve_sequence(
    config: &Config,
    secret: &str,
    seed: Option<u64>,
) -> Result<SolveResult, String> {
    let secret = config
        .parse(secret)
        .map_err(|e| format!("Invalid secret: {e}"))?;

    let mut solver = match seed {
        Some(seed) => Solver::seeded(config.clone(), seed),
        None => Solver::new(config.clone()),
    };

    let mut steps = Vec::new();
    let mut session = solver.solve(|guess| Ok(config.score(guess, &secret)?));
    while let Some(event) = session.next() {
        let event = event.map_err(|e| e.to_string())?;
        let Some((guess, response)) = session.history().last().cloned() else {
            continue;
        };
        let candidates_after = match event {
            Event::Pending => session.candidates().len(),
            Event::Solved(_) => 0,
        };
        steps.push(GuessStep {
            guess,
            response,
            candidates_after,
        });
    }
    drop(session);

    let stats = solver
        .stats()
        .copied()
        .ok_or_else(|| "Session ended without solving".to_string())?;

    Ok(SolveResult {
        secret,
        steps,
        operations: stats.operations,
        elapsed: stats.elapsed,
    })
}
