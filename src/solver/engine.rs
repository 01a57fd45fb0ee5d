//! Main Bulls and Cows solver interface

use super::session::{Event, Session};
use crate::core::{Config, Error, Response, Sequence, SequenceError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Metrics of a solved session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    /// Guesses made, including the winning one
    pub moves: usize,
    /// Candidates examined: the universe size for the first response, then the
    /// size of the candidate set before each later filter
    pub operations: u128,
    /// Wall-clock time from the start of the session to the winning guess
    pub elapsed: Duration,
}

/// Main Bulls and Cows solver
///
/// Owns the configuration and the random source, and carries the winning guess of
/// one session into the next, where the shortcut heuristic may reuse it.
pub struct Solver<R = StdRng> {
    pub(super) config: Config,
    pub(super) rng: R,
    pub(super) last_guess: Option<Sequence>,
    pub(super) stats: Option<SessionStats>,
}

impl Solver<StdRng> {
    /// Create a solver seeded from the operating system
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create a solver with a reproducible random source
    #[must_use]
    pub fn seeded(config: Config, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Solver<R> {
    /// Create a solver drawing randomness from `rng`
    pub const fn with_rng(config: Config, rng: R) -> Self {
        Self {
            config,
            rng,
            last_guess: None,
            stats: None,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Winning guess of the last solved session
    ///
    /// The next session's second move may reuse it.
    #[must_use]
    pub const fn last_guess(&self) -> Option<&Sequence> {
        self.last_guess.as_ref()
    }

    /// Replace the guess carried into the next session
    ///
    /// # Errors
    /// Returns `SequenceError` if `guess` does not belong to this solver's
    /// configuration. The carried guess is left unchanged in that case.
    pub fn set_last_guess(&mut self, guess: Option<Sequence>) -> Result<(), SequenceError> {
        if let Some(guess) = &guess {
            self.config.check_sequence(guess)?;
        }
        self.last_guess = guess;
        Ok(())
    }

    /// Metrics of the last solved session
    #[must_use]
    pub const fn stats(&self) -> Option<&SessionStats> {
        self.stats.as_ref()
    }

    /// Start a session against the secret behind `evaluate`
    ///
    /// `evaluate` is called once per guess and must answer consistently for one
    /// fixed secret. Returning an error (typically [`Error::Stopped`]) ends the
    /// session immediately.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::{Config, Response};
    /// use bulls_cows::solver::{Event, Solver};
    ///
    /// let config = Config::default();
    /// let secret = config.parse("4721").unwrap();
    /// let mut solver = Solver::seeded(config.clone(), 1);
    ///
    /// let mut solved = None;
    /// for event in solver.solve(|guess| Ok(config.score(guess, &secret)?)) {
    ///     if let Event::Solved(guess) = event.unwrap() {
    ///         solved = Some(guess);
    ///     }
    /// }
    ///
    /// assert_eq!(solved, Some(secret.clone()));
    /// assert_eq!(solver.last_guess(), Some(&secret));
    /// assert!(solver.stats().unwrap().moves >= 1);
    /// ```
    pub fn solve<F>(&mut self, evaluate: F) -> Session<'_, R, F>
    where
        F: FnMut(&Sequence) -> Result<Response, Error>,
    {
        Session::new(self, evaluate)
    }

    /// Run a session to completion and return the secret
    ///
    /// # Errors
    /// Returns the first error of the session: an invalid response, a
    /// contradiction, or whatever `evaluate` returned.
    pub fn run<F>(&mut self, evaluate: F) -> Result<Sequence, Error>
    where
        F: FnMut(&Sequence) -> Result<Response, Error>,
    {
        for event in self.solve(evaluate) {
            if let Event::Solved(secret) = event? {
                return Ok(secret);
            }
        }
        // a session always ends with `Solved` or an error
        Err(Error::Stopped)
    }
}
