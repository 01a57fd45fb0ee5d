//! One solving session as a lazy stream of events
//!
//! The session is a small state machine:
//!
//! ```text
//! Opening ──(non-perfect)──▶ Observed ──(apply)──▶ Narrowing ──(non-perfect)──▶ Observed …
//!    │                                                  │
//!    └──(perfect)──▶ Done ◀─────────────────────────────┴──(perfect / error)
//! ```
//!
//! Every call to `next` makes exactly one guess and calls `evaluate` exactly once.
//! A non-perfect response is reported as soon as it arrives; generating or filtering
//! the candidate set for it waits until the next guess (or `candidates`) needs it.

use super::engine::{SessionStats, Solver};
use crate::core::{Error, Response, Sequence, consistent};
use log::{debug, trace};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::iter::FusedIterator;
use std::time::Instant;

/// Chance of replaying the previous session's answer as the second guess
pub const SHORTCUT_PROBABILITY: f64 = 0.4;

/// Notification produced by a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A guess was evaluated and was not the secret
    Pending,
    /// The last guess was the secret
    Solved(Sequence),
}

/// A non-perfect response not yet applied to the candidate set
struct Observation {
    guess: Sequence,
    response: Response,
    /// `None` for the opening response, which generates the set from scratch
    previous: Option<Vec<Sequence>>,
}

/// Candidate set consistent with every response so far
struct Narrowing {
    candidates: Vec<Sequence>,
    guess: Sequence,
    response: Response,
}

enum Phase {
    Opening,
    Observed(Observation),
    Narrowing(Narrowing),
    Done,
}

/// A running solve, driven by iteration
///
/// Yields `Ok(Event::Pending)` after every wrong guess and finally
/// `Ok(Event::Solved(secret))`. An error is yielded once and ends the stream.
/// Dropping the session early abandons it without touching the solver's carried
/// state.
pub struct Session<'a, R, F> {
    solver: &'a mut Solver<R>,
    evaluate: F,
    carried: Option<Sequence>,
    phase: Phase,
    started: Instant,
    moves: usize,
    operations: u128,
    history: Vec<(Sequence, Response)>,
}

impl<'a, R, F> Session<'a, R, F>
where
    R: Rng,
    F: FnMut(&Sequence) -> Result<Response, Error>,
{
    pub(super) fn new(solver: &'a mut Solver<R>, evaluate: F) -> Self {
        let carried = solver.last_guess.clone();
        Self {
            solver,
            evaluate,
            carried,
            phase: Phase::Opening,
            started: Instant::now(),
            moves: 0,
            operations: 0,
            history: Vec::new(),
        }
    }

    /// Guesses evaluated so far
    #[must_use]
    pub fn moves(&self) -> usize {
        self.history.len()
    }

    /// Candidates examined so far
    #[must_use]
    pub const fn operations(&self) -> u128 {
        self.operations
    }

    /// Every sequence still consistent with all responses
    ///
    /// Applies the latest response first if no guess has needed it yet, counting the
    /// work in [`operations`](Self::operations). Empty before the first response and
    /// after the session ends.
    pub fn candidates(&mut self) -> &[Sequence] {
        if let Phase::Observed(_) = self.phase
            && let Phase::Observed(observation) = std::mem::replace(&mut self.phase, Phase::Done)
        {
            self.phase = Phase::Narrowing(self.apply(observation));
        }

        match &self.phase {
            Phase::Narrowing(state) => &state.candidates,
            Phase::Opening | Phase::Observed(_) | Phase::Done => &[],
        }
    }

    /// Every (guess, response) pair evaluated so far, in order
    #[must_use]
    pub fn history(&self) -> &[(Sequence, Response)] {
        &self.history
    }

    fn ask(&mut self, guess: &Sequence) -> Result<Response, Error> {
        let response = (self.evaluate)(guess)?;
        self.solver.config.check_response(response)?;
        self.history.push((guess.clone(), response));
        Ok(response)
    }

    fn open(&mut self) -> Result<Event, Error> {
        let guess = self.solver.config.random_sequence(&mut self.solver.rng);
        self.moves = 1;

        let response = self.ask(&guess)?;
        if response.is_perfect(self.solver.config.sequence_length()) {
            return Ok(self.finish(guess));
        }

        debug!("move {}: {guess} scored {response}", self.moves);
        self.moves += 1;
        self.phase = Phase::Observed(Observation {
            guess,
            response,
            previous: None,
        });
        Ok(Event::Pending)
    }

    /// Bring the candidate set up to date with `observation`
    fn apply(&mut self, observation: Observation) -> Narrowing {
        let Observation {
            guess,
            response,
            previous,
        } = observation;

        let candidates: Vec<Sequence> = match previous {
            None => {
                self.operations = self
                    .operations
                    .saturating_add(self.solver.config.universe_size());
                consistent(&self.solver.config, &guess, response).collect()
            }
            Some(mut candidates) => {
                self.operations = self
                    .operations
                    .saturating_add(candidates.len() as u128);
                candidates.retain(|candidate| Response::between(candidate, &guess) == response);
                candidates
            }
        };
        trace!("{guess} scored {response} leaves {} candidates", candidates.len());

        Narrowing {
            candidates,
            guess,
            response,
        }
    }

    fn narrow(&mut self, state: Narrowing) -> Result<Event, Error> {
        let Some(guess) = self.next_guess(&state) else {
            debug!("no candidates left after {} moves", self.moves - 1);
            return Err(Error::Contradiction);
        };

        let response = self.ask(&guess)?;
        if response.is_perfect(self.solver.config.sequence_length()) {
            return Ok(self.finish(guess));
        }

        debug!("move {}: {guess} scored {response}", self.moves);
        self.moves += 1;
        self.phase = Phase::Observed(Observation {
            guess,
            response,
            previous: Some(state.candidates),
        });
        Ok(Event::Pending)
    }

    /// Pick the next guess, or `None` if nothing is consistent any more
    fn next_guess(&mut self, state: &Narrowing) -> Option<Sequence> {
        if state.candidates.is_empty() {
            return None;
        }

        // Bet that the secret repeats across sessions. Only on the second move, and
        // only if the carried guess would have scored the same as what we observed.
        if self.moves == 2
            && let Some(carried) = &self.carried
            && Response::between(&state.guess, carried) == state.response
            && self.solver.rng.random_bool(SHORTCUT_PROBABILITY)
        {
            trace!("replaying previous answer {carried}");
            return Some(carried.clone());
        }

        state.candidates.choose(&mut self.solver.rng).cloned()
    }

    fn finish(&mut self, guess: Sequence) -> Event {
        let stats = SessionStats {
            moves: self.moves,
            operations: self.operations,
            elapsed: self.started.elapsed(),
        };
        debug!(
            "solved {guess} in {} moves, {} operations, {:.3}s",
            stats.moves,
            stats.operations,
            stats.elapsed.as_secs_f64()
        );

        self.solver.stats = Some(stats);
        self.solver.last_guess = Some(guess.clone());
        Event::Solved(guess)
    }
}

impl<R, F> Iterator for Session<'_, R, F>
where
    R: Rng,
    F: FnMut(&Sequence) -> Result<Response, Error>,
{
    type Item = Result<Event, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        // any early return leaves the session done
        let result = match std::mem::replace(&mut self.phase, Phase::Done) {
            Phase::Opening => self.open(),
            Phase::Observed(observation) => {
                let state = self.apply(observation);
                self.narrow(state)
            }
            Phase::Narrowing(state) => self.narrow(state),
            Phase::Done => return None,
        };
        Some(result)
    }
}

impl<R, F> FusedIterator for Session<'_, R, F>
where
    R: Rng,
    F: FnMut(&Sequence) -> Result<Response, Error>,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn drain<R, F>(session: Session<'_, R, F>) -> Vec<Result<Event, Error>>
    where
        R: Rng,
        F: FnMut(&Sequence) -> Result<Response, Error>,
    {
        session.collect()
    }

    #[test]
    fn events_end_with_solved() {
        let config = Config::default();
        let secret = config.parse("6152").unwrap();
        let mut solver = Solver::seeded(config.clone(), 9);

        let events = drain(solver.solve(|guess| Ok(config.score(guess, &secret)?)));
        let (last, pending) = events.split_last().unwrap();

        assert_eq!(last, &Ok(Event::Solved(secret.clone())));
        assert!(pending.iter().all(|e| e == &Ok(Event::Pending)));
        assert_eq!(events.len(), solver.stats().unwrap().moves);
    }

    #[test]
    fn two_symbol_scenario() {
        let config = Config::new(2, 3).unwrap();
        let secret = config.parse("12").unwrap();
        let mut solver = Solver::seeded(config.clone(), 0);

        let mut session = solver.solve(|guess| Ok(config.score(guess, &secret)?));
        while let Some(event) = session.next() {
            if let Event::Solved(found) = event.unwrap() {
                assert_eq!(found, secret);
            }
        }

        for (guess, response) in session.history() {
            let expected = match guess.to_string().as_str() {
                "12" => Response::new(2, 0),
                "21" => Response::new(0, 2),
                "13" | "32" => Response::new(1, 0),
                "23" | "31" => Response::new(0, 1),
                other => panic!("unexpected guess {other}"),
            };
            assert_eq!(*response, expected);
        }
        let (last, _) = session.history().last().unwrap();
        assert_eq!(last, &secret);
    }

    #[test]
    fn candidates_narrow_monotonically_and_keep_secret() {
        let config = Config::new(5, 10).unwrap();
        for seed in 0..10 {
            let secret = config.random_sequence(&mut StdRng::seed_from_u64(seed));
            let mut solver = Solver::seeded(config.clone(), seed + 100);

            let mut session = solver.solve(|guess| Ok(config.score(guess, &secret)?));
            let mut previous = usize::MAX;
            while let Some(event) = session.next() {
                match event.unwrap() {
                    Event::Pending => {
                        let candidates = session.candidates();
                        assert!(candidates.len() <= previous);
                        assert!(candidates.contains(&secret));
                        previous = candidates.len();
                    }
                    Event::Solved(found) => assert_eq!(found, secret),
                }
            }
            assert!(session.candidates().is_empty());
        }
    }

    #[test]
    fn every_candidate_matches_every_response() {
        let config = Config::default();
        let secret = config.parse("9182").unwrap();
        let mut solver = Solver::seeded(config.clone(), 21);

        let mut session = solver.solve(|guess| Ok(config.score(guess, &secret)?));
        while let Some(Ok(Event::Pending)) = session.next() {
            for candidate in &session.candidates().to_vec() {
                for (guess, response) in session.history() {
                    assert_eq!(Response::score(guess, candidate), Ok(*response));
                }
            }
        }
    }

    #[test]
    fn operations_accumulate() {
        let config = Config::default();
        let secret = config.parse("2718").unwrap();
        let mut solver = Solver::seeded(config.clone(), 4);

        let mut session = solver.solve(|guess| Ok(config.score(guess, &secret)?));
        let mut expected: u128 = 0;
        let mut before = None;
        while let Some(event) = session.next() {
            let event = event.unwrap();
            if event == Event::Pending {
                let remaining = session.candidates().len();
                expected += before.map_or(config.universe_size(), |n: usize| n as u128);
                assert_eq!(session.operations(), expected);
                before = Some(remaining);
            }
        }
        assert_eq!(solver.stats().unwrap().operations, expected);
    }

    #[test]
    fn candidates_are_built_after_pending_is_reported() {
        let config = Config::default();
        let secret = config.parse("3591").unwrap();
        let mut solver = Solver::seeded(config.clone(), 6);

        let mut session = solver.solve(|guess| Ok(config.score(guess, &secret)?));
        let Some(Ok(Event::Pending)) = session.next() else {
            return;
        };
        // nothing generated yet
        assert_eq!(session.operations(), 0);

        let generated = session.candidates().len();
        assert!(generated >= 1);
        assert_eq!(session.operations(), config.universe_size());

        // asking again does no more work
        assert_eq!(session.candidates().len(), generated);
        assert_eq!(session.operations(), config.universe_size());

        if let Some(Ok(Event::Pending)) = session.next() {
            // the second response is not applied until needed either
            assert_eq!(session.operations(), config.universe_size());
            session.candidates();
            assert_eq!(
                session.operations(),
                config.universe_size() + generated as u128
            );
        }
    }

    #[test]
    fn stopping_after_first_pending_skips_generation() {
        // a universe far too large to enumerate: stopping must not touch it
        let config = Config::new(12, 36).unwrap();
        let mut solver = Solver::seeded(config, 1);

        let mut session = solver.solve(|_| Ok(Response::new(0, 0)));
        assert_eq!(session.next(), Some(Ok(Event::Pending)));
        assert_eq!(session.operations(), 0);
        assert_eq!(session.moves(), 1);
    }

    #[test]
    fn contradiction_is_surfaced() {
        // claim one bull, then nothing at all: no sequence satisfies both
        let config = Config::new(2, 3).unwrap();
        let mut solver = Solver::seeded(config, 8);

        let mut calls = 0;
        let events = drain(solver.solve(|_| {
            calls += 1;
            Ok(if calls == 1 {
                Response::new(1, 0)
            } else {
                Response::new(0, 0)
            })
        }));

        assert_eq!(
            events,
            vec![Ok(Event::Pending), Ok(Event::Pending), Err(Error::Contradiction)]
        );
        assert!(solver.last_guess().is_none());
        assert!(solver.stats().is_none());
    }

    #[test]
    fn contradiction_after_empty_first_response() {
        // two positions, a single unused symbol: (0, 0) is impossible
        let config = Config::new(2, 3).unwrap();
        let mut solver = Solver::seeded(config, 2);

        let events = drain(solver.solve(|_| Ok(Response::new(0, 0))));
        assert_eq!(events, vec![Ok(Event::Pending), Err(Error::Contradiction)]);
    }

    #[test]
    fn session_is_fused_after_error() {
        let config = Config::default();
        let mut solver = Solver::seeded(config, 2);

        let mut session = solver.solve(|_| Err(Error::Stopped));
        assert_eq!(session.next(), Some(Err(Error::Stopped)));
        assert_eq!(session.next(), None);
        assert_eq!(session.next(), None);
        assert_eq!(session.moves(), 0);
    }

    #[test]
    fn dropped_session_keeps_carried_guess() {
        let config = Config::default();
        let carried = config.parse("1234").unwrap();
        let mut solver = Solver::seeded(config, 2);
        solver.set_last_guess(Some(carried.clone())).unwrap();

        let mut session = solver.solve(|_| Ok(Response::new(0, 2)));
        assert_eq!(session.next(), Some(Ok(Event::Pending)));
        drop(session);

        assert_eq!(solver.last_guess(), Some(&carried));
    }

    #[test]
    fn shortcut_replays_previous_answer() {
        let config = Config::default();
        let secret = config.parse("8264").unwrap();
        let mut solver = Solver::seeded(config.clone(), 1234);

        let sessions = 300;
        let mut second_move_wins = 0;
        for _ in 0..sessions {
            solver.set_last_guess(Some(secret.clone())).unwrap();
            solver.run(|guess| Ok(config.score(guess, &secret)?)).unwrap();
            if solver.stats().unwrap().moves == 2 {
                second_move_wins += 1;
            }
        }

        // about 40% expected; a plain random pick wins on move two far less often
        assert!(
            second_move_wins >= sessions / 5,
            "only {second_move_wins} of {sessions} sessions won on move two"
        );
    }

    #[test]
    fn shortcut_needs_consistent_carried_guess() {
        // the carried guess shares nothing with the secret, so whenever the opening
        // guess touches the secret the carried guess scores differently and is skipped
        let config = Config::default();
        let secret = config.parse("1234").unwrap();
        let carried = config.parse("5678").unwrap();
        let mut solver = Solver::seeded(config.clone(), 77);

        for _ in 0..50 {
            solver.set_last_guess(Some(carried.clone())).unwrap();
            let mut session = solver.solve(|guess| Ok(config.score(guess, &secret)?));
            let mut second = None;
            while let Some(event) = session.next() {
                event.unwrap();
                if session.moves() == 2 && second.is_none() {
                    second = Some(session.history()[1].0.clone());
                }
            }

            let (opening, observed) = session.history()[0].clone();
            if Response::score(&opening, &carried).unwrap() != observed {
                assert_ne!(second.as_ref(), Some(&carried));
            }
        }
    }

    #[test]
    fn no_shortcut_without_history() {
        let config = Config::new(3, 5).unwrap();
        let secret = config.parse("135").unwrap();

        for seed in 0..30 {
            let mut solver = Solver::seeded(config.clone(), seed);
            assert!(solver.last_guess().is_none());

            let mut session = solver.solve(|guess| Ok(config.score(guess, &secret)?));
            let Some(Ok(Event::Pending)) = session.next() else {
                continue;
            };
            let candidates = session.candidates().to_vec();
            session.next().unwrap().unwrap();

            // the second guess always comes from the candidate set
            assert!(candidates.contains(&session.history()[1].0));
        }
    }
}
