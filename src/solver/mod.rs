//! Bulls and Cows solving engine
//!
//! A [`Solver`] owns the configuration and randomness; each call to
//! [`Solver::solve`] starts a [`Session`] that yields one [`Event`] per guess.

mod engine;
mod session;

pub use engine::{SessionStats, Solver};
pub use session::{Event, SHORTCUT_PROBABILITY, Session};
