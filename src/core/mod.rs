//! Core domain types for Bulls and Cows
//!
//! Configuration, sequences, response scoring, counting, and candidate generation.
//! Everything here is pure and deterministic apart from `Config::random_sequence`,
//! which takes its randomness from the caller.

pub mod combinatorics;
mod config;
mod error;
mod generator;
mod response;
mod sequence;

pub use config::{
    Config, ConfigError, DEFAULT_ALPHABET_SIZE, DEFAULT_SEQUENCE_LENGTH, MASTER_ALPHABET,
};
pub use error::Error;
pub use generator::generate;
pub(crate) use generator::consistent;
pub use response::{Response, ResponseError};
pub use sequence::{Sequence, SequenceError};
