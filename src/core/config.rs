//! Game configuration
//!
//! Holds the sequence length and the alphabet every sequence is drawn from.

use super::combinatorics::{arrangements, count};
use super::response::{Response, ResponseError};
use super::sequence::{Sequence, SequenceError};
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

/// Every symbol a configuration can use, in alphabet order
pub const MASTER_ALPHABET: &[u8; 36] = b"1234567890ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Sequence length used when none is given
pub const DEFAULT_SEQUENCE_LENGTH: usize = 4;

/// Alphabet size used when none is given
pub const DEFAULT_ALPHABET_SIZE: usize = 9;

/// Validated game configuration
///
/// Invariant: `2 <= sequence_length <= alphabet_size <= 36`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    sequence_length: usize,
    alphabet: &'static [u8],
}

/// Error type for invalid configurations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Sequences must have at least two symbols
    TooShort(usize),
    /// Distinct symbols cannot fill a sequence longer than the alphabet
    LongerThanAlphabet {
        sequence_length: usize,
        alphabet_size: usize,
    },
    /// The master alphabet has 36 symbols
    AlphabetTooLarge(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort(len) => {
                write!(f, "Sequence length must be at least 2, got {len}")
            }
            Self::LongerThanAlphabet {
                sequence_length,
                alphabet_size,
            } => write!(
                f,
                "Sequence length {sequence_length} must not exceed alphabet size {alphabet_size}"
            ),
            Self::AlphabetTooLarge(size) => write!(
                f,
                "The largest supported alphabet is 1-9, 0, A-Z (36 symbols), got {size}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Create a configuration of `sequence_length`-symbol sequences over the first
    /// `alphabet_size` symbols of [`MASTER_ALPHABET`]
    ///
    /// # Errors
    /// Returns `ConfigError` if:
    /// - `sequence_length < 2`
    /// - `sequence_length > alphabet_size`
    /// - `alphabet_size > 36`
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::Config;
    ///
    /// let config = Config::new(4, 12).unwrap();
    /// assert_eq!(config.alphabet(), b"1234567890AB");
    ///
    /// assert!(Config::new(1, 9).is_err());
    /// assert!(Config::new(5, 4).is_err());
    /// assert!(Config::new(4, 37).is_err());
    /// ```
    pub fn new(sequence_length: usize, alphabet_size: usize) -> Result<Self, ConfigError> {
        if sequence_length < 2 {
            return Err(ConfigError::TooShort(sequence_length));
        }
        if sequence_length > alphabet_size {
            return Err(ConfigError::LongerThanAlphabet {
                sequence_length,
                alphabet_size,
            });
        }
        if alphabet_size > MASTER_ALPHABET.len() {
            return Err(ConfigError::AlphabetTooLarge(alphabet_size));
        }

        Ok(Self {
            sequence_length,
            alphabet: &MASTER_ALPHABET[..alphabet_size],
        })
    }

    #[inline]
    #[must_use]
    pub const fn sequence_length(&self) -> usize {
        self.sequence_length
    }

    #[inline]
    #[must_use]
    pub const fn alphabet_size(&self) -> usize {
        self.alphabet.len()
    }

    /// The ordered alphabet symbols
    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> &'static [u8] {
        self.alphabet
    }

    /// Number of valid sequences (the universe)
    ///
    /// Saturates at `u128::MAX` for the largest alphabets.
    #[must_use]
    pub fn universe_size(&self) -> u128 {
        count(self.alphabet_size(), self.sequence_length)
    }

    /// Parse and validate a sequence for this configuration
    ///
    /// # Errors
    /// Returns `SequenceError` on wrong length, unknown symbols, or repeated symbols.
    pub fn parse(&self, text: &str) -> Result<Sequence, SequenceError> {
        Sequence::parse(text, self.sequence_length, self.alphabet)
    }

    /// Score `guess` against `reference`, checking both belong to this configuration
    ///
    /// # Errors
    /// Returns `SequenceError::InvalidLength` if either sequence has the wrong length.
    pub fn score(&self, guess: &Sequence, reference: &Sequence) -> Result<Response, SequenceError> {
        self.check_length(guess)?;
        self.check_length(reference)?;
        Ok(Response::between(guess, reference))
    }

    pub(crate) fn check_length(&self, sequence: &Sequence) -> Result<(), SequenceError> {
        if sequence.len() == self.sequence_length {
            Ok(())
        } else {
            Err(SequenceError::InvalidLength {
                expected: self.sequence_length,
                actual: sequence.len(),
            })
        }
    }

    /// Check `sequence` could have come from [`Config::parse`] on this configuration
    ///
    /// # Errors
    /// Returns `SequenceError::InvalidLength` or `SequenceError::UnknownSymbol`.
    pub fn check_sequence(&self, sequence: &Sequence) -> Result<(), SequenceError> {
        self.check_length(sequence)?;
        match sequence
            .symbols()
            .iter()
            .find(|&&symbol| !self.alphabet.contains(&symbol))
        {
            Some(&symbol) => Err(SequenceError::UnknownSymbol(char::from(symbol))),
            None => Ok(()),
        }
    }

    /// Reject responses no secret could produce
    ///
    /// A response is impossible when bulls plus cows exceed the sequence length, or
    /// when they fill it with exactly one cow: a single misplaced symbol with every
    /// other position a bull has nowhere else to go.
    ///
    /// # Errors
    /// Returns `ResponseError` describing the impossibility.
    pub fn check_response(&self, response: Response) -> Result<(), ResponseError> {
        let total = response.total();
        if total > self.sequence_length {
            return Err(ResponseError::TooMany {
                bulls: response.bulls(),
                cows: response.cows(),
                sequence_length: self.sequence_length,
            });
        }
        if total == self.sequence_length && response.cows() == 1 {
            return Err(ResponseError::LoneCow {
                bulls: response.bulls(),
                sequence_length: self.sequence_length,
            });
        }
        Ok(())
    }

    /// Every response that can occur for this sequence length
    pub fn responses(&self) -> impl Iterator<Item = Response> + '_ {
        let len = self.sequence_length as u8;
        (0..=len)
            .flat_map(move |bulls| (0..=len - bulls).map(move |cows| Response::new(bulls, cows)))
            .filter(|&response| self.check_response(response).is_ok())
    }

    /// A uniformly random sequence
    pub fn random_sequence<R: Rng + ?Sized>(&self, rng: &mut R) -> Sequence {
        let mut pool = self.alphabet.to_vec();
        let (chosen, _) = pool.partial_shuffle(rng, self.sequence_length);
        Sequence::from_symbols(chosen.to_vec())
    }

    /// Every valid sequence, lazily, in alphabet order of the chosen symbol sets
    pub fn sequences(&self) -> impl Iterator<Item = Sequence> + '_ {
        arrangements(self.alphabet.iter().copied(), self.sequence_length).map(Sequence::from_symbols)
    }
}

impl Default for Config {
    /// Four symbols from 1-9
    fn default() -> Self {
        Self {
            sequence_length: DEFAULT_SEQUENCE_LENGTH,
            alphabet: &MASTER_ALPHABET[..DEFAULT_ALPHABET_SIZE],
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-symbol sequences from ({})",
            self.sequence_length,
            String::from_utf8_lossy(self.alphabet)
        )
    }
}
