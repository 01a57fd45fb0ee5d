//! Bulls and Cows sequence representation
//!
//! A Sequence is an ordered run of distinct alphabet symbols. It is used for the
//! hidden secret as well as for every guess and candidate.

use std::fmt;

/// An ordered sequence of distinct symbols
///
/// Symbols are stored as ASCII bytes drawn from the configured alphabet. Values of
/// this type are only produced by [`Config::parse`](super::Config::parse) or by the
/// solver internals, so every `Sequence` has distinct, in-alphabet symbols.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sequence {
    symbols: Vec<u8>,
}

/// Error type for invalid sequences
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// The text does not have the configured number of symbols
    InvalidLength { expected: usize, actual: usize },
    /// A symbol outside the configured alphabet
    UnknownSymbol(char),
    /// A symbol that occurs more than once
    RepeatedSymbol(char),
    /// Two sequences of different length were compared
    LengthMismatch { guess: usize, reference: usize },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "Sequence must be exactly {expected} symbols, got {actual}")
            }
            Self::UnknownSymbol(symbol) => write!(f, "Symbol '{symbol}' is not in the alphabet"),
            Self::RepeatedSymbol(symbol) => write!(f, "Symbol '{symbol}' appears more than once"),
            Self::LengthMismatch { guess, reference } => write!(
                f,
                "Cannot compare a sequence of {guess} symbols with one of {reference}"
            ),
        }
    }
}

impl std::error::Error for SequenceError {}

impl Sequence {
    /// Validate `text` against `alphabet` and build a sequence of `length` symbols
    ///
    /// Input is upper-cased first, so `"a1b2"` and `"A1B2"` are the same sequence.
    pub(crate) fn parse(text: &str, length: usize, alphabet: &[u8]) -> Result<Self, SequenceError> {
        let text = text.trim().to_uppercase();

        let count = text.chars().count();
        if count != length {
            return Err(SequenceError::InvalidLength {
                expected: length,
                actual: count,
            });
        }

        let mut symbols = Vec::with_capacity(length);
        for ch in text.chars() {
            let symbol = u8::try_from(ch)
                .ok()
                .filter(|byte| alphabet.contains(byte))
                .ok_or(SequenceError::UnknownSymbol(ch))?;
            if symbols.contains(&symbol) {
                return Err(SequenceError::RepeatedSymbol(ch));
            }
            symbols.push(symbol);
        }

        Ok(Self { symbols })
    }

    /// Wrap symbols that are already known to be distinct alphabet members
    pub(crate) fn from_symbols(symbols: Vec<u8>) -> Self {
        debug_assert!(
            symbols
                .iter()
                .enumerate()
                .all(|(i, s)| !symbols[i + 1..].contains(s)),
            "sequence symbols must be distinct"
        );
        Self { symbols }
    }

    /// Get the symbols as bytes
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Number of symbols
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for sequences built through a configuration
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Check if the sequence contains a specific symbol
    #[inline]
    #[must_use]
    pub fn contains(&self, symbol: u8) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Position of a symbol, if present
    #[inline]
    #[must_use]
    pub fn position_of(&self, symbol: u8) -> Option<usize> {
        self.symbols.iter().position(|&s| s == symbol)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &symbol in &self.symbols {
            write!(f, "{}", char::from(symbol))?;
        }
        Ok(())
    }
}
