//! Bulls and Cows response scoring and representation
//!
//! A response counts bulls (right symbol, right position) and cows (right symbol,
//! wrong position) of a guess measured against a reference sequence.

use super::sequence::{Sequence, SequenceError};
use std::fmt;

/// Feedback for one guess
///
/// Both components are unsigned, so negative counts cannot be represented.
/// Whether a response is possible for a given sequence length is checked by
/// [`Config::check_response`](super::Config::check_response).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Response {
    bulls: u8,
    cows: u8,
}

/// Error type for responses that cannot occur for the configured length
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseError {
    /// More bulls and cows than the sequence has positions
    TooMany {
        bulls: u8,
        cows: u8,
        sequence_length: usize,
    },
    /// Every position accounted for with exactly one cow, which no secret can produce
    LoneCow { bulls: u8, sequence_length: usize },
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooMany {
                bulls,
                cows,
                sequence_length,
            } => write!(
                f,
                "{bulls} bulls and {cows} cows exceed the sequence length {sequence_length}"
            ),
            Self::LoneCow {
                bulls,
                sequence_length,
            } => write!(
                f,
                "{bulls} bulls and 1 cow is impossible for sequences of length {sequence_length}"
            ),
        }
    }
}

impl std::error::Error for ResponseError {}

impl Response {
    /// Create a response from raw counts
    #[inline]
    #[must_use]
    pub const fn new(bulls: u8, cows: u8) -> Self {
        Self { bulls, cows }
    }

    /// The winning response for sequences of `length` symbols
    ///
    /// # Panics
    /// Panics in debug mode if `length` does not fit in a `u8`
    #[inline]
    #[must_use]
    pub fn perfect(length: usize) -> Self {
        debug_assert!(length <= usize::from(u8::MAX));
        Self::new(length as u8, 0)
    }

    /// Number of bulls
    #[inline]
    #[must_use]
    pub const fn bulls(self) -> u8 {
        self.bulls
    }

    /// Number of cows
    #[inline]
    #[must_use]
    pub const fn cows(self) -> u8 {
        self.cows
    }

    /// Bulls plus cows
    #[inline]
    #[must_use]
    pub fn total(self) -> usize {
        usize::from(self.bulls) + usize::from(self.cows)
    }

    /// Check if every position is a bull
    #[inline]
    #[must_use]
    pub fn is_perfect(self, length: usize) -> bool {
        usize::from(self.bulls) == length
    }

    /// Score `guess` against `reference`
    ///
    /// For each guess symbol: a bull if the reference holds it at the same position,
    /// a cow if the reference holds it elsewhere. Sequences never repeat a symbol, so
    /// a single pass is enough.
    ///
    /// # Errors
    /// Returns `SequenceError::LengthMismatch` if the sequences differ in length.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::{Config, Response};
    ///
    /// let config = Config::new(4, 9).unwrap();
    /// let secret = config.parse("1234").unwrap();
    /// let guess = config.parse("1325").unwrap();
    ///
    /// // 1 is a bull, 3 and 2 are cows, 5 is absent
    /// assert_eq!(Response::score(&guess, &secret), Ok(Response::new(1, 2)));
    /// ```
    pub fn score(guess: &Sequence, reference: &Sequence) -> Result<Self, SequenceError> {
        if guess.len() != reference.len() {
            return Err(SequenceError::LengthMismatch {
                guess: guess.len(),
                reference: reference.len(),
            });
        }
        Ok(Self::between(guess, reference))
    }

    /// Score two sequences already known to have the same length
    pub(crate) fn between(guess: &Sequence, reference: &Sequence) -> Self {
        debug_assert_eq!(guess.len(), reference.len());

        let mut bulls = 0;
        let mut cows = 0;
        for (position, &symbol) in guess.symbols().iter().enumerate() {
            match reference.position_of(symbol) {
                Some(found) if found == position => bulls += 1,
                Some(_) => cows += 1,
                None => {}
            }
        }

        Self { bulls, cows }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}B {}C", self.bulls, self.cows)
    }
}

impl std::str::FromStr for Response {
    type Err = String;

    /// Parse `"1 2"`, `"1,2"`, `"1/2"`, `"1b2c"` or `"2C 1B"`
    ///
    /// Unlabelled counts are read as bulls then cows. Labelled counts go where their
    /// label says, and either both counts are labelled or neither is.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut counts: Vec<(u8, Option<char>)> = Vec::with_capacity(2);
        let mut chars = s.chars().peekable();

        while let Some(&c) = chars.peek() {
            if c.is_ascii_digit() {
                let mut digits = String::new();
                while let Some(&d) = chars.peek().filter(|d| d.is_ascii_digit()) {
                    digits.push(d);
                    chars.next();
                }
                let count = digits
                    .parse()
                    .map_err(|e| format!("Invalid count '{digits}' in '{s}': {e}"))?;
                counts.push((count, None));
            } else if c.is_whitespace() || c == ',' || c == '/' {
                chars.next();
            } else {
                let label = c.to_ascii_uppercase();
                match counts.last_mut() {
                    Some((_, slot @ None)) if label == 'B' || label == 'C' => {
                        *slot = Some(label);
                    }
                    _ => return Err(format!("Unexpected '{c}' in response string: {s}")),
                }
                chars.next();
            }
        }

        match counts.as_slice() {
            [(bulls, None), (cows, None)]
            | [(bulls, Some('B')), (cows, Some('C'))]
            | [(cows, Some('C')), (bulls, Some('B'))] => Ok(Self::new(*bulls, *cows)),
            _ => Err(format!("Invalid response string: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn seq(config: &Config, text: &str) -> Sequence {
        config.parse(text).unwrap()
    }

    #[test]
    fn response_perfect() {
        assert_eq!(Response::perfect(4), Response::new(4, 0));
        assert!(Response::perfect(4).is_perfect(4));
        assert!(!Response::new(3, 0).is_perfect(4));
        assert!(!Response::new(2, 2).is_perfect(4));
    }

    #[test]
    fn response_all_absent() {
        let config = Config::new(4, 9).unwrap();
        let response = Response::score(&seq(&config, "1234"), &seq(&config, "5678")).unwrap();
        assert_eq!(response, Response::new(0, 0));
        assert_eq!(response.total(), 0);
    }

    #[test]
    fn response_all_cows() {
        let config = Config::new(4, 9).unwrap();
        let response = Response::score(&seq(&config, "1234"), &seq(&config, "4321")).unwrap();
        assert_eq!(response, Response::new(0, 4));
    }

    #[test]
    fn response_mixed() {
        let config = Config::new(4, 9).unwrap();
        // 1 and 9 bulls, 7 cow, 2 absent
        let response = Response::score(&seq(&config, "1729"), &seq(&config, "1879")).unwrap();
        assert_eq!(response, Response::new(2, 1));
    }

    #[test]
    fn response_two_symbol_scenario() {
        let config = Config::new(2, 3).unwrap();
        let secret = seq(&config, "12");

        assert_eq!(
            Response::score(&seq(&config, "13"), &secret),
            Ok(Response::new(1, 0))
        );
        assert_eq!(
            Response::score(&seq(&config, "21"), &secret),
            Ok(Response::new(0, 2))
        );
        assert_eq!(Response::score(&secret, &secret), Ok(Response::perfect(2)));
    }

    #[test]
    fn response_length_mismatch() {
        let short = Config::new(3, 9).unwrap();
        let long = Config::new(4, 9).unwrap();
        assert_eq!(
            Response::score(&seq(&short, "123"), &seq(&long, "1234")),
            Err(SequenceError::LengthMismatch {
                guess: 3,
                reference: 4
            })
        );
    }

    #[test]
    fn response_from_str_valid() {
        let expected = Response::new(1, 2);
        assert_eq!("1 2".parse(), Ok(expected));
        assert_eq!("1,2".parse(), Ok(expected));
        assert_eq!(" 1 / 2 ".parse(), Ok(expected));
        assert_eq!("1b2c".parse(), Ok(expected));
        assert_eq!("10 0".parse(), Ok(Response::new(10, 0)));
        assert_eq!("1B 2C".parse(), Ok(expected));
        assert_eq!(expected.to_string().parse(), Ok(expected));
    }

    #[test]
    fn response_from_str_honors_labels() {
        assert_eq!("2c1b".parse(), Ok(Response::new(1, 2)));
        assert_eq!("0C, 3B".parse(), Ok(Response::new(3, 0)));
    }

    #[test]
    fn response_from_str_invalid() {
        assert!("".parse::<Response>().is_err());
        assert!("1".parse::<Response>().is_err());
        assert!("1 2 3".parse::<Response>().is_err());
        assert!("bulls".parse::<Response>().is_err());
        assert!("300 1".parse::<Response>().is_err());
        // negative counts
        assert!("-1 2".parse::<Response>().is_err());
        assert!("1 -2".parse::<Response>().is_err());
        // labels must be one of each, on both counts or neither
        assert!("1b2b".parse::<Response>().is_err());
        assert!("1b 2".parse::<Response>().is_err());
        assert!("1 2c".parse::<Response>().is_err());
        assert!("b1c2".parse::<Response>().is_err());
        assert!("1x2y".parse::<Response>().is_err());
    }

    #[test]
    fn response_display() {
        assert_eq!(Response::new(2, 1).to_string(), "2B 1C");
    }

    fn config_and_pair() -> impl Strategy<Value = (Config, Sequence, Sequence)> {
        (2usize..=8, 0usize..=6, any::<u64>()).prop_map(|(length, extra, seed)| {
            let config = Config::new(length, length + extra).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            let guess = config.random_sequence(&mut rng);
            let reference = config.random_sequence(&mut rng);
            (config, guess, reference)
        })
    }

    proptest! {
        #[test]
        fn self_score_is_perfect((config, guess, _reference) in config_and_pair()) {
            prop_assert_eq!(
                Response::score(&guess, &guess),
                Ok(Response::perfect(config.sequence_length()))
            );
        }

        #[test]
        fn response_is_bounded((config, guess, reference) in config_and_pair()) {
            let response = Response::score(&guess, &reference).unwrap();
            prop_assert!(response.total() <= config.sequence_length());
            prop_assert!(config.check_response(response).is_ok());
            // distinct symbols make scoring symmetric
            prop_assert_eq!(Response::score(&reference, &guess), Ok(response));
        }
    }
}
