//! Error taxonomy shared by the generator and the solver

use super::config::ConfigError;
use super::response::ResponseError;
use super::sequence::SequenceError;
use std::fmt;

/// Any failure surfaced by the solving engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid length or alphabet size
    Config(ConfigError),
    /// A guess or reference with the wrong shape
    Sequence(SequenceError),
    /// A response no secret could produce
    Response(ResponseError),
    /// No candidate is consistent with every response received so far
    ///
    /// Some earlier response was wrong. Fatal to the session.
    Contradiction,
    /// The evaluate callback asked the session to stop
    Stopped,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Invalid configuration: {e}"),
            Self::Sequence(e) => write!(f, "Invalid sequence: {e}"),
            Self::Response(e) => write!(f, "Invalid response: {e}"),
            Self::Contradiction => write!(
                f,
                "There are mistakes in the given responses: no sequence matches all of them"
            ),
            Self::Stopped => write!(f, "Solving was stopped"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Sequence(e) => Some(e),
            Self::Response(e) => Some(e),
            Self::Contradiction | Self::Stopped => None,
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<SequenceError> for Error {
    fn from(e: SequenceError) -> Self {
        Self::Sequence(e)
    }
}

impl From<ResponseError> for Error {
    fn from(e: ResponseError) -> Self {
        Self::Response(e)
    }
}
