//! Error types for the MDVRP genetic algorithm.

use std::fmt;

/// Errors raised by the solver and its collaborators.
///
/// `InvalidInput` and `InvalidChromosome` are programmer-input errors and are
/// never retried. `Io` and `Parse` only come from instance loading.
#[derive(Debug)]
pub enum Error {
    /// Malformed configuration, empty customer/depot sequences or a parent too short for crossover.
    InvalidInput(String),
    /// A chromosome is not a permutation of the customer universe.
    InvalidChromosome(String),
    /// Reading or writing a file failed.
    Io(std::io::Error),
    /// An instance or result file is not valid JSON for the expected shape.
    Parse(serde_json::Error),
}

/// A type alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    pub(crate) fn invalid_chromosome(msg: impl Into<String>) -> Self {
        Error::InvalidChromosome(msg.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            Error::InvalidChromosome(msg) => write!(f, "invalid chromosome: {}", msg),
            Error::Io(err) => write!(f, "i/o error: {}", err),
            Error::Parse(err) => write!(f, "parse error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err)
    }
}
