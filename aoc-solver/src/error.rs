//! Errors raised while registering, parsing and solving puzzles

use thiserror::Error;

/// The puzzle text could not be turned into a solver's shared data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Text is present but does not follow the puzzle's format
    #[error("malformed input: {0}")]
    InvalidFormat(String),
    /// A section the puzzle requires is absent
    #[error("incomplete input: {0}")]
    MissingData(String),
    #[error("unparseable input: {0}")]
    Other(String),
}

/// A parsed input could not produce an answer for a part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The solver declares the part but has no implementation for it
    #[error("part {0} has no implementation")]
    PartNotImplemented(u8),
    /// Part 0, or a part above the solver's `PARTS`
    #[error("part {0} does not exist for this puzzle")]
    PartOutOfRange(u8),
    /// The input is well formed but has no valid answer
    #[error("no answer: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// [`SolveError::SolveFailed`] carrying a plain message
    pub fn failed(message: impl Into<String>) -> Self {
        let message: String = message.into();
        Self::SolveFailed(message.into())
    }
}

/// Anything that can go wrong between a (year, day) lookup and an answer
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("no solver registered for {0}/{1:02}")]
    NotFound(u16, u8),
    #[error("{0}/{1:02} is not a valid puzzle date")]
    InvalidYearDay(u16, u8),
    #[error(transparent)]
    ParseError(#[from] ParseError),
    #[error(transparent)]
    SolveError(#[from] SolveError),
}

/// Rejected registry entry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("{0}/{1:02} already has a solver")]
    DuplicateSolver(u16, u8),
    #[error("cannot register a solver for {0}/{1:02}: not a valid puzzle date")]
    InvalidYearDay(u16, u8),
}
