//! Error types for the CLI

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),
}

/// Failure to load an input file
#[derive(Error, Debug)]
pub enum InputError {
    /// The expected file does not exist
    #[error("input file not found: {}", .path.display())]
    Missing { path: PathBuf },

    /// The file exists but could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a single part produced no answer
///
/// Shared behind `Arc` so one failed load or parse can be reported against
/// every part that needed it.
#[derive(Error, Debug, Clone)]
pub enum ExecutorError {
    /// Input could not be loaded
    #[error("{year}/{day:02}: {source}")]
    Input {
        year: u16,
        day: u8,
        #[source]
        source: Arc<InputError>,
    },

    /// Solver lookup, parsing or solving failed
    #[error(transparent)]
    Solver(Arc<aoc_solver::SolverError>),
}

impl From<aoc_solver::SolverError> for ExecutorError {
    fn from(error: aoc_solver::SolverError) -> Self {
        Self::Solver(Arc::new(error))
    }
}
