use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IsingError {
    #[error("Invalid lattice size {0}: must be at least 1")]
    InvalidSize(usize),

    #[error("Invalid inverse temperature {0}: must be positive and finite")]
    InvalidBeta(f64),

    #[error("Invalid beta range {min}..={max} step {step}: {reason}")]
    InvalidBetaRange {
        min: f64,
        max: f64,
        step: f64,
        reason: &'static str,
    },

    #[error("Invalid spin value {value} at site {index}: must be +1 or -1")]
    InvalidSpin { index: usize, value: i8 },

    #[error("Spin buffer has {actual} entries, expected {expected} for the lattice size")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("Scan has no beta values")]
    EmptyScan,

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error on '{}': {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl IsingError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type IsingResult<T> = Result<T, IsingError>;
