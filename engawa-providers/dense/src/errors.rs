//! Error types for dense text-matrix loading.

use thiserror::Error;

/// Errors raised while loading a dense text matrix.
#[derive(Debug, Error)]
pub enum DenseLoadError {
    /// The input held no numeric rows at all.
    #[error("input contains no numeric rows")]
    EmptyInput,
    /// A row's value count disagreed with the first row.
    #[error("line {line} has {got} values but {expected} were expected")]
    RaggedRow {
        /// One-based line number of the offending row.
        line: usize,
        /// Column count established by the first row.
        expected: usize,
        /// Column count actually found.
        got: usize,
    },
    /// A token could not be parsed as a floating-point number.
    #[error("line {line}: could not parse `{token}` as a number")]
    InvalidToken {
        /// One-based line number of the offending token.
        line: usize,
        /// The raw token text.
        token: String,
    },
    /// Reading from the underlying stream failed.
    #[error("i/o error while reading the matrix: {0}")]
    Io(#[from] std::io::Error),
}

impl DenseLoadError {
    /// Stable machine-readable code for structured logs.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "DENSE_EMPTY_INPUT",
            Self::RaggedRow { .. } => "DENSE_RAGGED_ROW",
            Self::InvalidToken { .. } => "DENSE_INVALID_TOKEN",
            Self::Io(_) => "DENSE_IO_FAILURE",
        }
    }
}
