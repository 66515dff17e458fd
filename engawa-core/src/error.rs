//! Error types raised while invoking an embedding backend.

use thiserror::Error;

use crate::callbacks::CallbackError;

/// Error type produced by [`crate::Reducer::embed`] and by backends.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum EmbedError {
    /// The backend returned a coordinate matrix of the wrong shape.
    #[error(
        "backend returned a {rows}x{cols} coordinate matrix, expected {expected_rows}x{expected_cols}"
    )]
    ShapeMismatch {
        /// Rows the invoker expected (the target dimension).
        expected_rows: usize,
        /// Columns the invoker expected (the sample count).
        expected_cols: usize,
        /// Rows the backend actually produced.
        rows: usize,
        /// Columns the backend actually produced.
        cols: usize,
    },
    /// A callback failed while the backend was running.
    #[error("callback failure: {0}")]
    Callback(#[from] CallbackError),
    /// The cancellation hook requested an early abort.
    #[error("embedding cancelled by the cancellation hook")]
    Cancelled,
}

impl EmbedError {
    /// Stable machine-readable code for structured logs.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ShapeMismatch { .. } => "EMBED_SHAPE_MISMATCH",
            Self::Callback(error) => error.code(),
            Self::Cancelled => "EMBED_CANCELLED",
        }
    }
}
