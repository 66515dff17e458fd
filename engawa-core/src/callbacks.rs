//! Pairwise-computation capability consumed by embedding backends.
//!
//! A [`CallbackSet`] supplies the three operations every backend is
//! written against: a pairwise kernel value, a pairwise distance, and a
//! feature-vector lookup. How the values are produced — recomputed on
//! demand or read from matrices materialized up front — is invisible to
//! the consumer.

use nalgebra::DVectorView;
use thiserror::Error;

/// An error produced by [`CallbackSet`] operations.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum CallbackError {
    /// Requested sample index was outside the dataset bounds.
    #[error("sample index {index} is out of bounds")]
    OutOfBounds {
        /// The offending index.
        index: usize,
    },
    /// The precomputed strategy skipped this matrix because the selected
    /// method never asked for it.
    #[error("the {matrix} matrix was not materialized for this run")]
    NotMaterialized {
        /// Which pairwise matrix was missing (`distance` or `kernel`).
        matrix: &'static str,
    },
}

impl CallbackError {
    /// Stable machine-readable code for structured logs.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "CALLBACK_OUT_OF_BOUNDS",
            Self::NotMaterialized { .. } => "CALLBACK_NOT_MATERIALIZED",
        }
    }
}

/// The kernel/distance/feature-vector capability of a dataset.
///
/// Implementations must agree with each other on indexing: index `i`
/// always refers to sample `i` of the same dataset across all three
/// operations.
///
/// # Examples
/// ```
/// use engawa_core::{CallbackError, CallbackSet};
/// use nalgebra::{DMatrix, DVectorView};
///
/// struct Columns(DMatrix<f64>);
///
/// impl CallbackSet for Columns {
///     fn sample_count(&self) -> usize {
///         self.0.ncols()
///     }
///     fn kernel(&self, i: usize, j: usize) -> Result<f64, CallbackError> {
///         Ok(self.0.column(i).dot(&self.0.column(j)))
///     }
///     fn distance(&self, i: usize, j: usize) -> Result<f64, CallbackError> {
///         Ok((self.0.column(i) - self.0.column(j)).norm())
///     }
///     fn vector(&self, i: usize) -> Result<DVectorView<'_, f64>, CallbackError> {
///         Ok(self.0.column(i))
///     }
/// }
///
/// let set = Columns(DMatrix::from_column_slice(2, 2, &[0.0, 0.0, 3.0, 4.0]));
/// assert_eq!(set.distance(0, 1)?, 5.0);
/// assert_eq!(set.kernel(1, 1)?, 25.0);
/// # Ok::<(), CallbackError>(())
/// ```
pub trait CallbackSet {
    /// Number of samples the callbacks cover.
    fn sample_count(&self) -> usize;

    /// Kernel value between samples `i` and `j`.
    ///
    /// # Errors
    /// Returns [`CallbackError::OutOfBounds`] for an invalid index;
    /// precomputed implementations additionally return
    /// [`CallbackError::NotMaterialized`] when the kernel matrix was
    /// skipped.
    fn kernel(&self, i: usize, j: usize) -> Result<f64, CallbackError>;

    /// Distance between samples `i` and `j`.
    ///
    /// # Errors
    /// Same classes as [`CallbackSet::kernel`].
    fn distance(&self, i: usize, j: usize) -> Result<f64, CallbackError>;

    /// Read-only view of the feature vector of sample `i`.
    ///
    /// # Errors
    /// Returns [`CallbackError::OutOfBounds`] for an invalid index.
    fn vector(&self, i: usize) -> Result<DVectorView<'_, f64>, CallbackError>;
}
