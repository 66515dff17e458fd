//! On-demand pairwise computation over a borrowed dense matrix.

use engawa_core::{CallbackError, CallbackSet};
use nalgebra::{DMatrix, DVectorView};

/// Computes every pairwise value directly from the dataset columns.
///
/// No memory beyond the borrowed matrix is used; a value requested twice
/// is computed twice. The distance is Euclidean and the kernel is the
/// linear (dot-product) kernel, both over matrix columns.
///
/// # Examples
/// ```
/// use engawa_core::CallbackSet;
/// use engawa_providers_dense::LazyCallbacks;
/// use nalgebra::DMatrix;
///
/// let data = DMatrix::from_column_slice(2, 2, &[0.0, 0.0, 3.0, 4.0]);
/// let callbacks = LazyCallbacks::new(&data);
/// assert_eq!(callbacks.distance(0, 1)?, 5.0);
/// assert_eq!(callbacks.kernel(1, 1)?, 25.0);
/// # Ok::<(), engawa_core::CallbackError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct LazyCallbacks<'a> {
    data: &'a DMatrix<f64>,
}

impl<'a> LazyCallbacks<'a> {
    /// Borrows `data`; columns are samples.
    #[must_use]
    pub const fn new(data: &'a DMatrix<f64>) -> Self {
        Self { data }
    }

    fn check(&self, index: usize) -> Result<(), CallbackError> {
        if index < self.data.ncols() {
            Ok(())
        } else {
            Err(CallbackError::OutOfBounds { index })
        }
    }
}

impl CallbackSet for LazyCallbacks<'_> {
    fn sample_count(&self) -> usize {
        self.data.ncols()
    }

    fn kernel(&self, i: usize, j: usize) -> Result<f64, CallbackError> {
        self.check(i)?;
        self.check(j)?;
        Ok(self.data.column(i).dot(&self.data.column(j)))
    }

    fn distance(&self, i: usize, j: usize) -> Result<f64, CallbackError> {
        self.check(i)?;
        self.check(j)?;
        Ok((self.data.column(i) - self.data.column(j)).norm())
    }

    fn vector(&self, i: usize) -> Result<DVectorView<'_, f64>, CallbackError> {
        self.check(i)?;
        Ok(self.data.column(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn sample_data() -> DMatrix<f64> {
        DMatrix::from_column_slice(3, 3, &[0.0, 0.0, 0.0, 1.0, 2.0, 2.0, 3.0, 0.0, 4.0])
    }

    #[test]
    fn distance_is_euclidean_over_columns() {
        let data = sample_data();
        let callbacks = LazyCallbacks::new(&data);
        assert_relative_eq!(
            callbacks.distance(0, 1).expect("indices are valid"),
            3.0,
        );
        assert_relative_eq!(
            callbacks.distance(0, 2).expect("indices are valid"),
            5.0,
        );
    }

    #[test]
    fn kernel_is_the_column_dot_product() {
        let data = sample_data();
        let callbacks = LazyCallbacks::new(&data);
        assert_relative_eq!(callbacks.kernel(1, 2).expect("indices are valid"), 11.0);
        assert_relative_eq!(callbacks.kernel(1, 1).expect("indices are valid"), 9.0);
    }

    #[test]
    fn vector_returns_the_sample_column() {
        let data = sample_data();
        let callbacks = LazyCallbacks::new(&data);
        let column = callbacks.vector(2).expect("index is valid");
        assert_eq!(column.as_slice(), &[3.0, 0.0, 4.0]);
    }

    #[test]
    fn out_of_bounds_indices_are_rejected() {
        let data = sample_data();
        let callbacks = LazyCallbacks::new(&data);
        assert_eq!(callbacks.sample_count(), 3);
        let err = callbacks.distance(0, 3).expect_err("index 3 is out of bounds");
        assert_eq!(err, CallbackError::OutOfBounds { index: 3 });
        assert!(callbacks.vector(9).is_err());
    }
}
