//! Upfront materialization of pairwise matrices for O(1) lookups.

use engawa_core::{CallbackError, CallbackSet};
use nalgebra::{DMatrix, DVectorView};
use tracing::info_span;

/// Materializes the pairwise matrices a method needs before the run.
///
/// Construction performs one `n x n` pass per requested matrix; every
/// later callback call is a plain lookup. A matrix the method did not ask
/// for is never computed, and a callback against it answers
/// [`CallbackError::NotMaterialized`] instead of silently recomputing —
/// the skipped stage stays observable.
///
/// Each materialization runs inside a tracing span (`distance_matrix` /
/// `kernel_matrix`), so enabling span-close events reports the stage
/// timings.
///
/// # Examples
/// ```
/// use engawa_core::CallbackSet;
/// use engawa_providers_dense::PrecomputedCallbacks;
/// use nalgebra::DMatrix;
///
/// let data = DMatrix::from_column_slice(2, 2, &[0.0, 0.0, 3.0, 4.0]);
/// let callbacks = PrecomputedCallbacks::new(&data, true, false);
/// assert!(callbacks.has_distance_matrix());
/// assert!(!callbacks.has_kernel_matrix());
/// assert_eq!(callbacks.distance(0, 1)?, 5.0);
/// assert!(callbacks.kernel(0, 1).is_err());
/// # Ok::<(), engawa_core::CallbackError>(())
/// ```
#[derive(Clone, Debug)]
pub struct PrecomputedCallbacks<'a> {
    data: &'a DMatrix<f64>,
    distances: Option<DMatrix<f64>>,
    kernels: Option<DMatrix<f64>>,
}

impl<'a> PrecomputedCallbacks<'a> {
    /// Materializes the matrices selected by the two predicates.
    #[must_use]
    pub fn new(data: &'a DMatrix<f64>, needs_distance: bool, needs_kernel: bool) -> Self {
        let n = data.ncols();
        let distances = needs_distance.then(|| {
            let _span = info_span!("distance_matrix", samples = n).entered();
            DMatrix::from_fn(n, n, |i, j| (data.column(i) - data.column(j)).norm())
        });
        let kernels = needs_kernel.then(|| {
            let _span = info_span!("kernel_matrix", samples = n).entered();
            DMatrix::from_fn(n, n, |i, j| data.column(i).dot(&data.column(j)))
        });
        Self {
            data,
            distances,
            kernels,
        }
    }

    /// Whether the distance matrix was materialized for this run.
    #[must_use]
    pub const fn has_distance_matrix(&self) -> bool {
        self.distances.is_some()
    }

    /// Whether the kernel matrix was materialized for this run.
    #[must_use]
    pub const fn has_kernel_matrix(&self) -> bool {
        self.kernels.is_some()
    }

    fn check(&self, index: usize) -> Result<(), CallbackError> {
        if index < self.data.ncols() {
            Ok(())
        } else {
            Err(CallbackError::OutOfBounds { index })
        }
    }

    fn lookup(
        table: Option<&DMatrix<f64>>,
        name: &'static str,
        i: usize,
        j: usize,
    ) -> Result<f64, CallbackError> {
        table
            .map(|matrix| matrix[(i, j)])
            .ok_or(CallbackError::NotMaterialized { matrix: name })
    }
}

impl CallbackSet for PrecomputedCallbacks<'_> {
    fn sample_count(&self) -> usize {
        self.data.ncols()
    }

    fn kernel(&self, i: usize, j: usize) -> Result<f64, CallbackError> {
        self.check(i)?;
        self.check(j)?;
        Self::lookup(self.kernels.as_ref(), "kernel", i, j)
    }

    fn distance(&self, i: usize, j: usize) -> Result<f64, CallbackError> {
        self.check(i)?;
        self.check(j)?;
        Self::lookup(self.distances.as_ref(), "distance", i, j)
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
    use rstest::rstest;

    use crate::lazy::LazyCallbacks;

    fn sample_data() -> DMatrix<f64> {
        DMatrix::from_column_slice(3, 4, &[
            0.0, 0.0, 0.0, //
            1.0, 2.0, 2.0, //
            3.0, 0.0, 4.0, //
            -1.0, 1.0, 0.5, //
        ])
    }

    #[test]
    fn distance_only_run_never_materializes_a_kernel_matrix() {
        let data = sample_data();
        let callbacks = PrecomputedCallbacks::new(&data, true, false);
        assert!(callbacks.has_distance_matrix());
        assert!(!callbacks.has_kernel_matrix());
        let err = callbacks.kernel(0, 1).expect_err("kernel matrix was skipped");
        assert_eq!(err, CallbackError::NotMaterialized { matrix: "kernel" });
        assert_eq!(err.code(), "CALLBACK_NOT_MATERIALIZED");
    }

    #[test]
    fn kernel_only_run_never_materializes_a_distance_matrix() {
        let data = sample_data();
        let callbacks = PrecomputedCallbacks::new(&data, false, true);
        assert!(!callbacks.has_distance_matrix());
        assert!(callbacks.has_kernel_matrix());
        assert!(callbacks.distance(0, 1).is_err());
    }

    #[test]
    fn neither_matrix_still_serves_feature_vectors() {
        let data = sample_data();
        let callbacks = PrecomputedCallbacks::new(&data, false, false);
        let column = callbacks.vector(1).expect("index is valid");
        assert_eq!(column.as_slice(), &[1.0, 2.0, 2.0]);
    }

    #[rstest]
    #[case(true, false)]
    #[case(false, true)]
    #[case(true, true)]
    fn lookups_agree_with_the_lazy_strategy(
        #[case] needs_distance: bool,
        #[case] needs_kernel: bool,
    ) {
        let data = sample_data();
        let lazy = LazyCallbacks::new(&data);
        let precomputed = PrecomputedCallbacks::new(&data, needs_distance, needs_kernel);
        for i in 0..data.ncols() {
            for j in 0..data.ncols() {
                if needs_distance {
                    assert_relative_eq!(
                        precomputed.distance(i, j).expect("materialized"),
                        lazy.distance(i, j).expect("computable"),
                    );
                }
                if needs_kernel {
                    assert_relative_eq!(
                        precomputed.kernel(i, j).expect("materialized"),
                        lazy.kernel(i, j).expect("computable"),
                    );
                }
            }
        }
    }

    #[test]
    fn out_of_bounds_is_checked_before_materialization_state() {
        let data = sample_data();
        let callbacks = PrecomputedCallbacks::new(&data, false, false);
        let err = callbacks.kernel(7, 0).expect_err("index 7 is out of bounds");
        assert_eq!(err, CallbackError::OutOfBounds { index: 7 });
    }
}
