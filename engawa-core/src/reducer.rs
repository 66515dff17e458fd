//! Embedding invocation: parameter ownership, RNG threading, and shape
//! validation.
//!
//! The [`Reducer`] is the seam between the pipeline and whichever
//! [`Embedder`] implementation is linked in. It owns the validated
//! [`Parameters`] and the cooperative-cancellation hook, constructs the
//! run RNG (fixed seed or entropy), and checks nothing about the returned
//! coordinates beyond their shape.

use std::fmt;
use std::sync::Arc;

use rand::{SeedableRng, rngs::SmallRng};
use tracing::{debug, instrument};

use crate::{
    callbacks::CallbackSet,
    embedder::Embedder,
    error::EmbedError,
    parameters::Parameters,
    result::EmbeddingResult,
};

/// Cooperative-cancellation predicate polled by embedding backends.
pub type CancelHook = Arc<dyn Fn() -> bool + Send + Sync>;

/// Invokes an embedding backend for one run.
///
/// # Examples
/// ```
/// use engawa_core::{
///     CallbackError, CallbackSet, Method, ParametersBuilder, Reducer, SkeletonEmbedder,
/// };
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
/// let parameters = ParametersBuilder::default()
///     .with_method(Method::Pca)
///     .build()?;
/// let data = Columns(DMatrix::from_column_slice(2, 3, &[0.0, 0.0, 1.0, 1.0, 2.0, 2.0]));
/// let indices: Vec<usize> = (0..data.sample_count()).collect();
/// let result = Reducer::new(parameters)
///     .embed(&indices, &data, &SkeletonEmbedder)
///     .expect("embedding must succeed");
/// assert_eq!(result.coordinates().shape(), (2, 3));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Reducer {
    parameters: Parameters,
    cancel: CancelHook,
}

impl Reducer {
    /// Creates an invoker that never cancels.
    #[must_use]
    pub fn new(parameters: Parameters) -> Self {
        Self {
            parameters,
            cancel: Arc::new(|| false),
        }
    }

    /// Replaces the cancellation hook.
    ///
    /// The predicate is polled by the backend between samples; once it
    /// reports true the run aborts with [`EmbedError::Cancelled`].
    #[must_use]
    pub fn with_cancel_hook(mut self, cancel: CancelHook) -> Self {
        self.cancel = cancel;
        self
    }

    /// The parameters this invoker was built with.
    #[must_use]
    pub const fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Delegates to `embedder` and validates the returned shape.
    ///
    /// # Errors
    /// Returns [`EmbedError::ShapeMismatch`] when the backend's coordinate
    /// matrix is not `target_dimension x indices.len()`, and forwards any
    /// backend failure unchanged.
    #[instrument(
        skip_all,
        fields(method = %self.parameters.method(), samples = indices.len())
    )]
    pub fn embed<C, E>(
        &self,
        indices: &[usize],
        callbacks: &C,
        embedder: &E,
    ) -> Result<EmbeddingResult, EmbedError>
    where
        C: CallbackSet,
        E: Embedder,
    {
        let mut rng = match self.parameters.seed() {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let cancel: &(dyn Fn() -> bool + Send + Sync) = self.cancel.as_ref();
        let result = embedder.embed(indices, callbacks, &self.parameters, &mut rng, cancel)?;

        let (rows, cols) = result.coordinates().shape();
        let expected_rows = self.parameters.target_dimension();
        if rows != expected_rows || cols != indices.len() {
            return Err(EmbedError::ShapeMismatch {
                expected_rows,
                expected_cols: indices.len(),
                rows,
                cols,
            });
        }
        debug!(rows, cols, linear = result.projection().is_linear(), "embedding produced");
        Ok(result)
    }
}

impl fmt::Debug for Reducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reducer")
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use nalgebra::{DMatrix, DVectorView};
    use rand::RngCore;

    use crate::{
        callbacks::CallbackError,
        method::Method,
        parameters::ParametersBuilder,
        result::ProjectionArtifact,
    };

    struct Columns(DMatrix<f64>);

    impl CallbackSet for Columns {
        fn sample_count(&self) -> usize {
            self.0.ncols()
        }
        fn kernel(&self, i: usize, j: usize) -> Result<f64, CallbackError> {
            Ok(self.0.column(i).dot(&self.0.column(j)))
        }
        fn distance(&self, i: usize, j: usize) -> Result<f64, CallbackError> {
            Ok((self.0.column(i) - self.0.column(j)).norm())
        }
        fn vector(&self, i: usize) -> Result<DVectorView<'_, f64>, CallbackError> {
            Ok(self.0.column(i))
        }
    }

    /// Backend that ignores the contract and returns a fixed-shape matrix.
    struct MisshapenEmbedder;

    impl Embedder for MisshapenEmbedder {
        fn embed(
            &self,
            _indices: &[usize],
            _callbacks: &dyn CallbackSet,
            _parameters: &Parameters,
            _rng: &mut dyn RngCore,
            _cancel: &dyn Fn() -> bool,
        ) -> Result<EmbeddingResult, EmbedError> {
            Ok(EmbeddingResult::new(
                DMatrix::zeros(5, 1),
                ProjectionArtifact::Empty,
            ))
        }
    }

    fn sample_data() -> Columns {
        Columns(DMatrix::from_column_slice(
            2,
            3,
            &[0.0, 0.0, 1.0, 1.0, 2.0, 2.0],
        ))
    }

    #[test]
    fn misshapen_backend_output_is_rejected() {
        let parameters = ParametersBuilder::default()
            .with_method(Method::Pca)
            .build()
            .expect("parameters must validate");
        let data = sample_data();
        let indices: Vec<usize> = (0..data.sample_count()).collect();
        let err = Reducer::new(parameters)
            .embed(&indices, &data, &MisshapenEmbedder)
            .expect_err("wrong shape must fail");
        assert!(matches!(
            err,
            EmbedError::ShapeMismatch {
                expected_rows: 2,
                expected_cols: 3,
                rows: 5,
                cols: 1,
            }
        ));
    }

    #[cfg(feature = "skeleton")]
    #[test]
    fn cancel_hook_aborts_the_run() {
        use crate::embedder::SkeletonEmbedder;

        let parameters = ParametersBuilder::default()
            .with_method(Method::Pca)
            .build()
            .expect("parameters must validate");
        let data = sample_data();
        let indices: Vec<usize> = (0..data.sample_count()).collect();
        let err = Reducer::new(parameters)
            .with_cancel_hook(Arc::new(|| true))
            .embed(&indices, &data, &SkeletonEmbedder)
            .expect_err("cancelled run must abort");
        assert_eq!(err, EmbedError::Cancelled);
    }

    #[cfg(feature = "skeleton")]
    #[test]
    fn fixed_seed_reproduces_a_stochastic_run() {
        use crate::embedder::SkeletonEmbedder;

        let run = |seed| {
            let parameters = ParametersBuilder::default()
                .with_method(Method::RandomProjection)
                .with_seed(Some(seed))
                .build()
                .expect("parameters must validate");
            let data = sample_data();
            let indices: Vec<usize> = (0..data.sample_count()).collect();
            Reducer::new(parameters)
                .embed(&indices, &data, &SkeletonEmbedder)
                .expect("embedding must succeed")
        };
        assert_eq!(run(42).coordinates(), run(42).coordinates());
        assert_ne!(run(42).coordinates(), run(43).coordinates());
    }
}
