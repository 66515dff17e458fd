//! Validated run parameters and their builder.
//!
//! [`ParametersBuilder`] carries every documented default, so a built
//! [`Parameters`] value never has an unset field: each one is either the
//! default or a validated user input. Raw integer inputs are accepted as
//! `i64` so that negative values reach validation instead of being
//! rejected by the argument parser.

use thiserror::Error;

use crate::method::{EigenMethod, Method, NeighborsMethod};

/// An out-of-range parameter detected while building [`Parameters`].
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ParameterError {
    /// Target dimensionality must be non-negative.
    #[error("negative target dimensionality is not possible in current circumstances (got {got})")]
    NegativeTargetDimension {
        /// The rejected value.
        got: i64,
    },
    /// Too few neighbours for any neighbourhood-based method.
    ///
    /// The enforced threshold is 3; the message wording deliberately still
    /// suggests 10, matching the long-standing help text.
    #[error("the provided number of neighbors {got} is too small, consider at least 10")]
    TooFewNeighbors {
        /// The rejected value.
        got: i64,
    },
    /// Gaussian kernel width must be non-negative.
    #[error("width of the gaussian kernel is negative (got {got})")]
    NegativeGaussianWidth {
        /// The rejected value.
        got: f64,
    },
    /// Diffusion-map timestep count must be non-negative.
    #[error("number of timesteps is negative (got {got})")]
    NegativeTimesteps {
        /// The rejected value.
        got: i64,
    },
}

impl ParameterError {
    /// Stable machine-readable code for structured logs.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        "OUT_OF_RANGE_PARAMETER"
    }
}

/// Fully resolved parameter set for one reduction run.
///
/// Constructed once per run through [`ParametersBuilder`] and owned by the
/// pipeline for the run's duration.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameters {
    method: Method,
    neighbors_method: NeighborsMethod,
    eigen_method: EigenMethod,
    target_dimension: usize,
    num_neighbors: usize,
    gaussian_width: f64,
    timesteps: usize,
    spe_global: bool,
    eigenshift: f64,
    landmark_ratio: f64,
    spe_tolerance: f64,
    spe_num_updates: i64,
    max_iters: i64,
    fa_epsilon: f64,
    sne_perplexity: f64,
    sne_theta: f64,
    seed: Option<u64>,
}

impl Parameters {
    /// Selected reduction method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Selected neighbour-search structure.
    #[must_use]
    pub const fn neighbors_method(&self) -> NeighborsMethod {
        self.neighbors_method
    }

    /// Selected eigendecomposition backend.
    #[must_use]
    pub const fn eigen_method(&self) -> EigenMethod {
        self.eigen_method
    }

    /// Output dimensionality.
    #[must_use]
    pub const fn target_dimension(&self) -> usize {
        self.target_dimension
    }

    /// Neighbour count for neighbourhood-based methods.
    #[must_use]
    pub const fn num_neighbors(&self) -> usize {
        self.num_neighbors
    }

    /// Gaussian kernel width.
    #[must_use]
    pub const fn gaussian_width(&self) -> f64 {
        self.gaussian_width
    }

    /// Diffusion-map timestep count.
    #[must_use]
    pub const fn timesteps(&self) -> usize {
        self.timesteps
    }

    /// Whether SPE uses the global update strategy.
    #[must_use]
    pub const fn spe_global(&self) -> bool {
        self.spe_global
    }

    /// Regularization diagonal shift for weight matrices.
    #[must_use]
    pub const fn eigenshift(&self) -> f64 {
        self.eigenshift
    }

    /// Fraction of samples used as landmarks by the landmark variants.
    ///
    /// Accepted without range validation even though values outside (0,1)
    /// are semantically meaningless; the algorithm library owns that call.
    #[must_use]
    pub const fn landmark_ratio(&self) -> f64 {
        self.landmark_ratio
    }

    /// SPE convergence tolerance.
    #[must_use]
    pub const fn spe_tolerance(&self) -> f64 {
        self.spe_tolerance
    }

    /// Number of SPE updates per iteration.
    #[must_use]
    pub const fn spe_num_updates(&self) -> i64 {
        self.spe_num_updates
    }

    /// Iteration cap for iterative methods.
    #[must_use]
    pub const fn max_iters(&self) -> i64 {
        self.max_iters
    }

    /// Factor-analysis convergence criterion.
    #[must_use]
    pub const fn fa_epsilon(&self) -> f64 {
        self.fa_epsilon
    }

    /// Perplexity for t-SNE.
    #[must_use]
    pub const fn sne_perplexity(&self) -> f64 {
        self.sne_perplexity
    }

    /// Theta for t-SNE.
    #[must_use]
    pub const fn sne_theta(&self) -> f64 {
        self.sne_theta
    }

    /// Fixed seed for the stochastic methods, if one was supplied.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// Configures and validates [`Parameters`].
///
/// # Examples
/// ```
/// use engawa_core::{Method, ParametersBuilder};
///
/// let parameters = ParametersBuilder::default()
///     .with_method(Method::Pca)
///     .with_target_dimension(3)
///     .build()?;
/// assert_eq!(parameters.method(), Method::Pca);
/// assert_eq!(parameters.target_dimension(), 3);
/// assert_eq!(parameters.num_neighbors(), 10);
/// # Ok::<(), engawa_core::ParameterError>(())
/// ```
#[derive(Clone, Debug)]
pub struct ParametersBuilder {
    method: Method,
    neighbors_method: NeighborsMethod,
    eigen_method: EigenMethod,
    target_dimension: i64,
    num_neighbors: i64,
    gaussian_width: f64,
    timesteps: i64,
    spe_global: bool,
    eigenshift: f64,
    landmark_ratio: f64,
    spe_tolerance: f64,
    spe_num_updates: i64,
    max_iters: i64,
    fa_epsilon: f64,
    sne_perplexity: f64,
    sne_theta: f64,
    seed: Option<u64>,
}

impl Default for ParametersBuilder {
    fn default() -> Self {
        Self {
            method: Method::LocallyLinearEmbedding,
            neighbors_method: NeighborsMethod::default_available(),
            eigen_method: EigenMethod::default_available(),
            target_dimension: 2,
            num_neighbors: 10,
            gaussian_width: 1.0,
            timesteps: 1,
            spe_global: true,
            eigenshift: 1e-9,
            landmark_ratio: 0.2,
            spe_tolerance: 1e-5,
            spe_num_updates: 100,
            max_iters: 1000,
            fa_epsilon: 1e-5,
            sne_perplexity: 30.0,
            sne_theta: 0.5,
            seed: None,
        }
    }
}

impl ParametersBuilder {
    /// Creates a builder populated with the documented defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the reduction method.
    #[must_use]
    pub const fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Overrides the neighbour-search structure.
    #[must_use]
    pub const fn with_neighbors_method(mut self, neighbors_method: NeighborsMethod) -> Self {
        self.neighbors_method = neighbors_method;
        self
    }

    /// Overrides the eigendecomposition backend.
    #[must_use]
    pub const fn with_eigen_method(mut self, eigen_method: EigenMethod) -> Self {
        self.eigen_method = eigen_method;
        self
    }

    /// Overrides the target dimension; validated in [`Self::build`].
    #[must_use]
    pub const fn with_target_dimension(mut self, target_dimension: i64) -> Self {
        self.target_dimension = target_dimension;
        self
    }

    /// Overrides the neighbour count; validated in [`Self::build`].
    #[must_use]
    pub const fn with_num_neighbors(mut self, num_neighbors: i64) -> Self {
        self.num_neighbors = num_neighbors;
        self
    }

    /// Overrides the gaussian kernel width; validated in [`Self::build`].
    #[must_use]
    pub const fn with_gaussian_width(mut self, gaussian_width: f64) -> Self {
        self.gaussian_width = gaussian_width;
        self
    }

    /// Overrides the diffusion-map timestep count; validated in
    /// [`Self::build`].
    #[must_use]
    pub const fn with_timesteps(mut self, timesteps: i64) -> Self {
        self.timesteps = timesteps;
        self
    }

    /// Selects between the global and local SPE strategies.
    #[must_use]
    pub const fn with_spe_global(mut self, spe_global: bool) -> Self {
        self.spe_global = spe_global;
        self
    }

    /// Overrides the regularization diagonal shift.
    #[must_use]
    pub const fn with_eigenshift(mut self, eigenshift: f64) -> Self {
        self.eigenshift = eigenshift;
        self
    }

    /// Overrides the landmark ratio. Not range-checked.
    #[must_use]
    pub const fn with_landmark_ratio(mut self, landmark_ratio: f64) -> Self {
        self.landmark_ratio = landmark_ratio;
        self
    }

    /// Overrides the SPE tolerance. Not range-checked.
    #[must_use]
    pub const fn with_spe_tolerance(mut self, spe_tolerance: f64) -> Self {
        self.spe_tolerance = spe_tolerance;
        self
    }

    /// Overrides the SPE update count. Not range-checked.
    #[must_use]
    pub const fn with_spe_num_updates(mut self, spe_num_updates: i64) -> Self {
        self.spe_num_updates = spe_num_updates;
        self
    }

    /// Overrides the iteration cap. Not range-checked.
    #[must_use]
    pub const fn with_max_iters(mut self, max_iters: i64) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Overrides the factor-analysis convergence criterion. Not
    /// range-checked.
    #[must_use]
    pub const fn with_fa_epsilon(mut self, fa_epsilon: f64) -> Self {
        self.fa_epsilon = fa_epsilon;
        self
    }

    /// Overrides the t-SNE perplexity. Not range-checked.
    #[must_use]
    pub const fn with_sne_perplexity(mut self, sne_perplexity: f64) -> Self {
        self.sne_perplexity = sne_perplexity;
        self
    }

    /// Overrides the t-SNE theta. Not range-checked.
    #[must_use]
    pub const fn with_sne_theta(mut self, sne_theta: f64) -> Self {
        self.sne_theta = sne_theta;
        self
    }

    /// Fixes the seed threaded into the stochastic methods.
    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Validates the configuration and constructs [`Parameters`].
    ///
    /// # Errors
    /// Returns [`ParameterError`] when the target dimension, neighbour
    /// count, gaussian width, or timestep count is out of range. Every
    /// other numeric parameter is accepted as-is.
    ///
    /// # Examples
    /// ```
    /// use engawa_core::{ParameterError, ParametersBuilder};
    ///
    /// let err = ParametersBuilder::default()
    ///     .with_num_neighbors(2)
    ///     .build()
    ///     .expect_err("two neighbors are below the enforced threshold");
    /// assert!(matches!(err, ParameterError::TooFewNeighbors { got: 2 }));
    /// ```
    pub fn build(self) -> Result<Parameters, ParameterError> {
        let target_dimension = usize::try_from(self.target_dimension).map_err(|_| {
            ParameterError::NegativeTargetDimension {
                got: self.target_dimension,
            }
        })?;
        if self.num_neighbors < 3 {
            return Err(ParameterError::TooFewNeighbors {
                got: self.num_neighbors,
            });
        }
        let num_neighbors = usize::try_from(self.num_neighbors).map_err(|_| {
            ParameterError::TooFewNeighbors {
                got: self.num_neighbors,
            }
        })?;
        if self.gaussian_width < 0.0 {
            return Err(ParameterError::NegativeGaussianWidth {
                got: self.gaussian_width,
            });
        }
        let timesteps = usize::try_from(self.timesteps).map_err(|_| {
            ParameterError::NegativeTimesteps {
                got: self.timesteps,
            }
        })?;

        Ok(Parameters {
            method: self.method,
            neighbors_method: self.neighbors_method,
            eigen_method: self.eigen_method,
            target_dimension,
            num_neighbors,
            gaussian_width: self.gaussian_width,
            timesteps,
            spe_global: self.spe_global,
            eigenshift: self.eigenshift,
            landmark_ratio: self.landmark_ratio,
            spe_tolerance: self.spe_tolerance,
            spe_num_updates: self.spe_num_updates,
            max_iters: self.max_iters,
            fa_epsilon: self.fa_epsilon,
            sne_perplexity: self.sne_perplexity,
            sne_theta: self.sne_theta,
            seed: self.seed,
        })
    }
}
