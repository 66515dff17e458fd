//! The collaborator seam to the embedding-algorithm library.
//!
//! [`Embedder`] is the contract the pipeline is written against: given an
//! index sequence, a [`CallbackSet`], the run [`Parameters`], an RNG, and
//! a cancellation predicate, produce a `target_dimension x n` coordinate
//! matrix, plus a linear projection artifact if and only if the method is
//! linear in nature. The real algorithm collection lives outside this
//! crate; [`SkeletonEmbedder`] is a deterministic stand-in that honours
//! the contract so the pipeline can be exercised end to end.

use rand::RngCore;

use crate::{
    callbacks::CallbackSet,
    error::EmbedError,
    method::Method,
    parameters::Parameters,
    result::EmbeddingResult,
};

#[cfg(feature = "skeleton")]
use nalgebra::{DMatrix, DVector};
#[cfg(feature = "skeleton")]
use rand::Rng;

#[cfg(feature = "skeleton")]
use crate::result::ProjectionArtifact;

/// An embedding-algorithm collection the pipeline can delegate to.
pub trait Embedder {
    /// Whether `method` consumes the pairwise distance callback.
    fn needs_distance(&self, method: Method) -> bool {
        method.needs_distance()
    }

    /// Whether `method` consumes the pairwise kernel callback.
    fn needs_kernel(&self, method: Method) -> bool {
        method.needs_kernel()
    }

    /// Embeds the samples named by `indices`.
    ///
    /// The returned coordinate matrix must be `target_dimension x
    /// indices.len()`, and the projection artifact must be the linear case
    /// if and only if the method is linear. Implementations should poll
    /// `cancel` and abort with [`EmbedError::Cancelled`] when it reports
    /// true.
    ///
    /// # Errors
    /// Returns [`EmbedError`] on callback failure or cancellation.
    fn embed(
        &self,
        indices: &[usize],
        callbacks: &dyn CallbackSet,
        parameters: &Parameters,
        rng: &mut dyn RngCore,
        cancel: &dyn Fn() -> bool,
    ) -> Result<EmbeddingResult, EmbedError>;
}

/// Which pairwise callback an anchored skeleton embedding reads.
#[cfg(feature = "skeleton")]
#[derive(Clone, Copy, Debug)]
enum PairwiseKind {
    Distance,
    Kernel,
}

/// Deterministic placeholder backend honouring the embedding contract.
///
/// Linear methods yield mean-centred, axis-aligned coordinates together
/// with a [`ProjectionArtifact::Linear`]; distance- and kernel-based
/// methods derive each coordinate from the pairwise value against a small
/// set of anchor samples; the stochastic methods draw their placeholder
/// coordinates from the RNG threaded through the invoker, so a fixed seed
/// reproduces them exactly.
#[cfg(feature = "skeleton")]
#[derive(Clone, Copy, Debug, Default)]
pub struct SkeletonEmbedder;

#[cfg(feature = "skeleton")]
impl SkeletonEmbedder {
    fn linear(
        indices: &[usize],
        callbacks: &dyn CallbackSet,
        dimension: usize,
        method: Method,
        rng: &mut dyn RngCore,
        cancel: &dyn Fn() -> bool,
    ) -> Result<EmbeddingResult, EmbedError> {
        let n = indices.len();
        if n == 0 {
            return Ok(EmbeddingResult::new(
                DMatrix::zeros(dimension, 0),
                ProjectionArtifact::Linear {
                    matrix: DMatrix::zeros(dimension, 0),
                    mean: DVector::zeros(0),
                },
            ));
        }

        let feature_count = callbacks.vector(indices[0])?.len();
        let mut mean = DVector::zeros(feature_count);
        for &index in indices {
            if cancel() {
                return Err(EmbedError::Cancelled);
            }
            mean += callbacks.vector(index)?;
        }
        mean /= n as f64;

        let matrix = if method == Method::RandomProjection {
            DMatrix::from_fn(dimension, feature_count, |_, _| rng.gen_range(-0.5..0.5))
        } else {
            DMatrix::identity(dimension, feature_count)
        };

        let mut coordinates = DMatrix::zeros(dimension, n);
        for (col, &index) in indices.iter().enumerate() {
            if cancel() {
                return Err(EmbedError::Cancelled);
            }
            let centred = callbacks.vector(index)? - &mean;
            coordinates.set_column(col, &(&matrix * &centred));
        }

        Ok(EmbeddingResult::new(
            coordinates,
            ProjectionArtifact::Linear { matrix, mean },
        ))
    }

    fn anchored(
        indices: &[usize],
        callbacks: &dyn CallbackSet,
        dimension: usize,
        kind: PairwiseKind,
        cancel: &dyn Fn() -> bool,
    ) -> Result<DMatrix<f64>, EmbedError> {
        let n = indices.len();
        let mut coordinates = DMatrix::zeros(dimension, n);
        if n == 0 {
            return Ok(coordinates);
        }
        for (col, &index) in indices.iter().enumerate() {
            if cancel() {
                return Err(EmbedError::Cancelled);
            }
            for row in 0..dimension {
                let anchor = indices[row % n];
                coordinates[(row, col)] = match kind {
                    PairwiseKind::Distance => callbacks.distance(index, anchor)?,
                    PairwiseKind::Kernel => callbacks.kernel(index, anchor)?,
                };
            }
        }
        Ok(coordinates)
    }

    fn stochastic(
        n: usize,
        dimension: usize,
        rng: &mut dyn RngCore,
        cancel: &dyn Fn() -> bool,
    ) -> Result<DMatrix<f64>, EmbedError> {
        let mut coordinates = DMatrix::zeros(dimension, n);
        for col in 0..n {
            if cancel() {
                return Err(EmbedError::Cancelled);
            }
            for row in 0..dimension {
                coordinates[(row, col)] = rng.gen_range(-0.5..0.5);
            }
        }
        Ok(coordinates)
    }

    fn feature_slice(
        indices: &[usize],
        callbacks: &dyn CallbackSet,
        dimension: usize,
        cancel: &dyn Fn() -> bool,
    ) -> Result<DMatrix<f64>, EmbedError> {
        let n = indices.len();
        let mut coordinates = DMatrix::zeros(dimension, n);
        for (col, &index) in indices.iter().enumerate() {
            if cancel() {
                return Err(EmbedError::Cancelled);
            }
            let vector = callbacks.vector(index)?;
            for row in 0..dimension {
                coordinates[(row, col)] = if vector.is_empty() {
                    0.0
                } else {
                    vector[row % vector.len()]
                };
            }
        }
        Ok(coordinates)
    }
}

#[cfg(feature = "skeleton")]
impl Embedder for SkeletonEmbedder {
    fn embed(
        &self,
        indices: &[usize],
        callbacks: &dyn CallbackSet,
        parameters: &Parameters,
        rng: &mut dyn RngCore,
        cancel: &dyn Fn() -> bool,
    ) -> Result<EmbeddingResult, EmbedError> {
        let method = parameters.method();
        let dimension = parameters.target_dimension();
        if method.is_linear() {
            return Self::linear(indices, callbacks, dimension, method, rng, cancel);
        }

        let coordinates = match method {
            Method::StochasticProximityEmbedding
            | Method::TDistributedStochasticNeighborEmbedding => {
                Self::stochastic(indices.len(), dimension, rng, cancel)?
            }
            m if m.needs_distance() => {
                Self::anchored(indices, callbacks, dimension, PairwiseKind::Distance, cancel)?
            }
            m if m.needs_kernel() => {
                Self::anchored(indices, callbacks, dimension, PairwiseKind::Kernel, cancel)?
            }
            _ => Self::feature_slice(indices, callbacks, dimension, cancel)?,
        };
        Ok(EmbeddingResult::new(coordinates, ProjectionArtifact::Empty))
    }
}
