//! Result types for embedding runs.

use nalgebra::{DMatrix, DVector};

/// Linear-projection artifact attached to an [`EmbeddingResult`].
///
/// Linear methods describe how to map new points into the embedding
/// space; non-linear methods have nothing to report and carry the empty
/// case. The variant is matched exhaustively at the write step, so a
/// missing projection can never be confused with a failure.
#[derive(Clone, Debug, PartialEq)]
pub enum ProjectionArtifact {
    /// Non-linear methods produce no projection.
    Empty,
    /// Linear map from the original feature space into the embedding.
    Linear {
        /// Projection matrix, `target_dimension x feature_count`.
        matrix: DMatrix<f64>,
        /// Mean vector subtracted from a point before projecting it.
        mean: DVector<f64>,
    },
}

impl ProjectionArtifact {
    /// Whether this is the linear case.
    #[must_use]
    pub const fn is_linear(&self) -> bool {
        matches!(self, Self::Linear { .. })
    }
}

/// Output of one embedding run: coordinates plus the optional projection.
///
/// The coordinate matrix is `target_dimension x sample_count`; column `i`
/// is the embedded position of sample `i`. Resources are released on drop.
#[derive(Clone, Debug, PartialEq)]
pub struct EmbeddingResult {
    coordinates: DMatrix<f64>,
    projection: ProjectionArtifact,
}

impl EmbeddingResult {
    /// Bundles coordinates with their projection artifact.
    #[must_use]
    pub const fn new(coordinates: DMatrix<f64>, projection: ProjectionArtifact) -> Self {
        Self {
            coordinates,
            projection,
        }
    }

    /// Embedded coordinates, `target_dimension x sample_count`.
    #[must_use]
    pub const fn coordinates(&self) -> &DMatrix<f64> {
        &self.coordinates
    }

    /// Projection artifact; [`ProjectionArtifact::Empty`] for non-linear
    /// methods.
    #[must_use]
    pub const fn projection(&self) -> &ProjectionArtifact {
        &self.projection
    }

    /// Splits the result into its parts.
    #[must_use]
    pub fn into_parts(self) -> (DMatrix<f64>, ProjectionArtifact) {
        (self.coordinates, self.projection)
    }
}
