//! Reduction-method enumerations and their alias tables.
//!
//! Method strings are resolved by case-sensitive exact match against the
//! canonical name or the documented abbreviation; anything else is an
//! error. The neighbour-search and eigendecomposition selectors follow the
//! same rule, with availability of the optional entries controlled by the
//! `covertree` and `arpack` cargo features.

use std::fmt;

use thiserror::Error;

/// Dimension-reduction method selected for a run.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Method {
    /// Locally linear embedding.
    LocallyLinearEmbedding,
    /// Neighborhood preserving embedding.
    NeighborhoodPreservingEmbedding,
    /// Local tangent space alignment.
    LocalTangentSpaceAlignment,
    /// Linear local tangent space alignment.
    LinearLocalTangentSpaceAlignment,
    /// Hessian locally linear embedding.
    HessianLocallyLinearEmbedding,
    /// Laplacian eigenmaps.
    LaplacianEigenmaps,
    /// Locality preserving projections.
    LocalityPreservingProjections,
    /// Diffusion map.
    DiffusionMap,
    /// Isomap.
    Isomap,
    /// Landmark Isomap.
    LandmarkIsomap,
    /// Multidimensional scaling.
    MultidimensionalScaling,
    /// Landmark multidimensional scaling.
    LandmarkMultidimensionalScaling,
    /// Stochastic proximity embedding.
    StochasticProximityEmbedding,
    /// Kernel principal component analysis.
    KernelPca,
    /// Principal component analysis.
    Pca,
    /// Random projection.
    RandomProjection,
    /// Factor analysis.
    FactorAnalysis,
    /// t-distributed stochastic neighbor embedding.
    TDistributedStochasticNeighborEmbedding,
}

/// Error raised when a method string matches no canonical name or alias.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("unknown method `{name}`")]
pub struct UnknownMethod {
    /// The string that failed to resolve.
    pub name: String,
}

impl Method {
    /// Every supported method, in canonical order.
    pub const ALL: [Self; 18] = [
        Self::LocallyLinearEmbedding,
        Self::NeighborhoodPreservingEmbedding,
        Self::LocalTangentSpaceAlignment,
        Self::LinearLocalTangentSpaceAlignment,
        Self::HessianLocallyLinearEmbedding,
        Self::LaplacianEigenmaps,
        Self::LocalityPreservingProjections,
        Self::DiffusionMap,
        Self::Isomap,
        Self::LandmarkIsomap,
        Self::MultidimensionalScaling,
        Self::LandmarkMultidimensionalScaling,
        Self::StochasticProximityEmbedding,
        Self::KernelPca,
        Self::Pca,
        Self::RandomProjection,
        Self::FactorAnalysis,
        Self::TDistributedStochasticNeighborEmbedding,
    ];

    /// Canonical long name of the method.
    #[must_use]
    pub const fn canonical_name(self) -> &'static str {
        match self {
            Self::LocallyLinearEmbedding => "locally_linear_embedding",
            Self::NeighborhoodPreservingEmbedding => "neighborhood_preserving_embedding",
            Self::LocalTangentSpaceAlignment => "local_tangent_space_alignment",
            Self::LinearLocalTangentSpaceAlignment => "linear_local_tangent_space_alignment",
            Self::HessianLocallyLinearEmbedding => "hessian_locally_linear_embedding",
            Self::LaplacianEigenmaps => "laplacian_eigenmaps",
            Self::LocalityPreservingProjections => "locality_preserving_projections",
            Self::DiffusionMap => "diffusion_map",
            Self::Isomap => "isomap",
            Self::LandmarkIsomap => "landmark_isomap",
            Self::MultidimensionalScaling => "multidimensional_scaling",
            Self::LandmarkMultidimensionalScaling => "landmark_multidimensional_scaling",
            Self::StochasticProximityEmbedding => "stochastic_proximity_embedding",
            Self::KernelPca => "kernel_pca",
            Self::Pca => "pca",
            Self::RandomProjection => "random_projection",
            Self::FactorAnalysis => "factor_analysis",
            Self::TDistributedStochasticNeighborEmbedding => {
                "t-stochastic_neighborhood_embedding"
            }
        }
    }

    /// Documented short alias, when one exists.
    #[must_use]
    pub const fn abbreviation(self) -> Option<&'static str> {
        match self {
            Self::LocallyLinearEmbedding => Some("lle"),
            Self::NeighborhoodPreservingEmbedding => Some("npe"),
            Self::LocalTangentSpaceAlignment => Some("ltsa"),
            Self::LinearLocalTangentSpaceAlignment => Some("lltsa"),
            Self::HessianLocallyLinearEmbedding => Some("hlle"),
            Self::LaplacianEigenmaps => Some("la"),
            Self::LocalityPreservingProjections => Some("lpp"),
            Self::DiffusionMap => Some("dm"),
            Self::Isomap | Self::Pca => None,
            Self::LandmarkIsomap => Some("l-isomap"),
            Self::MultidimensionalScaling => Some("mds"),
            Self::LandmarkMultidimensionalScaling => Some("l-mds"),
            Self::StochasticProximityEmbedding => Some("spe"),
            Self::KernelPca => Some("kpca"),
            Self::RandomProjection => Some("ra"),
            Self::FactorAnalysis => Some("fa"),
            Self::TDistributedStochasticNeighborEmbedding => Some("t-sne"),
        }
    }

    /// Resolves `raw` against the canonical names and abbreviations.
    ///
    /// Matching is case-sensitive and exact.
    ///
    /// # Errors
    /// Returns [`UnknownMethod`] when no table entry matches.
    ///
    /// # Examples
    /// ```
    /// use engawa_core::Method;
    ///
    /// assert_eq!(
    ///     Method::parse("lle")?,
    ///     Method::parse("locally_linear_embedding")?,
    /// );
    /// assert!(Method::parse("LLE").is_err());
    /// # Ok::<(), engawa_core::UnknownMethod>(())
    /// ```
    pub fn parse(raw: &str) -> Result<Self, UnknownMethod> {
        Self::ALL
            .iter()
            .copied()
            .find(|method| {
                method.canonical_name() == raw || method.abbreviation() == Some(raw)
            })
            .ok_or_else(|| UnknownMethod {
                name: raw.to_owned(),
            })
    }

    /// Whether the method consumes the pairwise kernel callback.
    #[must_use]
    pub const fn needs_kernel(self) -> bool {
        matches!(
            self,
            Self::LocallyLinearEmbedding
                | Self::NeighborhoodPreservingEmbedding
                | Self::LocalTangentSpaceAlignment
                | Self::LinearLocalTangentSpaceAlignment
                | Self::HessianLocallyLinearEmbedding
                | Self::KernelPca
        )
    }

    /// Whether the method consumes the pairwise distance callback.
    #[must_use]
    pub const fn needs_distance(self) -> bool {
        matches!(
            self,
            Self::LaplacianEigenmaps
                | Self::LocalityPreservingProjections
                | Self::DiffusionMap
                | Self::Isomap
                | Self::LandmarkIsomap
                | Self::MultidimensionalScaling
                | Self::LandmarkMultidimensionalScaling
                | Self::StochasticProximityEmbedding
        )
    }

    /// Whether the method produces a linear projection artifact.
    #[must_use]
    pub const fn is_linear(self) -> bool {
        matches!(
            self,
            Self::NeighborhoodPreservingEmbedding
                | Self::LinearLocalTangentSpaceAlignment
                | Self::LocalityPreservingProjections
                | Self::Pca
                | Self::RandomProjection
                | Self::FactorAnalysis
        )
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

/// Neighbour-search structure used by the algorithm library.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NeighborsMethod {
    /// Exhaustive pairwise search.
    Brute,
    /// Cover-tree search; only resolvable when the `covertree` feature is
    /// compiled in.
    CoverTree,
}

/// Error raised when a neighbour-search string matches no available entry.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("unknown neighbors method `{name}`")]
pub struct UnknownNeighborsMethod {
    /// The string that failed to resolve.
    pub name: String,
}

impl NeighborsMethod {
    /// Resolves `raw` against the entries available in this build.
    ///
    /// # Errors
    /// Returns [`UnknownNeighborsMethod`] for anything that is not `brute`,
    /// or `covertree` in builds without the `covertree` feature.
    pub fn parse(raw: &str) -> Result<Self, UnknownNeighborsMethod> {
        match raw {
            "brute" => Ok(Self::Brute),
            #[cfg(feature = "covertree")]
            "covertree" => Ok(Self::CoverTree),
            _ => Err(UnknownNeighborsMethod {
                name: raw.to_owned(),
            }),
        }
    }

    /// Default selection for this build: cover-tree when compiled in,
    /// brute force otherwise.
    #[must_use]
    pub const fn default_available() -> Self {
        if cfg!(feature = "covertree") {
            Self::CoverTree
        } else {
            Self::Brute
        }
    }
}

impl fmt::Display for NeighborsMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Brute => "brute",
            Self::CoverTree => "covertree",
        })
    }
}

/// Eigendecomposition backend used by the algorithm library.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EigenMethod {
    /// Iterative Arnoldi solver; only resolvable when the `arpack` feature
    /// is compiled in.
    Arnoldi,
    /// Randomized decomposition.
    Randomized,
    /// Dense decomposition.
    Dense,
}

/// Error raised when an eigendecomposition string matches no available entry.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("unknown eigendecomposition method `{name}`")]
pub struct UnknownEigenMethod {
    /// The string that failed to resolve.
    pub name: String,
}

impl EigenMethod {
    /// Resolves `raw` against the entries available in this build.
    ///
    /// # Errors
    /// Returns [`UnknownEigenMethod`] for anything that is not
    /// `randomized`, `dense`, or `arpack` in builds with the `arpack`
    /// feature.
    pub fn parse(raw: &str) -> Result<Self, UnknownEigenMethod> {
        match raw {
            #[cfg(feature = "arpack")]
            "arpack" => Ok(Self::Arnoldi),
            "randomized" => Ok(Self::Randomized),
            "dense" => Ok(Self::Dense),
            _ => Err(UnknownEigenMethod {
                name: raw.to_owned(),
            }),
        }
    }

    /// Default selection for this build: the Arnoldi solver when compiled
    /// in, dense otherwise.
    #[must_use]
    pub const fn default_available() -> Self {
        if cfg!(feature = "arpack") {
            Self::Arnoldi
        } else {
            Self::Dense
        }
    }
}

impl fmt::Display for EigenMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Arnoldi => "arpack",
            Self::Randomized => "randomized",
            Self::Dense => "dense",
        })
    }
}
