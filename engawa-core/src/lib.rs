//! Core orchestration for the engawa dimensionality-reduction pipeline.
//!
//! This crate owns the data model of a reduction run — the method
//! enumerations and their alias tables, the validated [`Parameters`] set,
//! the [`CallbackSet`] capability consumed by embedding backends, and the
//! [`EmbeddingResult`] returned by them — together with the [`Reducer`]
//! that invokes a backend through the [`Embedder`] seam.
//!
//! The actual reduction algorithms live behind [`Embedder`]; the crate
//! ships a deterministic placeholder backend ([`SkeletonEmbedder`], cargo
//! feature `skeleton`) so the pipeline can be exercised end to end without
//! an algorithm library.

mod callbacks;
mod embedder;
mod error;
mod method;
mod parameters;
mod reducer;
mod result;

pub use callbacks::{CallbackError, CallbackSet};
pub use embedder::Embedder;
#[cfg(feature = "skeleton")]
pub use embedder::SkeletonEmbedder;
pub use error::EmbedError;
pub use method::{
    EigenMethod, Method, NeighborsMethod, UnknownEigenMethod, UnknownMethod,
    UnknownNeighborsMethod,
};
pub use parameters::{ParameterError, Parameters, ParametersBuilder};
pub use reducer::{CancelHook, Reducer};
pub use result::{EmbeddingResult, ProjectionArtifact};
