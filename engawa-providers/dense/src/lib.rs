//! Dense-matrix provider for the engawa pipeline: a plain-text loader and
//! the two interchangeable pairwise callback strategies.
//!
//! [`LazyCallbacks`] recomputes every pairwise value from the dataset
//! columns on each call; [`PrecomputedCallbacks`] materializes the
//! required `n x n` matrices once and answers lookups in O(1). Both
//! implement [`engawa_core::CallbackSet`], so the invoker never knows
//! which strategy produced its values.

mod errors;
mod lazy;
mod loader;
mod precomputed;

pub use errors::DenseLoadError;
pub use lazy::LazyCallbacks;
pub use loader::read_dense_matrix;
pub use precomputed::PrecomputedCallbacks;
