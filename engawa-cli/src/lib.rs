//! Support library for the engawa CLI binary.
//!
//! Re-exports the pipeline modules so integration tests and doctests can
//! exercise the command surface without forking a subprocess.

pub mod cli;
pub mod logging;
pub mod output;
