//! Solve statistics and residual diagnostics.

pub mod stats;
pub use stats::{SolveStats, residual_norm};
