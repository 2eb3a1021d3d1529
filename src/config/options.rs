//! Command-line or API options for the fixed-iteration solvers.
//!
//! This module provides the `SolverOptions` struct, which carries the iteration
//! budget and the safe-normalization threshold, and the `SolverKind` selector used
//! by [`crate::context::KspContext`]. Neither solver checks a residual tolerance,
//! so there is deliberately no tolerance field here.

use crate::core::normalize::DEFAULT_THRESHOLD;
use crate::error::KError;
use std::fmt;
use std::str::FromStr;

/// Solver parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverOptions {
    /// Exact number of Krylov iterations to run (no early exit)
    pub maxiter: usize,

    /// Norm at or below which a Krylov direction is replaced by the zero vector
    pub threshold: f64,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            maxiter: 1,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl SolverOptions {
    pub fn with_maxiter(mut self, maxiter: usize) -> Self {
        self.maxiter = maxiter;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Reject an empty iteration budget before any operator call is made.
    pub fn validate(&self) -> Result<(), KError> {
        if self.maxiter == 0 {
            return Err(KError::InvalidMaxIter(self.maxiter));
        }
        Ok(())
    }
}

/// Available Krylov solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverKind {
    /// Conjugate Gradient (for SPD operators)
    Cg,
    /// Truncated GMRES (any invertible operator)
    Gmres,
}

impl FromStr for SolverKind {
    type Err = KError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cg" => Ok(SolverKind::Cg),
            "gmres" => Ok(SolverKind::Gmres),
            other => Err(KError::Unsupported(format!("unknown solver kind `{other}`"))),
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverKind::Cg => f.write_str("cg"),
            SolverKind::Gmres => f.write_str("gmres"),
        }
    }
}
