//! Factory for the fixed-iteration Krylov methods (KSP).
//!
//! `KspContext` holds an operator, a [`SolverKind`] and [`SolverOptions`], and dispatches
//! a solve to [`CgSolver`] or [`GmresSolver`]. This is the usual entry point for a caller
//! that picks the method from configuration and applies the same operator repeatedly,
//! e.g. one correction step per outer iteration of a sampling loop.
//!
//! # Usage
//!
//! 1. Construct a `KspContext` with the operator, solver kind and options.
//! 2. Call `solve` with the right-hand side and an optional initial guess.

use crate::config::{SolverKind, SolverOptions};
use crate::core::traits::{InnerProduct, LinearOperator, VectorOps};
use crate::error::KError;
use crate::solver::{CgSolver, GmresSolver, LinearSolver};
use crate::utils::stats::SolveStats;
use num_traits::Float;

/// Context and configuration for a fixed-iteration Krylov solve.
#[derive(Debug, Clone)]
pub struct KspContext<A> {
    /// The type of Krylov solver to use
    pub kind: SolverKind,
    /// The linear operator
    pub a: A,
    /// Iteration budget and normalization threshold
    pub options: SolverOptions,
}

impl<A> KspContext<A> {
    pub fn new(kind: SolverKind, a: A, options: SolverOptions) -> Self {
        Self { kind, a, options }
    }

    /// Solve `A x = b` with the configured method.
    ///
    /// # Returns
    /// * `Ok((x, stats))` on success (including numerically degenerate solves)
    /// * `Err(KError)` on an invalid configuration or an operator failure
    pub fn solve<V, T>(&self, b: &V, x0: Option<&V>) -> Result<(V, SolveStats<T>), KError>
    where
        A: LinearOperator<V>,
        (): InnerProduct<V, Scalar = T> + VectorOps<V, Scalar = T>,
        V: Clone,
        T: Float,
    {
        self.options.validate()?;
        match self.kind {
            SolverKind::Cg => CgSolver::from_options(&self.options).solve(&self.a, b, x0),
            SolverKind::Gmres => GmresSolver::from_options(&self.options).solve(&self.a, b, x0),
        }
    }
}
