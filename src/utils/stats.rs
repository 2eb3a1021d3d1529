//! Solve statistics & residual diagnostics.
//!
//! The solvers never stop on a tolerance, so these numbers are reporting only.

use crate::core::traits::{InnerProduct, LinearOperator, VectorOps};
use crate::error::KError;

#[derive(Clone, Debug, PartialEq)]
pub struct SolveStats<T> {
    /// Iterations actually performed (always the configured `maxiter`).
    pub iterations: usize,
    /// Residual norm as tracked by the recurrence: `sqrt(r·r)` for CG,
    /// `|beta[maxiter]|` for GMRES. Not recomputed from `b - A(x)`.
    pub residual_estimate: T,
}

/// True residual norm `‖b − A(x)‖₂`. Costs one operator application.
pub fn residual_norm<A, V, T>(a: &A, b: &V, x: &V) -> Result<T, KError>
where
    A: LinearOperator<V> + ?Sized,
    (): InnerProduct<V, Scalar = T> + VectorOps<V, Scalar = T>,
{
    let ip = ();
    let ax = a.apply(x)?;
    Ok(ip.norm(&ip.sub(b, &ax)))
}
