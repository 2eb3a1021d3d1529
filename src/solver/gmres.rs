//! Generalized Minimal Residual (GMRES) truncated to a fixed number of Arnoldi steps (Saad §6.5)
//!
//! This module implements one unrestarted GMRES cycle of exactly `maxiter` steps for
//! `A x = b`, where `A` is any [`LinearOperator`]. The Hessenberg matrix is kept in a
//! pre-sized `faer::Mat` and triangularized column by column with Givens rotations, so
//! the least-squares problem at the end reduces to one back-substitution.
//!
//! # Behaviour
//! - No tolerance check and no restart: always `maxiter` operator applications on the basis
//! - Breakdown is not detected; a collapsed direction becomes the zero vector
//!   (see [`crate::core::safe_normalize`]) and the remaining arithmetic may yield NaN/Inf
//! - Back-substitution has no zero-pivot protection
//!
//! # References
//! - Saad, Y. (2003). Iterative Methods for Sparse Linear Systems, 2nd Edition. SIAM. §6.5
//! - https://en.wikipedia.org/wiki/Generalized_minimal_residual_method

use crate::config::SolverOptions;
use crate::core::normalize::{DEFAULT_THRESHOLD, safe_normalize};
use crate::core::traits::{InnerProduct, LinearOperator, VectorOps};
use crate::error::{KError, cast_scalar};
use crate::solver::LinearSolver;
use crate::solver::arnoldi::arnoldi;
use crate::solver::givens::RotationState;
use crate::utils::stats::SolveStats;
use faer::Mat;
use log::{debug, trace};
use num_traits::Float;

/// Truncated GMRES solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GmresSolver {
    /// Number of Arnoldi steps (size of the Krylov basis used for the solution)
    pub maxiter: usize,
    /// Safe-normalization threshold for new basis vectors
    pub threshold: f64,
}

impl GmresSolver {
    /// Create a GMRES solver with the default normalization threshold.
    pub fn new(maxiter: usize) -> Self {
        Self {
            maxiter,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    pub fn from_options(opts: &SolverOptions) -> Self {
        Self {
            maxiter: opts.maxiter,
            threshold: opts.threshold,
        }
    }

    /// Set the safe-normalization threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }
}

/// Solve the upper-triangular system `H[0..m, 0..m] y = g[0..m]` by back-substitution.
///
/// A zero pivot divides by zero; the resulting Inf/NaN is returned as is.
pub fn back_substitution<T: Float>(h: &Mat<T>, g: &[T], m: usize) -> Vec<T> {
    let mut y = vec![T::zero(); m];
    for i in (0..m).rev() {
        let mut acc = g[i];
        for k in (i + 1)..m {
            acc = acc - h[(i, k)] * y[k];
        }
        y[i] = acc / h[(i, i)];
    }
    y
}

impl<A, V, T> LinearSolver<A, V> for GmresSolver
where
    A: LinearOperator<V> + ?Sized,
    (): InnerProduct<V, Scalar = T> + VectorOps<V, Scalar = T>,
    V: Clone,
    T: Float,
{
    type Scalar = T;

    /// Run `maxiter` GMRES steps from `x0` (or zero) and return the corrected iterate.
    ///
    /// # Returns
    /// * `Ok((x, stats))` with `stats.residual_estimate = |beta[maxiter]|`
    /// * `Err(KError)` if `maxiter == 0`, the threshold is not representable, or `A` fails
    fn solve(&self, a: &A, b: &V, x0: Option<&V>) -> Result<(V, SolveStats<T>), KError> {
        let m = self.maxiter;
        if m == 0 {
            return Err(KError::InvalidMaxIter(m));
        }
        let threshold: T = cast_scalar(self.threshold)?;
        let ip = ();
        debug!("gmres: maxiter = {}, initial guess = {}", m, x0.is_some());

        let (x, r) = match x0 {
            Some(x0) => (x0.clone(), ip.sub(b, &a.apply(x0)?)),
            None => (ip.zeros_like(b), b.clone()),
        };

        let (v0, norm0) = safe_normalize(&r, threshold);
        let mut basis: Vec<V> = Vec::with_capacity(m + 1);
        basis.push(v0);
        let mut h = Mat::from_fn(m + 1, m + 1, |_, _| T::zero());
        let mut rot = RotationState::new(m, norm0);

        for i in 0..m {
            let p = a.apply(&basis[i])?;
            let v_next = arnoldi(p, &basis, &mut h, i + 1, threshold);
            basis.push(v_next);
            rot.rotate(&mut h, i);
            trace!(
                "gmres iteration {}: projected residual = {:.6e}",
                i + 1,
                rot.residual(i + 1).to_f64().unwrap_or(f64::NAN)
            );
        }

        // The last basis vector only feeds H[m, m-1]; the solution lives in V[0..m].
        let y = back_substitution(&h, &rot.beta, m);
        let sol = basis
            .iter()
            .take(m)
            .zip(&y)
            .fold(x, |acc, (v, &yk)| ip.axpy(yk, v, &acc));

        let stats = SolveStats {
            iterations: m,
            residual_estimate: rot.residual(m),
        };
        debug!(
            "gmres: done, projected residual = {:.6e}",
            stats.residual_estimate.to_f64().unwrap_or(f64::NAN)
        );
        Ok((sol, stats))
    }
}

/// Run exactly `maxiter` GMRES steps on `A x = b` with the default threshold.
///
/// `x0 = None` starts from zero and takes `b` as the initial residual without
/// evaluating `A(0)`, which assumes `A` is linear. `maxiter == 0` is rejected.
pub fn gmres<A, V, T>(a: &A, b: &V, x0: Option<&V>, maxiter: usize) -> Result<V, KError>
where
    A: LinearOperator<V> + ?Sized,
    (): InnerProduct<V, Scalar = T> + VectorOps<V, Scalar = T>,
    V: Clone,
    T: Float,
{
    GmresSolver::new(maxiter).solve(a, b, x0).map(|(x, _)| x)
}
