//! Conjugate Gradient (unpreconditioned) per Saad §6.7, run for a fixed number of steps.
//!
//! There is no tolerance check and no breakdown guard: a zero `p·Ap` or a zero `r·r`
//! divides by zero and the resulting NaN/Inf flows into the returned iterate. The
//! solver is a fixed-cost building block, so it always performs exactly `maxiter`
//! steps.

use crate::config::SolverOptions;
use crate::core::traits::{InnerProduct, LinearOperator, VectorOps};
use crate::error::KError;
use crate::solver::LinearSolver;
use crate::utils::stats::SolveStats;
use log::{debug, trace};
use num_traits::Float;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CgSolver {
    pub maxiter: usize,
}

impl CgSolver {
    pub fn new(maxiter: usize) -> Self {
        Self { maxiter }
    }

    pub fn from_options(opts: &SolverOptions) -> Self {
        Self::new(opts.maxiter)
    }
}

impl<A, V, T> LinearSolver<A, V> for CgSolver
where
    A: LinearOperator<V> + ?Sized,
    (): InnerProduct<V, Scalar = T> + VectorOps<V, Scalar = T>,
    V: Clone,
    T: Float,
{
    type Scalar = T;

    fn solve(&self, a: &A, b: &V, x0: Option<&V>) -> Result<(V, SolveStats<T>), KError> {
        if self.maxiter == 0 {
            return Err(KError::InvalidMaxIter(self.maxiter));
        }
        let ip = ();
        debug!("cg: maxiter = {}, initial guess = {}", self.maxiter, x0.is_some());

        // Without a guess, x = 0 and r = b - A(0) = b for a linear A.
        let (mut x, mut r) = match x0 {
            Some(x0) => (x0.clone(), ip.sub(b, &a.apply(x0)?)),
            None => (ip.zeros_like(b), b.clone()),
        };
        let mut p = r.clone();
        let mut rr = ip.dot(&r, &r);

        for k in 0..self.maxiter {
            let ap = a.apply(&p)?;
            let p_ap = ip.dot(&p, &ap);
            let alpha = rr / p_ap;
            let x_new = ip.axpy(alpha, &p, &x);
            let r_new = ip.axpy(-alpha, &ap, &r);
            let rr_new = ip.dot(&r_new, &r_new);
            let beta = rr_new / rr;
            let p_new = ip.axpy(beta, &p, &r_new);

            (x, r, p, rr) = (x_new, r_new, p_new, rr_new);
            trace!(
                "cg iteration {}: |r| = {:.6e}",
                k + 1,
                rr.sqrt().to_f64().unwrap_or(f64::NAN)
            );
        }

        let stats = SolveStats {
            iterations: self.maxiter,
            residual_estimate: rr.sqrt(),
        };
        debug!(
            "cg: done, residual estimate = {:.6e}",
            stats.residual_estimate.to_f64().unwrap_or(f64::NAN)
        );
        Ok((x, stats))
    }
}

/// Run exactly `maxiter` CG steps on `A x = b`.
///
/// `x0 = None` starts from the zero vector and uses `b` as the initial residual
/// without evaluating `A(0)`; this assumes `A` is linear. `maxiter == 0` is rejected.
pub fn conjugate_gradient<A, V, T>(a: &A, b: &V, x0: Option<&V>, maxiter: usize) -> Result<V, KError>
where
    A: LinearOperator<V> + ?Sized,
    (): InnerProduct<V, Scalar = T> + VectorOps<V, Scalar = T>,
    V: Clone,
    T: Float,
{
    CgSolver::new(maxiter).solve(a, b, x0).map(|(x, _)| x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::operator::from_fn;
    use approx::assert_abs_diff_eq;
    use faer::Mat;

    #[test]
    fn cg_solves_simple_spd() {
        // SPD system: [[4,1],[1,3]] x = [1,2]
        let a = Mat::from_fn(2, 2, |i, j| [[4.0, 1.0], [1.0, 3.0]][i][j]);
        let b = vec![1.0, 2.0];
        let x = conjugate_gradient(&a, &b, None, 2).unwrap();
        let expected = [0.09090909090909091, 0.6363636363636364];
        for (xi, ei) in x.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(*xi, *ei, epsilon = 1e-10);
        }
    }

    #[test]
    fn cg_diagonal_three_steps() {
        let a = from_fn(|x: &Vec<f64>| -> Vec<f64> { vec![x[0], 2.0 * x[1], 3.0 * x[2]] });
        let x = conjugate_gradient(&a, &vec![1.0, 1.0, 1.0], None, 3).unwrap();
        assert_abs_diff_eq!(x[0], 1.0, epsilon = 1e-10);
        assert_abs_diff_eq!(x[1], 0.5, epsilon = 1e-10);
        assert_abs_diff_eq!(x[2], 1.0 / 3.0, epsilon = 1e-10);
    }

    #[test]
    fn cg_calls_operator_once_per_step() {
        use std::cell::Cell;
        let calls = Cell::new(0usize);
        let a = from_fn(|x: &Vec<f64>| -> Vec<f64> {
            calls.set(calls.get() + 1);
            x.iter().map(|v| 2.0 * v).collect()
        });
        let _ = conjugate_gradient(&a, &vec![1.0, 1.0], None, 4).unwrap();
        assert_eq!(calls.get(), 4);
        calls.set(0);
        let _ = conjugate_gradient(&a, &vec![1.0, 1.0], Some(&vec![0.1, 0.2]), 4).unwrap();
        assert_eq!(calls.get(), 5);
    }

    #[test]
    fn cg_runs_past_exact_convergence_into_nan() {
        // A = 2I converges in one step; the second step divides 0 by 0.
        let a = from_fn(|x: &Vec<f64>| -> Vec<f64> { x.iter().map(|v| 2.0 * v).collect() });
        let x = conjugate_gradient(&a, &vec![1.0, 1.0], None, 2).unwrap();
        assert_eq!(x.len(), 2);
        assert!(x.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn cg_rejects_zero_maxiter() {
        let a = from_fn(|x: &Vec<f64>| -> Vec<f64> { x.clone() });
        let err = conjugate_gradient(&a, &vec![1.0], None, 0).unwrap_err();
        assert!(matches!(err, KError::InvalidMaxIter(0)));
    }

    #[test]
    fn cg_reports_recurrence_residual() {
        let a = Mat::from_fn(2, 2, |i, j| [[4.0, 1.0], [1.0, 3.0]][i][j]);
        let (_, stats) = CgSolver::new(2).solve(&a, &vec![1.0, 2.0], None).unwrap();
        assert_eq!(stats.iterations, 2);
        assert!(stats.residual_estimate < 1e-10);
    }
}
