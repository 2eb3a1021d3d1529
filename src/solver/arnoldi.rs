//! One step of the Arnoldi process (modified Gram–Schmidt, single pass).

use crate::core::normalize::safe_normalize;
use crate::core::traits::{InnerProduct, VectorOps};
use faer::Mat;
use log::trace;
use num_traits::Float;

/// Orthogonalize `p = A(V[j-1])` against `basis[0..j]` and return the new basis vector `V[j]`.
///
/// Writes Hessenberg column `j - 1`: the projections `H[i, j-1]` for `i < j` and the
/// sub-diagonal entry `H[j, j-1] = ‖p‖` after orthogonalization. If that norm is at or
/// below `threshold` the zero vector is returned; later projections against it are zero,
/// so the process keeps going without signalling the breakdown.
///
/// Panics if `basis` holds fewer than `j` vectors.
pub fn arnoldi<V, T>(mut p: V, basis: &[V], h: &mut Mat<T>, j: usize, threshold: T) -> V
where
    (): InnerProduct<V, Scalar = T> + VectorOps<V, Scalar = T>,
    T: Float,
{
    let ip = ();
    for i in 0..j {
        let hij = ip.dot(&p, &basis[i]);
        h[(i, j - 1)] = hij;
        p = ip.axpy(-hij, &basis[i], &p);
    }
    let (v_next, norm) = safe_normalize(&p, threshold);
    h[(j, j - 1)] = norm;
    if norm <= threshold {
        trace!(
            "arnoldi: direction {} collapsed (|w| = {:.3e}), using zero vector",
            j,
            norm.to_f64().unwrap_or(f64::NAN)
        );
    }
    v_next
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn zeros(n: usize) -> Mat<f64> {
        Mat::zeros(n, n)
    }

    #[test]
    fn new_vector_is_orthonormal_to_basis() {
        let basis = vec![vec![1.0, 0.0, 0.0]];
        let mut h = zeros(3);
        let v1 = arnoldi(vec![2.0, 3.0, 4.0], &basis, &mut h, 1, 1e-6);
        assert_abs_diff_eq!(h[(0, 0)], 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(h[(1, 0)], 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v1[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v1[1], 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(v1[2], 0.8, epsilon = 1e-12);
    }

    #[test]
    fn dependent_direction_yields_zero_vector() {
        let basis = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        let mut h = zeros(3);
        let v2 = arnoldi(vec![3.0, -2.0], &basis, &mut h, 2, 1e-6);
        assert_eq!(v2, vec![0.0, 0.0]);
        assert_abs_diff_eq!(h[(0, 1)], 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(h[(1, 1)], -2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(h[(2, 1)], 0.0, epsilon = 1e-12);
    }

    #[test]
    #[should_panic]
    fn short_basis_panics() {
        let basis = vec![vec![1.0, 0.0]];
        let mut h = zeros(3);
        let _ = arnoldi(vec![1.0, 1.0], &basis, &mut h, 2, 1e-6);
    }

    #[test]
    fn zero_basis_vector_is_inert() {
        let basis = vec![vec![1.0, 0.0], vec![0.0, 0.0]];
        let mut h = zeros(3);
        let v2 = arnoldi(vec![1.0, 1.0], &basis, &mut h, 2, 1e-6);
        assert_eq!(h[(1, 1)], 0.0);
        assert_abs_diff_eq!(v2[1], 1.0, epsilon = 1e-12);
    }
}
