//! Incremental QR of the Arnoldi Hessenberg matrix via Givens rotations.
//!
//! Each new Hessenberg column is first rotated by every previously computed rotation,
//! then a fresh rotation zeroes its sub-diagonal entry. Column `j` costs `O(j)`, so the
//! whole factorization over `maxiter` columns is `O(maxiter²)` and the full matrix is
//! never refactored.
//!
//! Convention: rotation `(c, s)` maps rows `(i, i+1)` as
//! ```text
//! [ c  -s ] [ h_i   ]
//! [ s   c ] [ h_i+1 ]
//! ```

use faer::Mat;
use num_traits::Float;

/// Compute `(cos, sin)` with `c = a / r`, `s = -b / r`, `r = sqrt(a² + b²)`.
///
/// `a = b = 0` divides by zero and yields NaN.
pub fn cal_rotation<T: Float>(a: T, b: T) -> (T, T) {
    let r = (a * a + b * b).sqrt();
    (a / r, -b / r)
}

/// Triangularize Hessenberg column `j` in place and record its rotation in `cs[j]`, `ss[j]`.
pub fn apply_rotation<T: Float>(h: &mut Mat<T>, cs: &mut [T], ss: &mut [T], j: usize) {
    for i in 0..j {
        let tmp = cs[i] * h[(i, j)] - ss[i] * h[(i + 1, j)];
        h[(i + 1, j)] = cs[i] * h[(i + 1, j)] + ss[i] * h[(i, j)];
        h[(i, j)] = tmp;
    }
    let (c, s) = cal_rotation(h[(j, j)], h[(j + 1, j)]);
    cs[j] = c;
    ss[j] = s;
    h[(j, j)] = c * h[(j, j)] - s * h[(j + 1, j)];
    h[(j + 1, j)] = T::zero();
}

/// Givens bookkeeping for one GMRES call: rotation history and the projected residual.
#[derive(Debug, Clone)]
pub struct RotationState<T> {
    /// Cosines, one per applied rotation.
    pub cs: Vec<T>,
    /// Sines, one per applied rotation.
    pub ss: Vec<T>,
    /// Projected right-hand side, `‖r0‖ e_1` rotated in lockstep with `H`.
    pub beta: Vec<T>,
}

impl<T: Float> RotationState<T> {
    pub fn new(maxiter: usize, initial_residual: T) -> Self {
        let mut beta = vec![T::zero(); maxiter + 1];
        beta[0] = initial_residual;
        Self {
            cs: vec![T::zero(); maxiter],
            ss: vec![T::zero(); maxiter],
            beta,
        }
    }

    /// Rotate column `j` of `h`, then push the same rotation through `beta`.
    pub fn rotate(&mut self, h: &mut Mat<T>, j: usize) {
        apply_rotation(h, &mut self.cs, &mut self.ss, j);
        self.beta[j + 1] = self.ss[j] * self.beta[j];
        self.beta[j] = self.cs[j] * self.beta[j];
    }

    /// Norm of the current least-squares residual, `|beta[j+1]|` after `j+1` rotations.
    pub fn residual(&self, applied: usize) -> T {
        self.beta[applied].abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn rotation_of_three_four() {
        let (c, s) = cal_rotation(3.0, 4.0);
        assert_abs_diff_eq!(c, 0.6, epsilon = 1e-15);
        assert_abs_diff_eq!(s, -0.8, epsilon = 1e-15);
        assert_abs_diff_eq!(c * c + s * s, 1.0, epsilon = 1e-15);
    }

    #[test]
    fn rotation_zeroes_subdiagonal() {
        let mut h = Mat::<f64>::zeros(2, 2);
        h[(0, 0)] = 3.0;
        h[(1, 0)] = 4.0;
        let mut cs = vec![0.0];
        let mut ss = vec![0.0];
        apply_rotation(&mut h, &mut cs, &mut ss, 0);
        assert_abs_diff_eq!(h[(0, 0)], 5.0, epsilon = 1e-14);
        assert_eq!(h[(1, 0)], 0.0);
        assert_abs_diff_eq!(cs[0], 0.6, epsilon = 1e-15);
        assert_abs_diff_eq!(ss[0], -0.8, epsilon = 1e-15);
    }

    #[test]
    fn previous_rotations_are_replayed_on_new_column() {
        let mut h = Mat::<f64>::zeros(3, 3);
        h[(0, 0)] = 3.0;
        h[(1, 0)] = 4.0;
        h[(0, 1)] = 1.0;
        h[(1, 1)] = 2.0;
        h[(2, 1)] = 2.0;
        let mut state = RotationState::new(2, 10.0);
        state.rotate(&mut h, 0);
        state.rotate(&mut h, 1);
        // Column 1 after rotation 0: [0.6*1 + 0.8*2, -0.8*1 + 0.6*2] = [2.2, 0.4]
        assert_abs_diff_eq!(h[(0, 1)], 2.2, epsilon = 1e-14);
        // Then rotation 1 folds (0.4, 2.0) into sqrt(0.16 + 4).
        assert_abs_diff_eq!(h[(1, 1)], 4.16f64.sqrt(), epsilon = 1e-14);
        assert_eq!(h[(2, 1)], 0.0);
        // The rotated residual keeps its norm.
        let norm: f64 = state.beta.iter().map(|b| b * b).sum::<f64>().sqrt();
        assert_abs_diff_eq!(norm, 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(state.residual(2), state.beta[2].abs(), epsilon = 0.0);
    }
}
