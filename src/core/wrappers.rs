//! Wrappers for faer dense matrix types and vector operations.
//!
//! This module implements the core traits for `Vec<T>`, `faer::Mat<T>` and `faer::MatRef<T>`,
//! so that they can be used as vectors and operators in the fixed-iteration solvers.
//!
//! # Vector representations
//! - `Vec<T>`: a plain real vector. Dot products and norms use Rayon when the `rayon`
//!   feature is enabled.
//! - `Mat<f32>` / `Mat<f64>`: a batched (tensorized) vector. Algebraically it is a single vector of
//!   `nrows * ncols` entries, so the inner product is the Frobenius inner product and
//!   the norm is the Frobenius norm.
//!
//! # Operators
//! - `Mat<T>` / `MatRef<T>` acting on `Vec<T>`: dense matrix-vector product.
//! - `Mat` / `MatRef` acting on `Mat`: the same matrix applied to every column
//!   (faer's own product), i.e. a block-diagonal operator over the batch.
//!
//! Shape mismatches panic, like any out-of-bounds access in the vector layer.
//!
//! # References
//! - [faer crate documentation](https://docs.rs/faer)
//! - [num-traits crate documentation](https://docs.rs/num-traits)

use crate::core::traits::{InnerProduct, LinearOperator, VectorOps};
use crate::error::KError;
use faer::{Mat, MatRef};
use num_traits::Float;

fn dense_matvec<T: Float>(a: MatRef<'_, T>, x: &[T]) -> Vec<T> {
    assert_eq!(a.ncols(), x.len(), "Input vector x has incorrect length");
    (0..a.nrows())
        .map(|i| {
            (0..a.ncols()).fold(T::zero(), |acc, j| acc + a[(i, j)] * x[j])
        })
        .collect()
}

/// Dense matrix-vector product `y = A * x`.
impl<T: Float> LinearOperator<Vec<T>> for Mat<T> {
    fn apply(&self, x: &Vec<T>) -> Result<Vec<T>, KError> {
        Ok(dense_matvec(self.as_ref(), x))
    }
}

/// Dense matrix-vector product for a matrix reference.
impl<'a, T: Float> LinearOperator<Vec<T>> for MatRef<'a, T> {
    fn apply(&self, x: &Vec<T>) -> Result<Vec<T>, KError> {
        Ok(dense_matvec(*self, x))
    }
}

/// Implements inner product and norm for vectors, with optional Rayon parallelism.
impl<T: Float + Send + Sync> InnerProduct<Vec<T>> for () {
    type Scalar = T;
    /// Computes the dot product of two vectors: `x^T y`.
    fn dot(&self, x: &Vec<T>, y: &Vec<T>) -> T {
        assert_eq!(x.len(), y.len(), "Vectors must have the same length");
        #[cfg(feature = "rayon")]
        {
            use rayon::prelude::*;
            x.as_slice()
                .par_iter()
                .zip(y.as_slice().par_iter())
                .map(|(xi, yi)| *xi * *yi)
                .reduce(|| T::zero(), |acc, v| acc + v)
        }
        #[cfg(not(feature = "rayon"))]
        {
            x.iter()
                .zip(y.iter())
                .map(|(xi, yi)| *xi * *yi)
                .fold(T::zero(), |acc, v| acc + v)
        }
    }
    /// Computes the Euclidean norm of a vector: `||x||_2`.
    fn norm(&self, x: &Vec<T>) -> T {
        self.dot(x, x).sqrt()
    }
}

impl<T: Float> VectorOps<Vec<T>> for () {
    type Scalar = T;
    fn zeros_like(&self, x: &Vec<T>) -> Vec<T> {
        vec![T::zero(); x.len()]
    }
    fn scale(&self, alpha: T, x: &Vec<T>) -> Vec<T> {
        x.iter().map(|&xi| alpha * xi).collect()
    }
    fn add(&self, x: &Vec<T>, y: &Vec<T>) -> Vec<T> {
        assert_eq!(x.len(), y.len(), "Vectors must have the same length");
        x.iter().zip(y).map(|(&xi, &yi)| xi + yi).collect()
    }
    fn sub(&self, x: &Vec<T>, y: &Vec<T>) -> Vec<T> {
        assert_eq!(x.len(), y.len(), "Vectors must have the same length");
        x.iter().zip(y).map(|(&xi, &yi)| xi - yi).collect()
    }
    fn axpy(&self, alpha: T, x: &Vec<T>, y: &Vec<T>) -> Vec<T> {
        assert_eq!(x.len(), y.len(), "Vectors must have the same length");
        x.iter().zip(y).map(|(&xi, &yi)| yi + alpha * xi).collect()
    }
}

fn assert_same_shape<T>(x: &Mat<T>, y: &Mat<T>) {
    assert_eq!(
        (x.nrows(), x.ncols()),
        (y.nrows(), y.ncols()),
        "Batched vectors must have the same shape"
    );
}

/// Batched operator, inner product and vector arithmetic for `faer::Mat`.
///
/// faer's matrix product and `Mat::zeros` are only available for faer's own scalar
/// types, so these impls are stamped out per real scalar rather than over `T: Float`.
macro_rules! impl_batched {
    ($t:ty) => {
        /// Batched product `Y = A * X`, one column of `X` per batch entry.
        impl LinearOperator<Mat<$t>> for Mat<$t> {
            fn apply(&self, x: &Mat<$t>) -> Result<Mat<$t>, KError> {
                assert_eq!(self.ncols(), x.nrows(), "Input batch x has incorrect row count");
                Ok(self.as_ref() * x.as_ref())
            }
        }

        impl<'a> LinearOperator<Mat<$t>> for MatRef<'a, $t> {
            fn apply(&self, x: &Mat<$t>) -> Result<Mat<$t>, KError> {
                assert_eq!(self.ncols(), x.nrows(), "Input batch x has incorrect row count");
                Ok(*self * x.as_ref())
            }
        }

        /// Frobenius inner product and norm for batched vectors.
        impl InnerProduct<Mat<$t>> for () {
            type Scalar = $t;
            fn dot(&self, x: &Mat<$t>, y: &Mat<$t>) -> $t {
                assert_same_shape(x, y);
                let mut acc: $t = 0.0;
                for j in 0..x.ncols() {
                    for i in 0..x.nrows() {
                        acc += x[(i, j)] * y[(i, j)];
                    }
                }
                acc
            }
            fn norm(&self, x: &Mat<$t>) -> $t {
                self.dot(x, x).sqrt()
            }
        }

        impl VectorOps<Mat<$t>> for () {
            type Scalar = $t;
            fn zeros_like(&self, x: &Mat<$t>) -> Mat<$t> {
                Mat::zeros(x.nrows(), x.ncols())
            }
            fn scale(&self, alpha: $t, x: &Mat<$t>) -> Mat<$t> {
                Mat::from_fn(x.nrows(), x.ncols(), |i, j| alpha * x[(i, j)])
            }
            fn add(&self, x: &Mat<$t>, y: &Mat<$t>) -> Mat<$t> {
                assert_same_shape(x, y);
                x + y
            }
            fn sub(&self, x: &Mat<$t>, y: &Mat<$t>) -> Mat<$t> {
                assert_same_shape(x, y);
                x - y
            }
            fn axpy(&self, alpha: $t, x: &Mat<$t>, y: &Mat<$t>) -> Mat<$t> {
                assert_same_shape(x, y);
                Mat::from_fn(x.nrows(), x.ncols(), |i, j| y[(i, j)] + alpha * x[(i, j)])
            }
        }
    };
}

impl_batched!(f32);
impl_batched!(f64);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn batched_dot_is_frobenius() {
        let x = Mat::from_fn(2, 2, |i, j| (i * 2 + j) as f64 + 1.0);
        let ip = ();
        assert_abs_diff_eq!(ip.dot(&x, &x), 1.0 + 4.0 + 9.0 + 16.0, epsilon = 1e-12);
        assert_abs_diff_eq!(ip.norm(&x), 30.0f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn batched_operator_acts_per_column() {
        let a = Mat::from_fn(2, 2, |i, j| if i == j { (i + 1) as f64 } else { 0.0 });
        let x = Mat::from_fn(2, 3, |_, j| j as f64);
        let y: Mat<f64> = a.apply(&x).unwrap();
        for j in 0..3 {
            assert_abs_diff_eq!(y[(0, j)], j as f64, epsilon = 1e-12);
            assert_abs_diff_eq!(y[(1, j)], 2.0 * j as f64, epsilon = 1e-12);
        }
    }

    #[test]
    fn batched_operator_through_matref_and_zeros() {
        let a = Mat::<f64>::identity(3, 3);
        let x = Mat::from_fn(3, 2, |i, j| (i + 3 * j) as f64);
        let y: Mat<f64> = a.as_ref().apply(&x).unwrap();
        let ip = ();
        assert_abs_diff_eq!(ip.norm(&ip.sub(&y, &x)), 0.0, epsilon = 1e-15);
        let z = ip.zeros_like(&x);
        assert_eq!((z.nrows(), z.ncols()), (3, 2));
        assert_eq!(ip.norm(&z), 0.0);
    }

    #[test]
    fn axpy_adds_scaled_vector() {
        let ip = ();
        let z = ip.axpy(2.0, &vec![1.0, -1.0], &vec![0.5, 0.5]);
        assert_eq!(z, vec![2.5, -1.5]);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn mismatched_lengths_panic() {
        let ip = ();
        let _ = VectorOps::sub(&ip, &vec![1.0, 2.0], &vec![1.0]);
    }
}
