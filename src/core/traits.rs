//! Core linear-algebra traits for krylov-step.

use crate::error::KError;

/// Matrix-free linear operator: y ← A(x).
///
/// The solvers only ever see `A` through this trait. Implementations are expected
/// to be linear and side-effect free; neither property is checked.
pub trait LinearOperator<V> {
    /// Compute y = A(x). A failure aborts the surrounding solve.
    fn apply(&self, x: &V) -> Result<V, KError>;
}

impl<V, A: LinearOperator<V> + ?Sized> LinearOperator<V> for &A {
    fn apply(&self, x: &V) -> Result<V, KError> {
        (**self).apply(x)
    }
}

impl<V, A: LinearOperator<V> + ?Sized> LinearOperator<V> for Box<A> {
    fn apply(&self, x: &V) -> Result<V, KError> {
        (**self).apply(x)
    }
}

/// Inner products & norms.
pub trait InnerProduct<V> {
    /// Associated scalar type.
    type Scalar: num_traits::Float;
    /// Compute dot(x, y).
    fn dot(&self, x: &V, y: &V) -> Self::Scalar;
    /// Compute ‖x‖₂.
    fn norm(&self, x: &V) -> Self::Scalar;
}

/// Out-of-place vector arithmetic. Every result is a fresh vector of the
/// same shape as the inputs; mismatched shapes are a caller bug and panic.
pub trait VectorOps<V> {
    type Scalar: num_traits::Float;
    /// Zero vector shaped like `x`.
    fn zeros_like(&self, x: &V) -> V;
    /// alpha · x
    fn scale(&self, alpha: Self::Scalar, x: &V) -> V;
    /// x + y
    fn add(&self, x: &V, y: &V) -> V;
    /// x − y
    fn sub(&self, x: &V, y: &V) -> V;
    /// y + alpha · x
    fn axpy(&self, alpha: Self::Scalar, x: &V, y: &V) -> V;
}
