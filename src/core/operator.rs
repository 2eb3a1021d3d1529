//! Closure adapters for matrix-free operators.
//!
//! Most callers never hold an explicit matrix: the operator is a closure over some
//! external state (a model, a PDE stencil, a Jacobian-vector product). These adapters
//! turn such closures into [`LinearOperator`]s without any internal state of their own.

use crate::core::traits::LinearOperator;
use crate::error::KError;
use std::marker::PhantomData;

/// Infallible closure `Fn(&V) -> V` viewed as a linear operator.
pub struct FnOperator<F, V> {
    f: F,
    _vec: PhantomData<fn(&V) -> V>,
}

impl<F, V> FnOperator<F, V>
where
    F: Fn(&V) -> V,
{
    pub fn new(f: F) -> Self {
        Self { f, _vec: PhantomData }
    }
}

impl<F, V> LinearOperator<V> for FnOperator<F, V>
where
    F: Fn(&V) -> V,
{
    fn apply(&self, x: &V) -> Result<V, KError> {
        Ok((self.f)(x))
    }
}

/// Fallible closure `Fn(&V) -> Result<V, E>`; errors surface as [`KError::Operator`].
pub struct TryFnOperator<F, V, E> {
    f: F,
    _sig: PhantomData<fn(&V) -> Result<V, E>>,
}

impl<F, V, E> TryFnOperator<F, V, E>
where
    F: Fn(&V) -> Result<V, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    pub fn new(f: F) -> Self {
        Self { f, _sig: PhantomData }
    }
}

impl<F, V, E> LinearOperator<V> for TryFnOperator<F, V, E>
where
    F: Fn(&V) -> Result<V, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    fn apply(&self, x: &V) -> Result<V, KError> {
        (self.f)(x).map_err(KError::operator)
    }
}

/// Shorthand for [`FnOperator::new`].
pub fn from_fn<F, V>(f: F) -> FnOperator<F, V>
where
    F: Fn(&V) -> V,
{
    FnOperator::new(f)
}

/// Shorthand for [`TryFnOperator::new`].
pub fn try_from_fn<F, V, E>(f: F) -> TryFnOperator<F, V, E>
where
    F: Fn(&V) -> Result<V, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    TryFnOperator::new(f)
}
