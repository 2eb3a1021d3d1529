use thiserror::Error;

// Unified error type for krylov-step

#[derive(Error, Debug)]
pub enum KError {
    #[error("maxiter must be at least 1 (got {0})")]
    InvalidMaxIter(usize),
    #[error("linear operator failed: {0}")]
    Operator(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("scalar type cannot represent {0}")]
    ScalarCast(f64),
    #[error("unsupported operation: {0}")]
    Unsupported(String),
}

impl KError {
    /// Wrap an arbitrary operator failure.
    pub fn operator<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        KError::Operator(Box::new(err))
    }
}

/// Convert an `f64` constant into the solver's scalar type.
pub(crate) fn cast_scalar<T: num_traits::NumCast>(value: f64) -> Result<T, KError> {
    num_traits::cast::<f64, T>(value).ok_or(KError::ScalarCast(value))
}
