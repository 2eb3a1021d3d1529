//! Core traits, vector layer and operator adapters.

pub mod normalize;
pub mod operator;
pub mod traits;
pub mod wrappers;

pub use normalize::{DEFAULT_THRESHOLD, safe_normalize};
pub use operator::{FnOperator, TryFnOperator, from_fn, try_from_fn};
pub use traits::{InnerProduct, LinearOperator, VectorOps};
