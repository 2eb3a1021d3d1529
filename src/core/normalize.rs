//! Thresholded normalization for Krylov directions.

use crate::core::traits::{InnerProduct, VectorOps};
use num_traits::Float;

/// Norm at or below which [`safe_normalize`] returns the zero vector.
pub const DEFAULT_THRESHOLD: f64 = 1e-6;

/// Normalize `x`, returning `(x / ‖x‖, ‖x‖)`.
///
/// When `‖x‖ <= threshold` the direction is treated as collapsed and the zero vector
/// (same shape as `x`) is returned in its place, together with the untouched norm.
/// The zero vector is a sentinel, not an error: projections against it contribute
/// nothing, so downstream Gram–Schmidt steps degrade silently instead of producing
/// NaN/Inf.
pub fn safe_normalize<V, T>(x: &V, threshold: T) -> (V, T)
where
    (): InnerProduct<V, Scalar = T> + VectorOps<V, Scalar = T>,
    T: Float,
{
    let ip = ();
    let norm = ip.norm(x);
    if norm > threshold {
        (ip.scale(T::one() / norm, x), norm)
    } else {
        (ip.zeros_like(x), norm)
    }
}
