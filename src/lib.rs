//! krylov-step: fixed-iteration Krylov solvers over matrix-free operators
//!
//! This crate provides truncated Conjugate Gradient and GMRES for `A x = b` where `A` is only
//! available as a linear operator. Both solvers run a fixed number of iterations with no
//! tolerance check, which makes them bounded-cost correction steps inside a larger iterative
//! process rather than general-purpose solvers.
//!
//! ```rust
//! use krylov_step::{conjugate_gradient, from_fn, gmres};
//!
//! let a = from_fn(|x: &Vec<f64>| -> Vec<f64> { vec![x[0], 2.0 * x[1], 3.0 * x[2]] });
//! let b = vec![1.0, 1.0, 1.0];
//! let x_cg = conjugate_gradient(&a, &b, None, 3).unwrap();
//! let x_gm = gmres(&a, &b, None, 3).unwrap();
//! assert!((x_cg[1] - 0.5).abs() < 1e-10);
//! assert!((x_gm[2] - 1.0 / 3.0).abs() < 1e-10);
//! ```

pub mod config;
pub mod context;
pub mod core;
pub mod error;
pub mod solver;
pub mod utils;

// Re-exports for convenience
pub use config::*;
pub use context::*;
pub use crate::core::*;
pub use error::*;
pub use solver::*;
pub use utils::*;
