//! Context module for krylov-step.
//!
//! Contexts encapsulate algorithm selection and parameter management, so callers can
//! switch between CG and GMRES from configuration without touching solver types.
//!
//! - [`ksp_context`]: the `KspContext` struct.
//!
//! # Example
//! ```rust
//! use faer::Mat;
//! use krylov_step::{KspContext, SolverKind, SolverOptions};
//!
//! let a: Mat<f64> = Mat::from_fn(2, 2, |i, j| if i == j { 2.0 } else { 0.0 });
//! let ksp = KspContext::new(SolverKind::Gmres, a, SolverOptions::default());
//! let (x, _stats) = ksp.solve(&vec![2.0, 4.0], None).unwrap();
//! assert!((x[0] - 1.0).abs() < 1e-12);
//! ```

pub mod ksp_context;
pub use ksp_context::KspContext;
