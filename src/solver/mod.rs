//! Fixed-iteration Krylov solver interfaces.

use crate::error::KError;
use crate::utils::stats::SolveStats;

/// Common interface for the fixed-iteration solvers.
pub trait LinearSolver<A: ?Sized, V> {
    type Scalar: Copy;
    /// Approximate A·x = b starting from `x0` (zero when `None`).
    /// Returns the new iterate together with its stats.
    fn solve(
        &self,
        a: &A,
        b: &V,
        x0: Option<&V>,
    ) -> Result<(V, SolveStats<Self::Scalar>), KError>;
}

pub mod arnoldi;
pub use arnoldi::arnoldi;

pub mod givens;
pub use givens::{RotationState, apply_rotation, cal_rotation};

pub mod cg;
pub use cg::{CgSolver, conjugate_gradient};

pub mod gmres;
pub use gmres::{GmresSolver, back_substitution, gmres};
