use derive_more::Display;
use getset::{CopyGetters, Getters};

use crate::error::FitError;

/// Dynamically sized column vector used by [`Minimizer`]s.
pub type VectorX = nalgebra::DVector<f64>;

/// Why a [`Minimizer`] stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum Termination {
    /// The convergence criteria were met.
    #[display("converged")]
    Converged,
    /// The iteration budget was exhausted.
    #[display("maximum number of iterations reached")]
    MaxIterations,
    /// The function evaluation budget was exhausted.
    #[display("maximum number of function evaluations reached")]
    MaxEvaluations,
}

/// The outcome of a minimization.
#[derive(Clone, Debug, PartialEq, Getters, CopyGetters)]
pub struct Minimum {
    #[getset(get = "pub")]
    /// The best point found.
    x: VectorX,
    #[getset(get_copy = "pub")]
    /// The objective value at [`Minimum::x`].
    fun: f64,
    #[getset(get_copy = "pub")]
    /// The number of iterations.
    iterations: usize,
    #[getset(get_copy = "pub")]
    /// The number of objective evaluations.
    evaluations: usize,
    #[getset(get_copy = "pub")]
    /// Why the minimizer stopped.
    termination: Termination,
}

impl Minimum {
    /// Creates a new [`Minimum`].
    #[must_use]
    pub fn new(
        x: VectorX,
        fun: f64,
        iterations: usize,
        evaluations: usize,
        termination: Termination,
    ) -> Self {
        Self {
            x,
            fun,
            iterations,
            evaluations,
            termination,
        }
    }

    /// Consumes `self` and returns the best point found.
    #[must_use]
    pub fn into_x(self) -> VectorX {
        self.x
    }
}

/// A local minimizer of scalar functions that does not require derivatives.
///
/// Implementations must be deterministic: the same objective and starting point yield the
/// same [`Minimum`].
pub trait Minimizer {
    /// Searches for a local minimum of `f` starting from `x0`.
    fn minimize<F>(&self, f: F, x0: VectorX) -> Result<Minimum, FitError>
    where
        F: FnMut(&VectorX) -> f64;
}
