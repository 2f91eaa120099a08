use psr_core::error::PsrError;
use thiserror::Error;

use crate::Termination;

/// An error produced while fitting a trigonometric polynomial.
#[derive(Error, Debug, PartialEq, Clone)]
#[non_exhaustive]
pub enum FitError {
    /// The polynomial order must be at least 1.
    #[error("Polynomial order must be at least 1")]
    InvalidOrder,
    /// The blend weight is outside [0, 1].
    #[error("Blend weight ({0}) must be in [0, 1]")]
    InvalidLambda(f64),
    /// A convergence tolerance is negative or not finite.
    #[error("Tolerance ({0}) must be non-negative and finite")]
    InvalidTolerance(f64),
    /// The starting point of a minimization is empty.
    #[error("Starting point must have at least one parameter")]
    EmptyParameter,
    /// A vector has an unexpected number of elements.
    #[error("Expected {expected} parameters, but got {actual}")]
    DimensionMismatch {
        /// The expected number of elements.
        expected: usize,
        /// The actual number of elements.
        actual: usize,
    },
    /// The minimizer stopped before meeting its convergence criteria.
    #[error("Minimizer did not converge ({termination}) after {iterations} iterations and {evaluations} evaluations, cost = {cost}")]
    NotConverged {
        /// Why the minimizer stopped.
        termination: Termination,
        /// The number of iterations.
        iterations: usize,
        /// The number of objective evaluations.
        evaluations: usize,
        /// The objective value at the returned point.
        cost: f64,
    },
    /// An error from the directivity model.
    #[error("{0}")]
    Core(#[from] PsrError),
}
