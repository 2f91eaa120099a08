#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! This crate approximates PSR directivity patterns with low-order trigonometric polynomials in `cos(θ)`.
//!
//! # Example
//!
//! ```
//! use psr_core::{acoustics::directivity::Psr, common::deg, geometry::ArrayGeometry};
//! use psr_fit::{FitOption, PatternFitter};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let psr = Psr::new(ArrayGeometry::new(0.155, 72. * deg)?);
//! let fitter = PatternFitter::from_psr(&psr, FitOption::default())?;
//! let result = fitter.fit(2)?;
//! assert_eq!(3, result.coefficients().len());
//! # Ok(())
//! # }
//! ```

mod error;
mod fitter;
mod minimizer;
mod nelder_mead;
mod objective;
/// Trigonometric polynomials in `cos(θ)`.
pub mod trig;

pub use error::FitError;
pub use fitter::{DEFAULT_TOLERANCE, FitOption, FitResult, PatternFitter};
pub use minimizer::{Minimizer, Minimum, Termination, VectorX};
pub use nelder_mead::{NelderMead, NelderMeadOption};
pub use objective::FitObjective;
pub use trig::TrigCoefficients;
