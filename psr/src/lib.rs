#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Directivity modelling and trigonometric-polynomial fitting for Pulse-Shift-Ratio (PSR) microphone arrays.
//!
//! # Example
//!
//! ```
//! use psr::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let geometry = ArrayGeometry::new(0.155, 72. * deg)?;
//! let psr = Psr::new(geometry);
//! let curve = psr.synthesize_curve(5000)?;
//! let result = PatternFitter::new(&psr, &curve, FitOption::default())?.fit(2)?;
//! assert!((result.coefficients().sum() - 1.).abs() < 1e-6);
//! # Ok(())
//! # }
//! ```

#[cfg_attr(docsrs, doc(cfg(feature = "plot")))]
#[cfg(feature = "plot")]
/// Polar plots of directivity patterns in the terminal.
pub mod plot;
/// Commonly used types.
pub mod prelude;

pub use psr_core as model;
pub use psr_fit as fit;
