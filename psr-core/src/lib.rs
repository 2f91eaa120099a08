#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Core types and the closed-form directivity model of Pulse-Shift-Ratio (PSR) microphone arrays.
//!
//! # Example
//!
//! ```
//! use psr_core::{
//!     acoustics::directivity::{Directivity, Psr},
//!     common::deg,
//!     geometry::ArrayGeometry,
//! };
//!
//! # fn main() -> Result<(), psr_core::error::PsrError> {
//! let geometry = ArrayGeometry::new(0.155, 72. * deg)?;
//! let psr = Psr::new(geometry);
//! let curve = psr.synthesize_curve(5000)?;
//! assert_eq!(1.0, curve.gains()[0]);
//! # Ok(())
//! # }
//! ```

/// Utilities for acoustics.
pub mod acoustics;
/// Common constants, angle units and scalar helpers.
pub mod common;
/// Sampled directivity curves.
pub mod curve;
/// Error types.
pub mod error;
/// Array geometry.
pub mod geometry;
