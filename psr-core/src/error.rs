use thiserror::Error;

use crate::common::Angle;

/// An error produced while building or sampling a directivity model.
#[derive(Error, Debug, PartialEq, Clone)]
#[non_exhaustive]
pub enum PsrError {
    /// The array radius is not a positive finite value.
    #[error("Array radius ({0}m) must be positive and finite")]
    InvalidRadius(f64),
    /// The base angle is outside (0, π).
    #[error("Base angle ({0:?}) must be in (0, π)")]
    InvalidBaseAngle(Angle),
    /// The grace angle is outside (0, π).
    #[error("Grace angle ({0:?}) must be in (0, π)")]
    InvalidGraceAngle(Angle),
    /// The speed of sound is not a positive finite value.
    #[error("Sound speed ({0}m/s) must be positive and finite")]
    InvalidSoundSpeed(f64),
    /// A curve needs at least two samples.
    #[error("At least 2 samples are required, but {0} were given")]
    TooFewSamples(usize),
    /// Angle and gain sequences differ in length.
    #[error("Number of angles ({angles}) does not match number of gains ({gains})")]
    LengthMismatch {
        /// The number of angles.
        angles: usize,
        /// The number of gains.
        gains: usize,
    },
    /// Angles are not strictly increasing.
    #[error("Angles must be strictly increasing, but angle[{0}] is not")]
    NonIncreasingAngles(usize),
    /// Angles are not evenly spaced.
    #[error("Angles must be evenly spaced, but angle[{0}] is not")]
    NonUniformSpacing(usize),
    /// Interpolation between two points with the same abscissa.
    #[error("Interpolation points must have distinct abscissas")]
    DivisionByZero,
    /// The on-axis gain cannot be used as a normalization reference.
    #[error("On-axis gain ({0}) cannot be used as a normalization reference")]
    InvalidReference(f64),
}
