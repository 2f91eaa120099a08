mod psr;

use std::f64::consts::TAU;

use crate::{
    common::{Angle, rad},
    curve::DirectivityCurve,
    error::PsrError,
};

pub use psr::Psr;

/// A trait representing the directivity of a microphone array.
pub trait Directivity: Send + Sync {
    /// Calculates the (unnormalized) gain for a source at the given angle.
    ///
    /// # Arguments
    ///
    /// * `theta` - The angle between the array's axial direction and the source direction.
    #[must_use]
    fn directivity(&self, theta: Angle) -> f64;

    /// Samples the directivity uniformly over [0, 2π] with both endpoints included,
    /// normalizing every sample by the on-axis gain.
    ///
    /// # Errors
    ///
    /// Returns [`PsrError::TooFewSamples`] if `num_samples < 2`, or
    /// [`PsrError::InvalidReference`] if the on-axis gain is zero or not finite.
    fn synthesize_curve(&self, num_samples: usize) -> Result<DirectivityCurve, PsrError> {
        if num_samples < 2 {
            return Err(PsrError::TooFewSamples(num_samples));
        }
        let reference = self.directivity(Angle::ZERO);
        if !reference.is_finite() || reference == 0. {
            return Err(PsrError::InvalidReference(reference));
        }

        let step = TAU / (num_samples - 1) as f64;
        let angles = (0..num_samples)
            .map(|i| {
                if i == num_samples - 1 {
                    TAU
                } else {
                    i as f64 * step
                }
            })
            .collect::<Vec<_>>();
        let gains = angles
            .iter()
            .map(|&theta| self.directivity(theta * rad) / reference)
            .collect();

        DirectivityCurve::new(angles, gains)
    }
}
