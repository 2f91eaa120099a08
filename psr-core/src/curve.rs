use itertools::Itertools;

use crate::error::PsrError;

const UNIFORM_TOLERANCE: f64 = 1e-9;

/// A directivity pattern sampled at strictly increasing angles.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectivityCurve {
    angles: Vec<f64>,
    gains: Vec<f64>,
}

impl DirectivityCurve {
    /// Creates a new [`DirectivityCurve`].
    ///
    /// # Errors
    ///
    /// Returns [`PsrError::LengthMismatch`] if `angles` and `gains` differ in length,
    /// [`PsrError::TooFewSamples`] if there are fewer than two samples, or
    /// [`PsrError::NonIncreasingAngles`] if `angles` is not strictly increasing.
    pub fn new(angles: Vec<f64>, gains: Vec<f64>) -> Result<Self, PsrError> {
        if angles.len() != gains.len() {
            return Err(PsrError::LengthMismatch {
                angles: angles.len(),
                gains: gains.len(),
            });
        }
        if angles.len() < 2 {
            return Err(PsrError::TooFewSamples(angles.len()));
        }
        if let Some((i, _)) = angles
            .iter()
            .tuple_windows()
            .find_position(|(a, b)| !(a < b))
        {
            return Err(PsrError::NonIncreasingAngles(i + 1));
        }
        Ok(Self { angles, gains })
    }

    /// Gets the sampled angles \[rad\].
    #[must_use]
    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    /// Gets the sampled gains.
    #[must_use]
    pub fn gains(&self) -> &[f64] {
        &self.gains
    }

    /// Gets the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    /// Returns `true` if the curve has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// Gets the spacing between the first two samples \[rad\].
    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.angles[1] - self.angles[0]
    }

    /// Gets the sample spacing \[rad\], checking that every step matches the first one.
    ///
    /// # Errors
    ///
    /// Returns [`PsrError::NonUniformSpacing`] with the index of the first sample whose step
    /// differs from [`DirectivityCurve::spacing`] by more than a relative `1e-9`.
    pub fn uniform_spacing(&self) -> Result<f64, PsrError> {
        let spacing = self.spacing();
        match self
            .angles
            .iter()
            .tuple_windows()
            .find_position(|(a, b)| ((*b - *a) - spacing).abs() > UNIFORM_TOLERANCE * spacing)
        {
            Some((i, _)) => Err(PsrError::NonUniformSpacing(i + 1)),
            None => Ok(spacing),
        }
    }

    /// Returns an iterator over `(angle, gain)` pairs.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (f64, f64)> + '_ {
        self.angles.iter().copied().zip(self.gains.iter().copied())
    }

    /// Converts the gains into decibels, `20·log10(|g| + 1e-3)`, clipped below `floor_db`.
    #[must_use]
    pub fn to_db(&self, floor_db: f64) -> Vec<f64> {
        self.gains.iter().map(|&g| gain_to_db(g, floor_db)).collect()
    }
}

/// Converts a gain into decibels, `20·log10(|g| + 1e-3)`, clipped below `floor_db`.
#[inline]
#[must_use]
pub fn gain_to_db(gain: f64, floor_db: f64) -> f64 {
    (20. * (gain.abs() + 1e-3).log10()).max(floor_db)
}
