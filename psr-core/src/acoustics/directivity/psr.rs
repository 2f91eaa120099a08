use getset::CopyGetters;

use super::*;

use crate::{
    acoustics::max_icld_db,
    common::{DEFAULT_GRACE_ANGLE, PI, lerp_unchecked, wrap},
    geometry::ArrayGeometry,
};

/// Directivity of a Pulse-Shift-Ratio (PSR) microphone pair.
///
/// Inside the capsules' angular coverage `|θ| < base_angle` the gain follows the closed-form
/// [`Psr::gamma`]. Over the following `grace_angle` it fades linearly to zero, and it is zero
/// elsewhere.
#[derive(Clone, Copy, Debug, PartialEq, CopyGetters)]
pub struct Psr {
    #[getset(get_copy = "pub")]
    /// The array geometry.
    geometry: ArrayGeometry,
    #[getset(get_copy = "pub")]
    /// The width of the transition zone.
    grace_angle: Angle,
    #[getset(get_copy = "pub")]
    /// The linear level ratio corresponding to the maximum ICLD.
    eta: f64,
    #[getset(get_copy = "pub")]
    /// The phase offset \[rad\] of the pattern.
    beta: f64,
}

impl Psr {
    /// Creates a new [`Psr`] with the default grace angle (π/15).
    #[must_use]
    pub fn new(geometry: ArrayGeometry) -> Self {
        let base_angle = geometry.base_angle().radian();
        // the level difference is negative in the array's reference frame
        let eta_db = -max_icld_db(geometry.max_time_delay());
        let eta = 10f64.powf(eta_db / 20.);
        let beta = ((eta * base_angle.sin()) / (1. - eta * base_angle.cos())).atan();
        Self {
            geometry,
            grace_angle: DEFAULT_GRACE_ANGLE,
            eta,
            beta,
        }
    }

    /// Replaces the grace angle.
    ///
    /// # Errors
    ///
    /// Returns [`PsrError::InvalidGraceAngle`] if `grace_angle` is outside (0, π).
    pub fn with_grace_angle(self, grace_angle: Angle) -> Result<Self, PsrError> {
        if !(grace_angle.radian() > 0. && grace_angle.radian() < PI) {
            return Err(PsrError::InvalidGraceAngle(grace_angle));
        }
        Ok(Self {
            grace_angle,
            ..self
        })
    }

    /// Gets the base angle of the array.
    #[must_use]
    pub fn base_angle(&self) -> Angle {
        self.geometry.base_angle()
    }

    /// Closed-form gain of the array, valid inside the capsules' angular coverage.
    ///
    /// `φ = sin(θ + β) / sin(base_angle + β - θ)` and the gain is `(1 + φ²)^(-1/2)`.
    ///
    /// When the denominator of `φ` vanishes, `φ` is unbounded and the gain saturates at its
    /// limiting value `0`.
    #[must_use]
    pub fn gamma(&self, theta: Angle) -> f64 {
        let theta = theta.radian();
        let alpha = self.geometry.base_angle().radian();
        let den = (alpha + self.beta - theta).sin();
        if den == 0. {
            tracing::trace!("Singular PSR gain at {}rad, saturating to 0.", theta);
            return 0.;
        }
        let phi = (theta + self.beta).sin() / den;
        let gamma = (1. + phi * phi).powf(-0.5);
        if gamma.is_nan() {
            tracing::trace!("Non-finite PSR gain at {}rad, saturating to 0.", theta);
            return 0.;
        }
        gamma
    }
}

impl Directivity for Psr {
    fn directivity(&self, theta: Angle) -> f64 {
        let theta = wrap(theta.radian()).abs();
        let alpha = self.geometry.base_angle().radian();
        let grace = self.grace_angle.radian();
        if theta < alpha || theta > 2. * PI - alpha {
            self.gamma(theta * rad)
        } else if theta < alpha + grace {
            lerp_unchecked(alpha, self.gamma(alpha * rad), alpha + grace, 0., theta)
        } else if theta > 2. * PI - alpha - grace {
            let edge = 2. * PI - alpha - grace;
            lerp_unchecked(edge, 0., 2. * PI - alpha, self.gamma(edge * rad), theta)
        } else {
            0.
        }
    }
}
