use getset::CopyGetters;

use crate::{
    common::{Angle, DEFAULT_SOUND_SPEED, PI},
    error::PsrError,
};

/// Geometry of a two-capsule PSR array.
#[derive(Clone, Copy, Debug, PartialEq, CopyGetters)]
pub struct ArrayGeometry {
    #[getset(get_copy = "pub")]
    /// The array radius in \[m\].
    radius: f64,
    #[getset(get_copy = "pub")]
    /// The base angle between the capsules.
    base_angle: Angle,
    #[getset(get_copy = "pub")]
    /// The speed of sound in \[m/s\].
    sound_speed: f64,
}

impl ArrayGeometry {
    /// Creates a new [`ArrayGeometry`] with the default sound speed (343m/s).
    ///
    /// # Errors
    ///
    /// Returns [`PsrError::InvalidRadius`] if `radius` is not positive and finite, or
    /// [`PsrError::InvalidBaseAngle`] if `base_angle` is outside (0, π).
    pub fn new(radius: f64, base_angle: Angle) -> Result<Self, PsrError> {
        if !(radius.is_finite() && radius > 0.) {
            return Err(PsrError::InvalidRadius(radius));
        }
        if !(base_angle.radian() > 0. && base_angle.radian() < PI) {
            return Err(PsrError::InvalidBaseAngle(base_angle));
        }
        Ok(Self {
            radius,
            base_angle,
            sound_speed: DEFAULT_SOUND_SPEED,
        })
    }

    /// Replaces the sound speed.
    ///
    /// # Errors
    ///
    /// Returns [`PsrError::InvalidSoundSpeed`] if `sound_speed` is not positive and finite.
    pub fn with_sound_speed(self, sound_speed: f64) -> Result<Self, PsrError> {
        if !(sound_speed.is_finite() && sound_speed > 0.) {
            return Err(PsrError::InvalidSoundSpeed(sound_speed));
        }
        Ok(Self {
            sound_speed,
            ..self
        })
    }

    /// Sets the sound speed from the temperature `t` \[℃\].
    ///
    /// This is equivalent to `Self::with_sound_speed_from_temp_with(t, 1.4, 8.314_463, 28.9647e-3)`.
    ///
    /// # Errors
    ///
    /// Returns [`PsrError::InvalidSoundSpeed`] if `t` is at or below absolute zero.
    pub fn with_sound_speed_from_temp(self, t: f64) -> Result<Self, PsrError> {
        self.with_sound_speed_from_temp_with(t, 1.4, 8.314_463, 28.9647e-3)
    }

    /// Sets the sound speed from the temperature `t` \[℃\], heat capacity ratio `k`, gas constant `r`, and molar mass `m` \[kg/mol\].
    ///
    /// # Errors
    ///
    /// Returns [`PsrError::InvalidSoundSpeed`] if the resulting sound speed is not positive and finite.
    pub fn with_sound_speed_from_temp_with(
        self,
        t: f64,
        k: f64,
        r: f64,
        m: f64,
    ) -> Result<Self, PsrError> {
        self.with_sound_speed((k * r * (273.15 + t) / m).sqrt())
    }

    /// Gets the maximum inter-capsule time delay in \[s\].
    #[must_use]
    pub fn max_time_delay(&self) -> f64 {
        let s = (self.base_angle.radian() / 2.).sin();
        2. * self.radius / self.sound_speed * s * s
    }
}
