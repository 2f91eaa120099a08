use derive_more::Debug;

use super::wrap;

/// \[°\]
#[allow(non_camel_case_types)]
pub struct deg;

/// \[rad\]
#[allow(non_camel_case_types)]
pub struct rad;

/// Angle
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
#[debug("{}rad", radian)]
pub struct Angle {
    radian: f64,
}

impl Angle {
    /// An angle of zero
    pub const ZERO: Self = Self { radian: 0.0 };

    /// An angle of π
    pub const PI: Self = Self {
        radian: std::f64::consts::PI,
    };

    /// Returns the angle in radian
    #[must_use]
    pub const fn radian(self) -> f64 {
        self.radian
    }

    /// Returns the angle in degree
    #[must_use]
    pub const fn degree(self) -> f64 {
        self.radian.to_degrees()
    }

    #[doc(hidden)]
    #[must_use]
    pub const fn const_div(self, rhs: f64) -> Self {
        Self {
            radian: self.radian / rhs,
        }
    }

    /// Returns the equivalent angle in (-π, π].
    #[must_use]
    pub fn wrapped(self) -> Self {
        Self {
            radian: wrap(self.radian),
        }
    }
}

impl std::ops::Mul<deg> for f64 {
    type Output = Angle;

    fn mul(self, _rhs: deg) -> Self::Output {
        Self::Output {
            radian: self.to_radians(),
        }
    }
}

impl std::ops::Mul<rad> for f64 {
    type Output = Angle;

    fn mul(self, _rhs: rad) -> Self::Output {
        Self::Output { radian: self }
    }
}

impl std::ops::Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Self::Output {
        Self::Output {
            radian: self.radian + rhs.radian,
        }
    }
}

impl std::ops::Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Self::Output {
        Self::Output {
            radian: self.radian - rhs.radian,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    #[test]
    fn dbg() {
        assert_eq!(format!("{:?}", 1.0 * rad), "1rad");
    }

    #[rstest::rstest]
    #[case(0., 0. * deg)]
    #[case(PI / 2., 90. * deg)]
    #[case(2. * PI / 5., 72. * deg)]
    #[case(-PI, -180. * deg)]
    fn degree_to_radian(#[case] expected: f64, #[case] angle: Angle) {
        approx::assert_abs_diff_eq!(expected, angle.radian(), epsilon = 1e-12);
    }

    #[rstest::rstest]
    #[case(PI / 10., (2. * PI + PI / 10.) * rad)]
    #[case(-PI + PI / 10., (PI + PI / 10.) * rad)]
    #[case(PI, -PI * rad)]
    fn wrapped(#[case] expected: f64, #[case] angle: Angle) {
        approx::assert_abs_diff_eq!(expected, angle.wrapped().radian(), epsilon = 1e-12);
    }

    #[test]
    fn arithmetic() {
        let a = 30. * deg + 42. * deg;
        approx::assert_abs_diff_eq!(72., a.degree(), epsilon = 1e-12);
        let b = a - 12. * deg;
        approx::assert_abs_diff_eq!(60., b.degree(), epsilon = 1e-12);
    }
}
