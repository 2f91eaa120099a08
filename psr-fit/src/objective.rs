use psr_core::{acoustics::directivity::Psr, common::PI, curve::DirectivityCurve};

use crate::{
    error::FitError,
    trig::{TrigCoefficients, evaluate_cos},
};

/// Two-region weighted least-squares cost of approximating a PSR curve with a trigonometric polynomial.
///
/// Over `(0, base_angle)` the polynomial is compared against the curve; over
/// `(base_angle + grace_angle, π)` it is compared against silence. Both sums are scaled by the
/// sample spacing so they approximate L² integrals.
#[derive(Clone, Debug, PartialEq)]
pub struct FitObjective {
    lambda: f64,
    delta: f64,
    in_range: Vec<(f64, f64)>,
    out_of_range: Vec<f64>,
}

impl FitObjective {
    /// Creates a new [`FitObjective`] over `curve`, which must have been synthesized from `psr`.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::InvalidLambda`] if `lambda` is outside [0, 1], or
    /// [`FitError::Core`] wrapping [`psr_core::error::PsrError::NonUniformSpacing`] if `curve`
    /// is not evenly sampled.
    pub fn new(psr: &Psr, curve: &DirectivityCurve, lambda: f64) -> Result<Self, FitError> {
        if !(0. ..=1.).contains(&lambda) {
            return Err(FitError::InvalidLambda(lambda));
        }
        let delta = curve.uniform_spacing()?;
        let alpha = psr.base_angle().radian();
        let null_start = alpha + psr.grace_angle().radian();
        let in_range = curve
            .iter()
            .filter(|&(theta, _)| theta > 0. && theta < alpha)
            .map(|(theta, gain)| (theta.cos(), gain))
            .collect();
        let out_of_range = curve
            .angles()
            .iter()
            .filter(|&&theta| theta > null_start && theta < PI)
            .map(|theta| theta.cos())
            .collect();
        Ok(Self {
            lambda,
            delta,
            in_range,
            out_of_range,
        })
    }

    /// Gets the blend weight between the two regions.
    #[must_use]
    pub const fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Gets the number of samples inside the main lobe and inside the null zone.
    #[must_use]
    pub fn num_samples(&self) -> (usize, usize) {
        (self.in_range.len(), self.out_of_range.len())
    }

    /// Computes the in-range and out-of-range errors for the coefficients of degree 1 and higher.
    ///
    /// The degree-0 coefficient is `1 - Σ free`.
    #[must_use]
    pub fn components(&self, free: &[f64]) -> (f64, f64) {
        let coefficients = TrigCoefficients::from_free(free);
        let in_range = self
            .in_range
            .iter()
            .map(|&(c, gain)| (gain - evaluate_cos(c, &coefficients)).powi(2))
            .sum::<f64>()
            * self.delta;
        let out_of_range = self
            .out_of_range
            .iter()
            .map(|&c| evaluate_cos(c, &coefficients).powi(2))
            .sum::<f64>()
            * self.delta;
        (in_range, out_of_range)
    }

    /// Computes `λ·in_range + (1 - λ)·out_of_range` for the coefficients of degree 1 and higher.
    #[must_use]
    pub fn cost(&self, free: &[f64]) -> f64 {
        let (in_range, out_of_range) = self.components(free);
        self.lambda * in_range + (1. - self.lambda) * out_of_range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use psr_core::{
        acoustics::directivity::Directivity, common::rad, error::PsrError, geometry::ArrayGeometry,
    };

    #[rstest::fixture]
    fn psr() -> Psr {
        Psr::new(ArrayGeometry::new(0.155, 2. * PI / 5. * rad).unwrap())
    }

    #[rstest::fixture]
    fn curve(psr: Psr) -> DirectivityCurve {
        psr.synthesize_curve(5000).unwrap()
    }

    #[rstest::rstest]
    fn num_samples(psr: Psr, curve: DirectivityCurve) -> anyhow::Result<()> {
        let objective = FitObjective::new(&psr, &curve, 0.5)?;
        assert_eq!((999, 1333), objective.num_samples());
        Ok(())
    }

    #[rstest::rstest]
    #[case(0.023_710_844_075_110_42, 0.074_193_210_049_250_82, &[0.611_741_861_701_011_3])]
    #[case(
        0.002_097_110_713_732_192_4,
        0.003_587_515_763_604_143,
        &[0.485_721_161_343_574_57, 0.408_771_613_411_556_77]
    )]
    fn components(
        psr: Psr,
        curve: DirectivityCurve,
        #[case] in_range: f64,
        #[case] out_of_range: f64,
        #[case] free: &[f64],
    ) -> anyhow::Result<()> {
        let objective = FitObjective::new(&psr, &curve, 0.5)?;
        let (i, o) = objective.components(free);
        approx::assert_relative_eq!(in_range, i, max_relative = 1e-8);
        approx::assert_relative_eq!(out_of_range, o, max_relative = 1e-8);
        approx::assert_relative_eq!(0.5 * (i + o), objective.cost(free), max_relative = 1e-12);
        Ok(())
    }

    #[rstest::rstest]
    #[case(0.)]
    #[case(1.)]
    fn cost_extreme_lambda(
        psr: Psr,
        curve: DirectivityCurve,
        #[case] lambda: f64,
    ) -> anyhow::Result<()> {
        let objective = FitObjective::new(&psr, &curve, lambda)?;
        let free = [0.5, 0.4];
        let (i, o) = objective.components(&free);
        assert_eq!(if lambda == 1. { i } else { o }, objective.cost(&free));
        Ok(())
    }

    #[rstest::rstest]
    fn non_uniform_curve(psr: Psr) -> anyhow::Result<()> {
        let curve = DirectivityCurve::new(vec![0., 0.1, 0.3, PI], vec![1., 0.9, 0.5, 0.])?;
        assert_eq!(
            Err(FitError::Core(PsrError::NonUniformSpacing(2))),
            FitObjective::new(&psr, &curve, 0.5)
        );
        Ok(())
    }

    #[rstest::rstest]
    #[case(-0.1)]
    #[case(1.1)]
    #[case(f64::NAN)]
    fn invalid_lambda(psr: Psr, curve: DirectivityCurve, #[case] lambda: f64) {
        assert!(matches!(
            FitObjective::new(&psr, &curve, lambda),
            Err(FitError::InvalidLambda(_))
        ));
    }
}
