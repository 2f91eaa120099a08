use getset::{CopyGetters, Getters};
use psr_core::{
    acoustics::directivity::{Directivity, Psr},
    common::DEFAULT_NUM_SAMPLES,
    curve::DirectivityCurve,
};

use crate::{
    error::FitError,
    minimizer::{Minimizer, Termination, VectorX},
    nelder_mead::NelderMead,
    objective::FitObjective,
    trig::TrigCoefficients,
};

/// The convergence tolerance used by [`PatternFitter::fit`].
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// The option of [`PatternFitter`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitOption {
    /// The blend weight λ between the main-lobe error and the null-zone error.
    pub lambda: f64,
    /// The number of samples of the curve synthesized by [`PatternFitter::from_psr`].
    pub num_samples: usize,
}

impl Default for FitOption {
    fn default() -> Self {
        Self {
            lambda: 0.5,
            num_samples: DEFAULT_NUM_SAMPLES,
        }
    }
}

/// The result of [`PatternFitter::fit`].
#[derive(Clone, Debug, PartialEq, Getters, CopyGetters)]
pub struct FitResult {
    #[getset(get = "pub")]
    /// The fitted coefficients. They always sum to 1.
    coefficients: TrigCoefficients,
    #[getset(get_copy = "pub")]
    /// The objective value of [`FitResult::coefficients`].
    cost: f64,
    #[getset(get_copy = "pub")]
    /// The main-lobe error of [`FitResult::coefficients`].
    in_range_error: f64,
    #[getset(get_copy = "pub")]
    /// The null-zone error of [`FitResult::coefficients`].
    out_of_range_error: f64,
    #[getset(get_copy = "pub")]
    /// The number of minimizer iterations.
    iterations: usize,
    #[getset(get_copy = "pub")]
    /// The number of objective evaluations.
    evaluations: usize,
    #[getset(get_copy = "pub")]
    /// Why the minimizer stopped.
    termination: Termination,
}

impl FitResult {
    /// Returns `true` if the minimizer met its convergence criteria.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.termination == Termination::Converged
    }

    /// Returns `self` if the minimizer converged.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::NotConverged`] if the minimizer exhausted its budget.
    pub fn converged(self) -> Result<Self, FitError> {
        if self.is_converged() {
            Ok(self)
        } else {
            Err(FitError::NotConverged {
                termination: self.termination,
                iterations: self.iterations,
                evaluations: self.evaluations,
                cost: self.cost,
            })
        }
    }

    /// Consumes `self` and returns the fitted coefficients.
    #[must_use]
    pub fn into_coefficients(self) -> TrigCoefficients {
        self.coefficients
    }
}

/// Fits trigonometric polynomials with unity on-axis gain to a PSR directivity curve.
#[derive(Clone, Debug, PartialEq)]
pub struct PatternFitter {
    objective: FitObjective,
}

impl PatternFitter {
    /// Create a new [`PatternFitter`] for `curve`, which must have been synthesized from `psr`.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::InvalidLambda`] if `option.lambda` is outside [0, 1], or
    /// [`FitError::Core`] if `curve` is not evenly sampled.
    pub fn new(psr: &Psr, curve: &DirectivityCurve, option: FitOption) -> Result<Self, FitError> {
        Ok(Self {
            objective: FitObjective::new(psr, curve, option.lambda)?,
        })
    }

    /// Create a new [`PatternFitter`] over a curve of `option.num_samples` samples synthesized from `psr`.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::Core`] if the curve cannot be synthesized, e.g., `option.num_samples < 2`,
    /// or [`FitError::InvalidLambda`] if `option.lambda` is outside [0, 1].
    pub fn from_psr(psr: &Psr, option: FitOption) -> Result<Self, FitError> {
        let curve = psr.synthesize_curve(option.num_samples)?;
        Self::new(psr, &curve, option)
    }

    /// Gets the objective function.
    #[must_use]
    pub const fn objective(&self) -> &FitObjective {
        &self.objective
    }

    /// Fits a polynomial of the given `order` using [`NelderMead`] with [`DEFAULT_TOLERANCE`].
    ///
    /// The search starts from `cos(θ)`, i.e., the free coefficients `[1, 0, ...]`.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::InvalidOrder`] if `order` is 0.
    pub fn fit(&self, order: usize) -> Result<FitResult, FitError> {
        self.fit_with(order, &NelderMead::with_tolerance(DEFAULT_TOLERANCE))
    }

    /// Fits a polynomial of the given `order` using `minimizer`.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::InvalidOrder`] if `order` is 0, or
    /// [`FitError::DimensionMismatch`] if `minimizer` returns a point of the wrong size.
    pub fn fit_with<M: Minimizer>(
        &self,
        order: usize,
        minimizer: &M,
    ) -> Result<FitResult, FitError> {
        if order == 0 {
            return Err(FitError::InvalidOrder);
        }
        tracing::debug!(
            "Fitting a polynomial of order {} (lambda = {}).",
            order,
            self.objective.lambda()
        );

        let mut x0 = VectorX::zeros(order);
        x0[0] = 1.;
        let minimum = minimizer.minimize(|x| self.objective.cost(x.as_slice()), x0)?;
        if minimum.x().len() != order {
            return Err(FitError::DimensionMismatch {
                expected: order,
                actual: minimum.x().len(),
            });
        }

        let iterations = minimum.iterations();
        let evaluations = minimum.evaluations();
        let termination = minimum.termination();
        if termination != Termination::Converged {
            tracing::warn!(
                "Fit of order {} stopped before converging: {}.",
                order,
                termination
            );
        }

        let free = minimum.into_x();
        let (in_range_error, out_of_range_error) = self.objective.components(free.as_slice());
        let result = FitResult {
            coefficients: TrigCoefficients::from_free(free.as_slice()),
            cost: self.objective.cost(free.as_slice()),
            in_range_error,
            out_of_range_error,
            iterations,
            evaluations,
            termination,
        };
        tracing::debug!(
            "Fitted coefficients {:?} with cost {}.",
            result.coefficients,
            result.cost
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use psr_core::{
        common::{PI, rad},
        geometry::ArrayGeometry,
    };

    use crate::minimizer::Minimum;

    #[rstest::fixture]
    fn psr() -> Psr {
        Psr::new(ArrayGeometry::new(0.155, 2. * PI / 5. * rad).unwrap())
    }

    #[rstest::fixture]
    fn fitter(psr: Psr) -> PatternFitter {
        PatternFitter::from_psr(&psr, FitOption::default()).unwrap()
    }

    #[test]
    fn fit_option_default() {
        let option = FitOption::default();
        assert_eq!(0.5, option.lambda);
        assert_eq!(5000, option.num_samples);
    }

    #[rstest::rstest]
    fn fit_order_1(fitter: PatternFitter) -> anyhow::Result<()> {
        let res = fitter.fit(1)?.converged()?;
        assert_eq!(2, res.coefficients().len());
        approx::assert_abs_diff_eq!(1., res.coefficients().sum(), epsilon = 1e-12);
        approx::assert_abs_diff_eq!(0.388_258, res.coefficients()[0], epsilon = 1e-4);
        approx::assert_abs_diff_eq!(0.611_742, res.coefficients()[1], epsilon = 1e-4);
        approx::assert_abs_diff_eq!(0.048_952, res.cost(), epsilon = 1e-5);
        Ok(())
    }

    #[rstest::rstest]
    fn fit_order_2(fitter: PatternFitter) -> anyhow::Result<()> {
        let res = fitter.fit(2)?.converged()?;
        assert_eq!(3, res.coefficients().len());
        approx::assert_abs_diff_eq!(1., res.coefficients().sum(), epsilon = 1e-12);
        approx::assert_abs_diff_eq!(0.105_507, res.coefficients()[0], epsilon = 1e-3);
        approx::assert_abs_diff_eq!(0.485_721, res.coefficients()[1], epsilon = 1e-3);
        approx::assert_abs_diff_eq!(0.408_772, res.coefficients()[2], epsilon = 1e-3);
        assert!(res.in_range_error() < 2.2e-3);
        assert!(res.cost() < 2.9e-3);
        approx::assert_relative_eq!(
            0.5 * (res.in_range_error() + res.out_of_range_error()),
            res.cost(),
            max_relative = 1e-12
        );
        Ok(())
    }

    #[rstest::rstest]
    fn fit_invalid_order(fitter: PatternFitter) {
        assert_eq!(Err(FitError::InvalidOrder), fitter.fit(0));
    }

    #[rstest::rstest]
    fn invalid_lambda(psr: Psr) {
        assert_eq!(
            Err(FitError::InvalidLambda(2.)),
            PatternFitter::from_psr(
                &psr,
                FitOption {
                    lambda: 2.,
                    ..Default::default()
                }
            )
        );
    }

    #[rstest::rstest]
    fn too_few_samples(psr: Psr) {
        assert_eq!(
            Err(FitError::Core(psr_core::error::PsrError::TooFewSamples(1))),
            PatternFitter::from_psr(
                &psr,
                FitOption {
                    num_samples: 1,
                    ..Default::default()
                }
            )
        );
    }

    struct Stubborn {
        dim: usize,
        termination: Termination,
    }

    impl Minimizer for Stubborn {
        fn minimize<F>(&self, mut f: F, _x0: VectorX) -> Result<Minimum, FitError>
        where
            F: FnMut(&VectorX) -> f64,
        {
            let x = VectorX::from_element(self.dim, 0.25);
            let fun = f(&x);
            Ok(Minimum::new(x, fun, 1, 1, self.termination))
        }
    }

    #[rstest::rstest]
    fn fit_with_not_converged(fitter: PatternFitter) -> anyhow::Result<()> {
        let res = fitter.fit_with(
            2,
            &Stubborn {
                dim: 2,
                termination: Termination::MaxIterations,
            },
        )?;
        assert!(!res.is_converged());
        assert_eq!(vec![0.5, 0.25, 0.25], res.coefficients().to_vec());
        assert_eq!(
            Err(FitError::NotConverged {
                termination: Termination::MaxIterations,
                iterations: 1,
                evaluations: 1,
                cost: res.cost(),
            }),
            res.converged()
        );
        Ok(())
    }

    #[rstest::rstest]
    fn fit_with_dimension_mismatch(fitter: PatternFitter) {
        assert_eq!(
            Err(FitError::DimensionMismatch {
                expected: 2,
                actual: 3
            }),
            fitter.fit_with(
                2,
                &Stubborn {
                    dim: 3,
                    termination: Termination::Converged,
                },
            )
        );
    }
}
