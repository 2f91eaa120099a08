use derive_more::{Debug, Deref};

/// Evaluates `Σ_i coefficients[i]·cos(theta)^i`.
#[inline]
#[must_use]
pub fn evaluate(theta: f64, coefficients: &[f64]) -> f64 {
    evaluate_cos(theta.cos(), coefficients)
}

/// Evaluates the polynomial at every angle of `thetas`, preserving their order.
#[must_use]
pub fn evaluate_vec(thetas: &[f64], coefficients: &[f64]) -> Vec<f64> {
    thetas.iter().map(|&t| evaluate(t, coefficients)).collect()
}

#[inline]
pub(crate) fn evaluate_cos(c: f64, coefficients: &[f64]) -> f64 {
    coefficients
        .iter()
        .fold((0., 1.), |(acc, p), &coeff| (acc + coeff * p, p * c))
        .0
}

/// Coefficients of a trigonometric polynomial in `cos(θ)`, lowest degree first.
#[derive(Clone, PartialEq, Debug, Deref)]
#[debug("{:?}", coefficients)]
pub struct TrigCoefficients {
    coefficients: Vec<f64>,
}

impl TrigCoefficients {
    /// Creates [`TrigCoefficients`] from all coefficients.
    #[must_use]
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    /// Creates [`TrigCoefficients`] with unity on-axis gain from the coefficients of degree 1 and higher.
    ///
    /// The degree-0 coefficient is `1 - Σ free`.
    #[must_use]
    pub fn from_free(free: &[f64]) -> Self {
        Self {
            coefficients: std::iter::once(1. - free.iter().sum::<f64>())
                .chain(free.iter().copied())
                .collect(),
        }
    }

    /// Gets the order of the polynomial.
    #[must_use]
    pub fn order(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Gets the sum of the coefficients, i.e., the on-axis gain.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.coefficients.iter().sum()
    }

    /// Gets the coefficients of degree 1 and higher.
    #[must_use]
    pub fn free(&self) -> &[f64] {
        self.coefficients.get(1..).unwrap_or(&[])
    }

    /// Evaluates the polynomial at `theta` \[rad\].
    #[must_use]
    pub fn evaluate(&self, theta: f64) -> f64 {
        evaluate(theta, &self.coefficients)
    }

    /// Consumes `self` and returns the coefficients.
    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.coefficients
    }
}
