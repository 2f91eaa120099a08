use psr_core::{
    common::{DEFAULT_FLOOR_DB, PI},
    curve::{DirectivityCurve, gain_to_db},
    error::PsrError,
};
use psr_fit::trig::evaluate;
use textplots::{Chart, Plot, Shape};

/// Maps each `(angle, gain)` sample to cartesian coordinates whose radius is the gain in
/// decibels above `floor_db`.
///
/// # Errors
///
/// Returns [`PsrError::LengthMismatch`] if `angles` and `gains` differ in length.
pub fn polar_points(
    angles: &[f64],
    gains: &[f64],
    floor_db: f64,
) -> Result<Vec<(f32, f32)>, PsrError> {
    if angles.len() != gains.len() {
        return Err(PsrError::LengthMismatch {
            angles: angles.len(),
            gains: gains.len(),
        });
    }
    Ok(angles
        .iter()
        .zip(gains)
        .map(|(&theta, &gain)| to_cartesian(theta, gain, floor_db))
        .collect())
}

fn to_cartesian(theta: f64, gain: f64, floor_db: f64) -> (f32, f32) {
    let r = gain_to_db(gain, floor_db) - floor_db;
    ((r * theta.cos()) as f32, (r * theta.sin()) as f32)
}

/// A polar plot of one or more directivity patterns in \[dB\].
#[derive(Clone, Debug, PartialEq)]
pub struct PolarPlot {
    floor_db: f64,
    width: u32,
    height: u32,
    series: Vec<Vec<(f32, f32)>>,
}

impl PolarPlot {
    /// Creates an empty [`PolarPlot`] clipped below `floor_db`.
    #[must_use]
    pub fn new(floor_db: f64) -> Self {
        Self {
            floor_db,
            width: 120,
            height: 120,
            series: Vec::new(),
        }
    }

    /// Adds a sampled directivity curve.
    #[must_use]
    pub fn with_curve(mut self, curve: &DirectivityCurve) -> Self {
        self.series.push(
            curve
                .iter()
                .map(|(theta, gain)| to_cartesian(theta, gain, self.floor_db))
                .collect(),
        );
        self
    }

    /// Adds raw `(angle, gain)` samples.
    ///
    /// # Errors
    ///
    /// Returns [`PsrError::LengthMismatch`] if `angles` and `gains` differ in length.
    pub fn with_samples(mut self, angles: &[f64], gains: &[f64]) -> Result<Self, PsrError> {
        self.series.push(polar_points(angles, gains, self.floor_db)?);
        Ok(self)
    }

    /// Adds a trigonometric polynomial sampled at `num_points` angles over [-π, π].
    ///
    /// # Errors
    ///
    /// Returns [`PsrError::TooFewSamples`] if `num_points < 2`.
    pub fn with_trig(self, coefficients: &[f64], num_points: usize) -> Result<Self, PsrError> {
        if num_points < 2 {
            return Err(PsrError::TooFewSamples(num_points));
        }
        let step = 2. * PI / (num_points - 1) as f64;
        let angles = (0..num_points)
            .map(|i| -PI + i as f64 * step)
            .collect::<Vec<_>>();
        let gains = angles
            .iter()
            .map(|&theta| evaluate(theta, coefficients))
            .collect::<Vec<_>>();
        self.with_samples(&angles, &gains)
    }

    /// Gets the plotted series in cartesian coordinates.
    #[must_use]
    pub fn series(&self) -> &[Vec<(f32, f32)>] {
        &self.series
    }

    /// Renders the plot to stdout.
    pub fn display(&self) {
        let r = (-self.floor_db) as f32 + 1.;
        let shapes = self
            .series
            .iter()
            .map(|s| Shape::Lines(s))
            .collect::<Vec<_>>();
        let mut chart = Chart::new_with_y_range(self.width, self.height, -r, r, -r, r);
        shapes
            .iter()
            .fold(&mut chart, |chart, shape| chart.lineplot(shape))
            .display();
    }
}

impl Default for PolarPlot {
    fn default() -> Self {
        Self::new(DEFAULT_FLOOR_DB)
    }
}
