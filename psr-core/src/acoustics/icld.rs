/// Converts the maximum inter-channel time delay `tau_max` \[s\] into the maximum
/// inter-channel level difference \[dB\].
///
/// This is a generalised logistic approximation of the Williams curve, which relates the
/// time and level differences that produce the same perceived source position at the edge
/// of a stereophonic recording angle.
#[inline]
#[must_use]
#[allow(clippy::excessive_precision)]
pub fn max_icld_db(tau_max: f64) -> f64 {
    const A: f64 = 221.5913;
    const K: f64 = 230.1794;
    const OFFSET: f64 = 2.1786;
    A - K / (1.0 + (-(tau_max * 1000.0 + OFFSET)).exp())
}
