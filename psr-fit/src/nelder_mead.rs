use std::num::NonZeroUsize;

use crate::{
    error::FitError,
    minimizer::{Minimizer, Minimum, Termination, VectorX},
};

const RHO: f64 = 1.;
const CHI: f64 = 2.;
const PSI: f64 = 0.5;
const SIGMA: f64 = 0.5;
const NONZDELT: f64 = 0.05;
const ZDELT: f64 = 0.00025;

/// The option of [`NelderMead`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NelderMeadOption {
    /// Absolute spread of the simplex vertices below which the search may stop.
    pub xatol: f64,
    /// Absolute spread of the objective values below which the search may stop.
    pub fatol: f64,
    /// The maximum number of iterations. `None` means 200 times the number of parameters.
    pub max_iter: Option<NonZeroUsize>,
    /// The maximum number of objective evaluations. `None` means 200 times the number of parameters.
    pub max_fev: Option<NonZeroUsize>,
}

impl Default for NelderMeadOption {
    fn default() -> Self {
        Self {
            xatol: 1e-10,
            fatol: 1e-10,
            max_iter: None,
            max_fev: None,
        }
    }
}

/// Nelder-Mead downhill simplex method
///
/// See [^Nelder and Mead, 1965] for more details. The initial simplex and the stopping criteria follow [^Gao and Han, 2012] (non-adaptive parameters).
///
/// [^Nelder and Mead, 1965]: Nelder, John A., and Roger Mead. "A simplex method for function minimization." The computer journal 7.4 (1965): 308-313.
/// [^Gao and Han, 2012]: Gao, Fuchang, and Lixing Han. "Implementing the Nelder-Mead simplex algorithm with adaptive parameters." Computational Optimization and Applications 51.1 (2012): 259-277.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NelderMead {
    /// The option of the minimizer.
    pub option: NelderMeadOption,
}

impl NelderMead {
    /// Create a new [`NelderMead`].
    #[must_use]
    pub const fn new(option: NelderMeadOption) -> Self {
        Self { option }
    }

    /// Create a new [`NelderMead`] using `tol` for both [`NelderMeadOption::xatol`] and [`NelderMeadOption::fatol`].
    #[must_use]
    pub fn with_tolerance(tol: f64) -> Self {
        Self::new(NelderMeadOption {
            xatol: tol,
            fatol: tol,
            ..Default::default()
        })
    }
}

struct Counted<F> {
    f: F,
    count: usize,
}

impl<F: FnMut(&VectorX) -> f64> Counted<F> {
    fn call(&mut self, x: &VectorX) -> f64 {
        self.count += 1;
        (self.f)(x)
    }
}

fn sort_simplex(simplex: &mut Vec<VectorX>, fsim: &mut Vec<f64>) {
    let mut idx = (0..fsim.len()).collect::<Vec<_>>();
    idx.sort_by(|&a, &b| fsim[a].total_cmp(&fsim[b]));
    *simplex = idx.iter().map(|&i| simplex[i].clone()).collect();
    *fsim = idx.iter().map(|&i| fsim[i]).collect();
}

impl Minimizer for NelderMead {
    fn minimize<F>(&self, f: F, x0: VectorX) -> Result<Minimum, FitError>
    where
        F: FnMut(&VectorX) -> f64,
    {
        let NelderMeadOption {
            xatol,
            fatol,
            max_iter,
            max_fev,
        } = self.option;
        [xatol, fatol].into_iter().try_for_each(|tol| {
            if tol.is_finite() && tol >= 0. {
                Ok(())
            } else {
                Err(FitError::InvalidTolerance(tol))
            }
        })?;

        let n = x0.len();
        if n == 0 {
            return Err(FitError::EmptyParameter);
        }
        let max_iter = max_iter.map_or(200 * n, NonZeroUsize::get);
        let max_fev = max_fev.map_or(200 * n, NonZeroUsize::get);

        let mut f = Counted { f, count: 0 };

        let mut simplex = std::iter::once(x0.clone())
            .chain((0..n).map(|k| {
                let mut y = x0.clone();
                y[k] = if y[k] != 0. { (1. + NONZDELT) * y[k] } else { ZDELT };
                y
            }))
            .collect::<Vec<_>>();
        let mut fsim = simplex.iter().map(|x| f.call(x)).collect::<Vec<_>>();
        sort_simplex(&mut simplex, &mut fsim);

        let mut iterations = 1;
        let mut converged = false;
        while f.count < max_fev && iterations < max_iter {
            let x_spread = simplex[1..]
                .iter()
                .map(|x| (x - &simplex[0]).amax())
                .fold(0., f64::max);
            let f_spread = fsim[1..]
                .iter()
                .map(|v| (fsim[0] - v).abs())
                .fold(0., f64::max);
            if x_spread <= xatol && f_spread <= fatol {
                converged = true;
                break;
            }

            let xbar = simplex[..n]
                .iter()
                .fold(VectorX::zeros(n), |acc, x| acc + x)
                / n as f64;

            let xr = &xbar * (1. + RHO) - &simplex[n] * RHO;
            let fxr = f.call(&xr);

            if fxr < fsim[0] {
                let xe = &xbar * (1. + RHO * CHI) - &simplex[n] * (RHO * CHI);
                let fxe = f.call(&xe);
                if fxe < fxr {
                    simplex[n] = xe;
                    fsim[n] = fxe;
                } else {
                    simplex[n] = xr;
                    fsim[n] = fxr;
                }
            } else if fxr < fsim[n - 1] {
                simplex[n] = xr;
                fsim[n] = fxr;
            } else {
                let shrink = if fxr < fsim[n] {
                    let xc = &xbar * (1. + PSI * RHO) - &simplex[n] * (PSI * RHO);
                    let fxc = f.call(&xc);
                    if fxc <= fxr {
                        simplex[n] = xc;
                        fsim[n] = fxc;
                        false
                    } else {
                        true
                    }
                } else {
                    let xcc = &xbar * (1. - PSI) + &simplex[n] * PSI;
                    let fxcc = f.call(&xcc);
                    if fxcc < fsim[n] {
                        simplex[n] = xcc;
                        fsim[n] = fxcc;
                        false
                    } else {
                        true
                    }
                };
                if shrink {
                    (1..=n).for_each(|j| {
                        let v = &simplex[0] + (&simplex[j] - &simplex[0]) * SIGMA;
                        fsim[j] = f.call(&v);
                        simplex[j] = v;
                    });
                }
            }

            iterations += 1;
            sort_simplex(&mut simplex, &mut fsim);
            tracing::trace!(
                "Nelder-Mead iteration {}: f = {}, evaluations = {}.",
                iterations,
                fsim[0],
                f.count
            );
        }

        let termination = if converged {
            Termination::Converged
        } else if f.count >= max_fev {
            Termination::MaxEvaluations
        } else {
            Termination::MaxIterations
        };
        tracing::debug!(
            "Nelder-Mead finished after {} iterations and {} evaluations: {}.",
            iterations,
            f.count,
            termination
        );

        Ok(Minimum::new(
            simplex.swap_remove(0),
            fsim[0],
            iterations,
            f.count,
            termination,
        ))
    }
}
