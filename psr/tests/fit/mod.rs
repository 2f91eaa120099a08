use psr::prelude::*;

#[rstest::fixture]
fn fitter() -> PatternFitter {
    let psr = Psr::new(ArrayGeometry::new(0.155, 72. * deg).unwrap());
    PatternFitter::from_psr(&psr, FitOption::default()).unwrap()
}

#[rstest::rstest]
fn fit_second_order(fitter: PatternFitter) -> anyhow::Result<()> {
    let result = fitter.fit(2)?;
    assert!(result.is_converged());
    assert_eq!(3, result.coefficients().len());
    approx::assert_abs_diff_eq!(1., result.coefficients().sum(), epsilon = 1e-6);
    assert!(result.in_range_error() < 2.2e-3);
    approx::assert_abs_diff_eq!(1., result.coefficients().evaluate(0.), epsilon = 1e-6);
    Ok(())
}

#[rstest::rstest]
fn unity_on_axis(fitter: PatternFitter) -> anyhow::Result<()> {
    for order in 1..=4 {
        let result = fitter.fit(order)?;
        assert_eq!(order + 1, result.coefficients().len());
        approx::assert_abs_diff_eq!(1., result.coefficients().sum(), epsilon = 1e-6);
    }
    Ok(())
}

#[rstest::rstest]
fn null_zone_error_decreases_with_order(fitter: PatternFitter) -> anyhow::Result<()> {
    let errors = (1..=4)
        .map(|order| fitter.fit(order).map(|r| r.out_of_range_error()))
        .collect::<Result<Vec<_>, _>>()?;
    assert!(errors.windows(2).all(|w| w[1] < w[0]), "{errors:?}");
    Ok(())
}

#[rstest::rstest]
fn fit_with_custom_budget(fitter: PatternFitter) -> anyhow::Result<()> {
    let result = fitter.fit_with(
        3,
        &NelderMead::new(NelderMeadOption {
            max_iter: std::num::NonZeroUsize::new(10),
            ..Default::default()
        }),
    )?;
    assert_eq!(Termination::MaxIterations, result.termination());
    assert!(matches!(
        result.converged(),
        Err(FitError::NotConverged {
            termination: Termination::MaxIterations,
            ..
        })
    ));
    Ok(())
}
