use anyhow::Result;
use clap::Parser;

use psr::prelude::*;

#[derive(Parser, Debug)]
#[command(about = "Fit a trigonometric polynomial to the directivity of a PSR microphone pair")]
struct Args {
    /// Array radius [m]
    #[arg(long, default_value_t = 0.155)]
    radius: f64,
    /// Base angle between the capsules [°]
    #[arg(long, default_value_t = 72.)]
    base_angle_deg: f64,
    /// Order of the fitted polynomial
    #[arg(long, default_value_t = 2)]
    order: usize,
    /// Weight of the main-lobe error
    #[arg(long, default_value_t = 0.5)]
    lambda: f64,
    /// Do not draw the polar plot
    #[arg(long)]
    no_plot: bool,
    /// Print debug logs
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let psr = Psr::new(ArrayGeometry::new(args.radius, args.base_angle_deg * deg)?);
    let curve = psr.synthesize_curve(DEFAULT_NUM_SAMPLES)?;
    let fitter = PatternFitter::new(
        &psr,
        &curve,
        FitOption {
            lambda: args.lambda,
            ..Default::default()
        },
    )?;
    let result = fitter.fit(args.order)?;

    tracing::info!(
        "eta = {:.6}, beta = {:.6}rad, max ICLD = {:.4}dB",
        psr.eta(),
        psr.beta(),
        max_icld_db(psr.geometry().max_time_delay())
    );
    println!("coefficients: {:?}", result.coefficients());
    println!(
        "cost: {:.6e} (main lobe: {:.6e}, null zone: {:.6e})",
        result.cost(),
        result.in_range_error(),
        result.out_of_range_error()
    );
    println!(
        "{} after {} iterations and {} evaluations",
        result.termination(),
        result.iterations(),
        result.evaluations()
    );

    if !args.no_plot {
        PolarPlot::new(DEFAULT_FLOOR_DB)
            .with_curve(&curve)
            .with_trig(result.coefficients(), 1000)?
            .display();
    }

    Ok(())
}
