pub use psr_core::{
    acoustics::{
        directivity::{Directivity, Psr},
        max_icld_db,
    },
    common::{
        Angle, DEFAULT_FLOOR_DB, DEFAULT_NUM_SAMPLES, DEFAULT_SOUND_SPEED, PI, deg, lerp, rad, wrap,
    },
    curve::DirectivityCurve,
    error::PsrError,
    geometry::ArrayGeometry,
};
pub use psr_fit::{
    FitError, FitOption, FitResult, Minimizer, NelderMead, NelderMeadOption, PatternFitter,
    Termination, TrigCoefficients,
    trig::{evaluate, evaluate_vec},
};

#[cfg(feature = "plot")]
pub use crate::plot::PolarPlot;
