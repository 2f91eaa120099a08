mod angle;
mod math;

pub use std::f64::consts::PI;

pub use angle::*;
pub use math::*;

/// The default speed of sound in \[m/s\]
pub const DEFAULT_SOUND_SPEED: f64 = 343.0;

/// The default width of the transition zone between the main lobe and the null zone
pub const DEFAULT_GRACE_ANGLE: Angle = Angle::PI.const_div(15.);

/// The default number of samples of a synthesized directivity curve
pub const DEFAULT_NUM_SAMPLES: usize = 5000;

/// The default floor of polar plots in \[dB\]
pub const DEFAULT_FLOOR_DB: f64 = -25.0;
