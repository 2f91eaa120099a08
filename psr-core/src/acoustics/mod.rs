/// Directivity models.
pub mod directivity;
mod icld;

pub use icld::*;
