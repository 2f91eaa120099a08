use psr_core::{
    acoustics::directivity::Psr, common::deg, error::PsrError, geometry::ArrayGeometry,
};

pub fn generate_psr(base_angle: f64) -> Result<Psr, PsrError> {
    Ok(Psr::new(ArrayGeometry::new(0.155, base_angle * deg)?))
}
