pub mod mock;
pub mod types;

pub use mock::MockEphemeris;
pub use types::{
    BodyId, CelestialBody, ChartPoint, GeoLocation, HouseCusp, LayerPositions, PositionRequest,
    TRADITIONAL_BODIES,
};

use thiserror::Error;

/// Errors that can occur while producing positions
#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("Invalid location: lat {lat}, lon {lon} (expected lat in [-90, 90], lon in [-180, 180])")]
    InvalidLocation { lat: f64, lon: f64 },
}

/// Anything that can turn a moment and place into body longitudes.
///
/// The engine never calls this itself; callers resolve positions first and
/// hand the finished [`LayerPositions`] to the chart assembler.
pub trait PositionSource {
    fn name(&self) -> &str;

    fn positions(&self, request: &PositionRequest) -> Result<LayerPositions, EphemerisError>;
}
