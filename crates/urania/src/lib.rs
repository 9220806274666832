//! Natal and transit chart computation.
//!
//! Positions come in from a [`ephemeris::PositionSource`] (or any caller that
//! already has longitudes); the engine classifies them into signs and houses,
//! detects aspects, and assembles a serializable [`ChartSnapshot`]. Everything
//! past the position source is pure and synchronous.

pub mod analysis;
pub mod angles;
pub mod aspects;
pub mod chart;
pub mod ephemeris;
pub mod error;
pub mod export;
pub mod houses;
pub mod zodiac;

pub use analysis::{generate_analysis, ChartAnalysis};
pub use aspects::{AspectCalculator, AspectCatalog, AspectKind, DetectedAspect};
pub use chart::{BirthData, ChartSnapshot, SnapshotAssembler};
pub use ephemeris::{BodyId, CelestialBody, LayerPositions, MockEphemeris, PositionSource};
pub use error::ChartError;
pub use export::{analysis_to_text, snapshot_from_json, snapshot_to_json};
pub use houses::{house_for_longitude, HouseCusps};
