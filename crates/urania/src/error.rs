use thiserror::Error;

/// Errors raised at the edges of the engine (input validation and export).
///
/// The computations themselves are total and never return these.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Expected 12 house cusps, got {found}")]
    InvalidCuspCount { found: usize },
    #[error("Invalid house number {house}. Valid houses: 1-12")]
    InvalidHouseNumber { house: u8 },
    #[error("House {house} appears more than once in the cusp list")]
    DuplicateHouse { house: u8 },
    #[error("Unknown aspect: {name}. Valid aspects: {valid:?}")]
    UnknownAspect { name: String, valid: Vec<String> },
    #[error("Snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
