//! Chart snapshot assembly.

pub mod assembler;
pub mod snapshot;

pub use assembler::{BirthData, SnapshotAssembler};
pub use snapshot::{
    AspectEntry, BasicInfo, ChartSnapshot, HouseEntry, PlanetEntry, SpecialPoint, SpecialPoints,
    TransitAspectEntry, TransitSnapshot,
};

/// The one place degrees are rounded for display: one decimal, ties rounded up.
///
/// `{:.1}` alone rounds exact binary ties to even (`0.25` -> `"0.2"`).
pub fn format_degree(value: f64) -> String {
    format!("{:.1}", (value * 10.0).round() / 10.0)
}
