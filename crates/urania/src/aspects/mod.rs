pub mod calculator;
pub mod types;

pub use calculator::AspectCalculator;
pub use types::{
    AspectCatalog, AspectCore, AspectDefinition, AspectKind, AspectRelation, DetectedAspect,
    MAJOR_ASPECTS, MINOR_ASPECTS,
};
